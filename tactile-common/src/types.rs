#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier for one concurrent pointer contact.
///
/// The mouse is a singleton; each simultaneous touch carries the opaque
/// identifier issued by the host windowing layer. At most one interaction is
/// active per id at any time.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InteractionId {
    Mouse,
    Touch(u64),
}
