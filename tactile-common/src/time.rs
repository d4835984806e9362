/// Cross-platform time types
/// Uses web_time for WASM targets and std::time for native targets

#[cfg(target_arch = "wasm32")]
pub use web_time::{Duration, Instant};

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::{Duration, Instant};
