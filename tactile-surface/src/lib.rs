pub mod behavior;
pub mod error;
pub mod fader;
pub mod grid;
pub mod store;
pub mod xypad;
