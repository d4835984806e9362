pub mod canvas;
pub mod time;
pub mod types;
