pub mod manager;
pub mod stream;
pub mod window;
