pub mod gateway;
pub mod render;
pub mod session;
pub mod writing;
