pub mod celebrity;
pub mod config;

pub use celebrity::*;
pub use config::*;
