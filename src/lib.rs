pub mod app;
pub mod config;
pub mod error;
pub mod food;
pub mod grid;
pub mod menu;
pub mod scene;
pub mod score;
pub mod session;
pub mod snake;

pub use error::{Error, Result};
