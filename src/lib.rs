//! Grid demos - two small real-time terminal programs
//!
//! This library provides:
//! - Conway's Game of Life on a bounded grid (life module)
//! - A Snakebird-style puzzle with gravity and platforms (snakebird module)
//! - Terminal input, rendering and run loops for both (input, render, modes)

pub mod config_file;
pub mod error;
pub mod input;
pub mod life;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod rng;
pub mod snakebird;

pub use error::ConfigError;
