//! ratatui drawing for both programs
//!
//! Cells are two columns wide so they come out roughly square in a terminal.

pub mod caption;
pub mod life;
pub mod snakebird;

pub use life::LifeRenderer;
pub use snakebird::{SnakebirdRenderer, Tile, tile_map};
