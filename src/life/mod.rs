//! Conway's Game of Life on a bounded grid
//!
//! Pure simulation code with no terminal dependencies: the grid, the B3/S23
//! rule, and a double-buffered driver that the front end ticks.

pub mod automaton;
pub mod config;
pub mod grid;

pub use automaton::Life;
pub use config::LifeConfig;
pub use grid::{LifeGrid, next_generation, next_state};
