//! Snakebird-style puzzle rules
//!
//! The snake moves one cell per key press, grows by eating fruit, and falls
//! as a rigid body whenever nothing solid is underneath it. Everything here is
//! free of I/O so the rules can be driven by the terminal front end or by
//! tests.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::SnakebirdConfig;
pub use direction::Direction;
pub use engine::{
    BlockReason, FrameResult, GravityOutcome, GravityTimer, MoveOutcome, SnakebirdEngine,
};
pub use state::{Platform, Position, Snake, World};
