pub mod life;
pub mod snakebird;
pub mod terminal;

pub use life::LifeMode;
pub use snakebird::SnakebirdMode;
