//! Core simulation for the snake game.
//!
//! Everything here is pure state and logic with no I/O or rendering
//! dependencies: the grid geometry, the snake with its direction buffer,
//! food placement, and the game loop controller that ties them together
//! on a level-driven clock.

pub mod config;
pub mod controller;
pub mod food;
pub mod grid;
pub mod snake;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use controller::{GameController, GameSnapshot, GameStatus, TickResult};
pub use food::FoodField;
pub use grid::{Direction, Grid, Position};
pub use snake::{Snake, StepOutcome};
