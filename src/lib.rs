//! Vim Snake - a terminal snake game steered with vim-style hjkl keys
//!
//! This library provides:
//! - Core simulation: snake movement, food placement, level-driven game
//!   clock (game module)
//! - Key event mapping, gating, and the key log (input module)
//! - Derived scoring: elapsed time, keystrokes, final score (score module)
//! - TUI rendering of game snapshots (render module)
//! - The interactive terminal session (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
pub mod score;
