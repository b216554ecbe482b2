//! Flapper - terminal Flappy-Bird-style arcade game.
//!
//! The game loop lives in [`game`] and is independent of the terminal; [`ui`]
//! and [`input`] adapt it to ratatui/crossterm.

pub mod core;
pub mod game;
pub mod input;
pub mod ui;
pub mod utils;

pub use crate::core::{ConfigError, GameConfig, TickClock, TICK_INTERVAL_MS};
pub use game::{FlappyGame, FlappyInput, GameStatus, PlayField, TickEvent, Viewport};
