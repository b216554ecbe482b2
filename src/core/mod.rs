//! Tuning constants, configuration, and the tick clock.

pub mod config;
pub mod constants;
pub mod tick;

pub use config::{ConfigError, GameConfig};
pub use constants::*;
pub use tick::TickClock;
