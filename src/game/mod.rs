//! Flappy game loop.
//!
//! A bird falls under gravity and jumps on demand while gated obstacles
//! scroll in from the right. Passing an obstacle scores a point; touching an
//! obstacle, the floor, or the ceiling ends the run until restarted.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
