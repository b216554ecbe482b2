//! Default tuning for the game loop.
//!
//! All lengths are in abstract pixels; velocities are pixels per tick.

// Tick and timing
/// Fixed tick interval (~60 Hz).
pub const TICK_INTERVAL_MS: u64 = 1000 / 60;
/// Upper bound on accumulated lag before ticks are dropped.
pub const MAX_FRAME_LAG_MS: u64 = 100;

// Bird physics
pub const GRAVITY: f64 = 0.5;
pub const JUMP_IMPULSE: f64 = -8.0;
pub const BIRD_X: f64 = 100.0;
pub const BIRD_WIDTH: f64 = 40.0;
pub const BIRD_HEIGHT: f64 = 40.0;

// Bird rotation (degrees; negative tilts the beak up)
pub const ROTATION_STEP: f64 = 1.0;
pub const ROTATION_CAP: f64 = 30.0;
pub const JUMP_TILT: f64 = -20.0;

// Obstacles
pub const OBSTACLE_WIDTH: f64 = 60.0;
pub const OBSTACLE_GAP: f64 = 150.0;
pub const OBSTACLE_STEP: f64 = 3.0;
pub const SPAWN_SPACING: f64 = 250.0;
/// Smallest allowed top-segment height.
pub const GAP_MARGIN_TOP: f64 = 100.0;
/// Distance from the field bottom to the largest allowed top-segment height.
pub const GAP_MARGIN_BOTTOM: f64 = 200.0;

// Play field
pub const MAX_FIELD_WIDTH: f64 = 800.0;
pub const MAX_FIELD_HEIGHT: f64 = 600.0;
/// Space kept free around the field when fitting it into the viewport.
pub const VIEWPORT_PADDING: f64 = 40.0;

// Terminal projection: one cell covers this many pixels
pub const CELL_WIDTH_PX: f64 = 10.0;
pub const CELL_HEIGHT_PX: f64 = 20.0;
