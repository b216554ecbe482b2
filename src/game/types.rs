//! Game data structures: play field, bird, obstacles, and the game state.
//!
//! Coordinates are in abstract pixels with the origin at the top-left corner
//! of the play field; `y` grows downward.

use crate::core::config::GameConfig;
use rand::Rng;

/// Drawing space available to the game, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Bounds of the play field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayField {
    pub width: f64,
    pub height: f64,
}

impl PlayField {
    /// Fit the field into a viewport: leave `viewport_padding` free, never
    /// exceed the configured maximum, never drop below the field minimum.
    pub fn fit(viewport: Viewport, config: &GameConfig) -> Self {
        let width = (viewport.width - config.viewport_padding)
            .min(config.max_field_width)
            .max(config.min_field_width());
        let height = (viewport.height - config.viewport_padding)
            .min(config.max_field_height)
            .max(config.min_field_height());
        Self { width, height }
    }

    /// Largest field the configuration allows.
    pub fn max(config: &GameConfig) -> Self {
        Self {
            width: config.max_field_width,
            height: config.max_field_height,
        }
    }
}

/// Axis-aligned rectangle used for collision tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// The player's bird. Its horizontal position is fixed by the config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Top edge of the bird.
    pub y: f64,
    /// Pixels per tick (positive = downward).
    pub velocity: f64,
    /// Visual tilt in degrees (negative = beak up).
    pub rotation: f64,
}

/// A gated barrier pair scrolling toward the bird.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge.
    pub x: f64,
    pub top_height: f64,
    pub bottom_height: f64,
    /// Whether the bird has already been credited for this obstacle.
    pub passed: bool,
}

impl Obstacle {
    pub fn top_rect(&self, width: f64) -> Rect {
        Rect::new(self.x, 0.0, width, self.top_height)
    }

    pub fn bottom_rect(&self, width: f64, field_height: f64) -> Rect {
        Rect::new(
            self.x,
            field_height - self.bottom_height,
            width,
            self.bottom_height,
        )
    }

    /// Vertical extent of the opening as `(top, bottom)`.
    pub fn gap_bounds(&self, field_height: f64) -> (f64, f64) {
        (self.top_height, field_height - self.bottom_height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Over,
}

/// Main game state. Mutated once per tick by [`super::logic::process_tick`].
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub config: GameConfig,
    pub field: PlayField,
    pub bird: Bird,
    /// Spawn order; the last element is the most recently spawned.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub status: GameStatus,
    /// Ticks since the last (re)start.
    pub tick_count: u64,
}

impl FlappyGame {
    pub fn new(config: GameConfig, field: PlayField) -> Self {
        let bird = Self::initial_bird(&config, field);
        Self {
            config,
            field,
            bird,
            obstacles: Vec::new(),
            score: 0,
            status: GameStatus::Active,
            tick_count: 0,
        }
    }

    /// Bird at rest, vertically centred in the field.
    pub fn initial_bird(config: &GameConfig, field: PlayField) -> Bird {
        Bird {
            y: (field.height / 2.0 - config.bird_height / 2.0).max(0.0),
            velocity: 0.0,
            rotation: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }

    /// Lowest `y` the bird's top edge can reach.
    pub fn bird_floor(&self) -> f64 {
        (self.field.height - self.config.bird_height).max(0.0)
    }

    pub fn bird_rect(&self) -> Rect {
        Rect::new(
            self.config.bird_x,
            self.bird.y,
            self.config.bird_width,
            self.config.bird_height,
        )
    }

    /// Allowed range for an obstacle's top-segment height in the current field.
    pub fn gap_top_range(&self) -> (f64, f64) {
        let min = self.config.gap_margin_top;
        let max = (self.field.height - self.config.gap_margin_bottom).max(min);
        (min, max)
    }

    /// Build an obstacle at the right edge whose segments fill the field
    /// around a fixed-size gap.
    pub fn make_obstacle(&self, top_height: f64) -> Obstacle {
        Obstacle {
            x: self.field.width,
            top_height,
            bottom_height: self.field.height - top_height - self.config.obstacle_gap,
            passed: false,
        }
    }

    /// Append an obstacle at the right edge with a uniformly random gap offset.
    pub fn spawn_obstacle<R: Rng>(&mut self, rng: &mut R) -> &Obstacle {
        let (min, max) = self.gap_top_range();
        let top_height = if max > min {
            rng.gen_range(min..=max)
        } else {
            min
        };
        let obstacle = self.make_obstacle(top_height);
        self.obstacles.push(obstacle);
        &self.obstacles[self.obstacles.len() - 1]
    }
}
