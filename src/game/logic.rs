//! Game logic: physics, obstacle scrolling, scoring, and collision detection.

use super::types::{FlappyGame, GameStatus, Obstacle, PlayField};
use rand::Rng;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Space, Up, `k`, or a left click while playing.
    /// Space, Up, Enter, or a left click while playing.
    Jump,
    /// The restart control on the game-over screen.
    Restart,
    /// Leave the game.
    Quit,
    /// Any other key.
    Other,
}

/// What ended the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    Obstacle,
    Floor,
    Ceiling,
}

/// Notable outcomes of a single tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    ObstacleSpawned { top_height: f64 },
    Scored { score: u32 },
    Crashed { cause: CrashCause, score: u32 },
}

/// Apply a player action. Returns true if the game state changed.
///
/// Jumps only register while Active; restart only while Over. `Quit` is
/// handled by the caller.
pub fn process_input(game: &mut FlappyGame, input: FlappyInput) -> bool {
    match input {
        FlappyInput::Jump => jump(game),
        FlappyInput::Restart => restart(game),
        FlappyInput::Quit | FlappyInput::Other => false,
    }
}

/// Set the upward impulse and tilt the bird up.
pub fn jump(game: &mut FlappyGame) -> bool {
    if !game.is_active() {
        return false;
    }
    game.bird.velocity = game.config.jump_impulse;
    game.bird.rotation = game.config.jump_tilt;
    true
}

/// Start a fresh run after a crash.
pub fn restart(game: &mut FlappyGame) -> bool {
    if game.status != GameStatus::Over {
        return false;
    }
    game.bird = FlappyGame::initial_bird(&game.config, game.field);
    game.obstacles.clear();
    game.score = 0;
    game.tick_count = 0;
    game.status = GameStatus::Active;
    true
}

/// Replace the play field after a viewport change.
///
/// The bird is pulled back inside the new bounds and live obstacles keep
/// `top + gap + bottom == field height`.
pub fn resize(game: &mut FlappyGame, field: PlayField) {
    if game.field == field {
        return;
    }
    game.field = field;
    game.bird.y = game.bird.y.clamp(0.0, game.bird_floor());

    let (min_top, max_top) = game.gap_top_range();
    let gap = game.config.obstacle_gap;
    for obstacle in &mut game.obstacles {
        obstacle.top_height = obstacle.top_height.clamp(min_top, max_top);
        obstacle.bottom_height = field.height - obstacle.top_height - gap;
    }
}

/// Advance the game by one fixed tick.
pub fn process_tick<R: Rng>(game: &mut FlappyGame, rng: &mut R) -> Vec<TickEvent> {
    let mut events = Vec::new();
    if !game.is_active() {
        return events;
    }
    game.tick_count += 1;

    step_bird(game);
    advance_obstacles(game, rng, &mut events);
    score_passed_obstacles(game, &mut events);

    if let Some(cause) = check_collisions(game) {
        game.status = GameStatus::Over;
        events.push(TickEvent::Crashed {
            cause,
            score: game.score,
        });
    }

    events
}

/// Integrate gravity, clamp to the field, and let the bird nose down.
fn step_bird(game: &mut FlappyGame) {
    let floor = game.bird_floor();
    let bird = &mut game.bird;
    bird.velocity += game.config.gravity;
    bird.y = (bird.y + bird.velocity).clamp(0.0, floor);
    bird.rotation = (bird.rotation + game.config.rotation_step).min(game.config.rotation_cap);
}

/// Scroll obstacles left, drop the ones fully off-field, spawn when due.
fn advance_obstacles<R: Rng>(game: &mut FlappyGame, rng: &mut R, events: &mut Vec<TickEvent>) {
    let step = game.config.obstacle_step;
    let width = game.config.obstacle_width;

    for obstacle in &mut game.obstacles {
        obstacle.x -= step;
    }
    game.obstacles.retain(|o| o.x > -width);

    let spawn_threshold = game.field.width - game.config.spawn_spacing;
    let due = game
        .obstacles
        .last()
        .map_or(true, |last| last.x < spawn_threshold);
    if due {
        let top_height = game.spawn_obstacle(rng).top_height;
        events.push(TickEvent::ObstacleSpawned { top_height });
    }
}

/// Credit each obstacle once its trailing edge is behind the bird.
fn score_passed_obstacles(game: &mut FlappyGame, events: &mut Vec<TickEvent>) {
    let bird_x = game.config.bird_x;
    let width = game.config.obstacle_width;
    for obstacle in game
        .obstacles
        .iter_mut()
        .filter(|o| !o.passed && o.x + width < bird_x)
    {
        obstacle.passed = true;
        game.score += 1;
        events.push(TickEvent::Scored { score: game.score });
    }
}

/// First collision found this tick, if any.
pub fn check_collisions(game: &FlappyGame) -> Option<CrashCause> {
    let bird = game.bird_rect();
    let width = game.config.obstacle_width;
    let height = game.field.height;

    let hit_obstacle = game.obstacles.iter().any(|o: &Obstacle| {
        bird.overlaps(&o.top_rect(width)) || bird.overlaps(&o.bottom_rect(width, height))
    });
    if hit_obstacle {
        Some(CrashCause::Obstacle)
    } else if game.bird.y >= game.bird_floor() {
        Some(CrashCause::Floor)
    } else if game.bird.y <= 0.0 {
        Some(CrashCause::Ceiling)
    } else {
        None
    }
}
