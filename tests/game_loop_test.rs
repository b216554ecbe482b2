//! Integration test: game loop behavior
//!
//! Drives `FlappyGame` through the public API the way the frame loop does:
//! inputs between ticks, fixed ticks, restart after a crash.

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use flapper::game::{process_input, process_tick, resize, CrashCause};
use flapper::input::map_event;
use flapper::ui::restart_button_area;
use flapper::{FlappyGame, FlappyInput, GameConfig, GameStatus, PlayField, TickEvent};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::layout::Rect;

fn field(width: f64, height: f64) -> PlayField {
    PlayField { width, height }
}

fn new_game() -> FlappyGame {
    FlappyGame::new(GameConfig::default(), field(800.0, 600.0))
}

/// Simulate `count` ticks, collecting every event.
fn simulate_ticks(game: &mut FlappyGame, rng: &mut ChaCha8Rng, count: u32) -> Vec<TickEvent> {
    let mut all_events = Vec::new();
    for _ in 0..count {
        all_events.extend(process_tick(game, rng));
    }
    all_events
}

fn left_click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Crash by free fall, then record a score to check it survives stray input.
fn crashed_game(rng: &mut ChaCha8Rng) -> FlappyGame {
    let mut game = new_game();
    while game.status == GameStatus::Active {
        process_tick(&mut game, rng);
    }
    game.score = 4;
    game
}

/// Keep the bird centred on the gap of the nearest obstacle ahead of it.
fn autopilot(game: &mut FlappyGame) {
    let bird_x = game.config.bird_x;
    let target = game
        .obstacles
        .iter()
        .find(|o| o.x + game.config.obstacle_width >= bird_x)
        .map(|o| {
            let (top, bottom) = o.gap_bounds(game.field.height);
            (top + bottom) / 2.0
        })
        .unwrap_or(game.field.height / 2.0);
    let bird_centre = game.bird.y + game.config.bird_height / 2.0;
    if bird_centre > target + 10.0 && game.bird.velocity > 0.0 {
        process_input(game, FlappyInput::Jump);
    }
}

// =============================================================================
// Physics
// =============================================================================

#[test]
fn test_jump_then_ten_ticks_velocity() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    process_input(&mut game, FlappyInput::Jump);
    simulate_ticks(&mut game, &mut rng, 10);

    assert_eq!(game.status, GameStatus::Active);
    assert!((game.bird.velocity - (-3.0)).abs() < 1e-9);
}

#[test]
fn test_velocity_grows_by_gravity_while_active() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let floor = game.field.height - game.config.bird_height;

    while game.status == GameStatus::Active {
        let before = game.bird.velocity;
        process_tick(&mut game, &mut rng);
        assert!((game.bird.velocity - (before + game.config.gravity)).abs() < 1e-9);
        assert!(game.bird.y >= 0.0 && game.bird.y <= floor);
    }
}

#[test]
fn test_free_fall_hits_floor() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let events = simulate_ticks(&mut game, &mut rng, 200);

    assert_eq!(game.status, GameStatus::Over);
    let crashes: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, TickEvent::Crashed { .. }))
        .collect();
    assert_eq!(crashes.len(), 1, "game over is reported exactly once");
    assert!(matches!(
        crashes[0],
        TickEvent::Crashed {
            cause: CrashCause::Floor,
            ..
        }
    ));
}

// =============================================================================
// Obstacles and scoring
// =============================================================================

#[test]
fn test_every_obstacle_fills_field_height() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    for _ in 0..3000 {
        autopilot(&mut game);
        process_tick(&mut game, &mut rng);
        for o in &game.obstacles {
            let total = o.top_height + game.config.obstacle_gap + o.bottom_height;
            assert!((total - game.field.height).abs() < 1e-9);
        }
        if game.status == GameStatus::Over {
            break;
        }
    }
}

#[test]
fn test_spawn_order_is_left_to_right() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    for _ in 0..400 {
        autopilot(&mut game);
        process_tick(&mut game, &mut rng);
        if game.status == GameStatus::Over {
            break;
        }
    }
    assert!(game.obstacles.len() >= 2);
    for pair in game.obstacles.windows(2) {
        assert!(pair[0].x < pair[1].x);
    }
}

#[test]
fn test_score_matches_scored_events() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let mut scored = 0;

    for _ in 0..2000 {
        autopilot(&mut game);
        for event in process_tick(&mut game, &mut rng) {
            if let TickEvent::Scored { score } = event {
                scored += 1;
                assert_eq!(score, scored);
            }
        }
        if game.status == GameStatus::Over {
            break;
        }
    }
    assert_eq!(game.score, scored);
}

#[test]
fn test_pass_scores_exactly_once() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut obstacle = game.make_obstacle(game.bird.y - 55.0);
    obstacle.x = 120.0;
    game.obstacles.push(obstacle);

    // Hold the bird still inside the gap while the obstacle passes.
    let hold = game.bird.y;
    for _ in 0..60 {
        game.bird.y = hold;
        game.bird.velocity = -game.config.gravity;
        process_tick(&mut game, &mut rng);
        assert_eq!(game.status, GameStatus::Active);
    }
    assert_eq!(game.score, 1);
}

// =============================================================================
// Collisions and restart
// =============================================================================

#[test]
fn test_collision_is_terminal_until_restart() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut wall = game.make_obstacle(400.0);
    wall.x = 100.0;
    game.obstacles.push(wall);

    let events = process_tick(&mut game, &mut rng);
    assert_eq!(game.status, GameStatus::Over);
    assert!(events.iter().any(|e| matches!(e, TickEvent::Crashed { .. })));

    let frozen = game.bird;
    let obstacles = game.obstacles.clone();
    assert!(simulate_ticks(&mut game, &mut rng, 30).is_empty());
    assert!(!process_input(&mut game, FlappyInput::Jump));
    assert_eq!(game.bird, frozen);
    assert_eq!(game.obstacles, obstacles);
}

#[test]
fn test_restart_from_over() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    simulate_ticks(&mut game, &mut rng, 200);
    assert_eq!(game.status, GameStatus::Over);

    assert!(process_input(&mut game, FlappyInput::Restart));
    assert_eq!(game.status, GameStatus::Active);
    assert_eq!(game.score, 0);
    assert!(game.obstacles.is_empty());
    assert_eq!(game.bird.y, 280.0);
    assert_eq!(game.bird.velocity, 0.0);
    assert_eq!(game.bird.rotation, 0.0);
}

#[test]
fn test_click_off_restart_control_keeps_game_over() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let mut game = crashed_game(&mut rng);
    let screen = Rect::new(0, 0, 80, 24);

    for (column, row) in [(0, 0), (5, 3), (40, 20), (70, 5)] {
        let event = left_click(column, row);
        let input = map_event(&event, game.status, restart_button_area(screen)).unwrap();
        assert_eq!(input, FlappyInput::Other);
        assert!(!process_input(&mut game, input));
        assert_eq!(game.status, GameStatus::Over);
        assert_eq!(game.score, 4);
    }
}

#[test]
fn test_click_on_restart_control_restarts() {
    let mut rng = ChaCha8Rng::seed_from_u64(22);
    let mut game = crashed_game(&mut rng);
    let screen = Rect::new(0, 0, 80, 24);
    let button = restart_button_area(screen).unwrap();

    let event = left_click(button.x + button.width / 2, button.y);
    let input = map_event(&event, game.status, Some(button)).unwrap();
    assert_eq!(input, FlappyInput::Restart);
    assert!(process_input(&mut game, input));
    assert_eq!(game.status, GameStatus::Active);
    assert_eq!(game.score, 0);
}

#[test]
fn test_same_seed_same_run() {
    let run = |seed| {
        let mut game = new_game();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..500 {
            autopilot(&mut game);
            process_tick(&mut game, &mut rng);
        }
        (game.score, game.obstacles)
    };
    assert_eq!(run(11), run(11));
}

// =============================================================================
// Resize
// =============================================================================

#[test]
fn test_resize_mid_run_keeps_invariants() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(10);
    for _ in 0..300 {
        autopilot(&mut game);
        process_tick(&mut game, &mut rng);
    }

    let smaller = field(500.0, 320.0);
    resize(&mut game, smaller);

    assert!(game.bird.y <= smaller.height - game.config.bird_height);
    for o in &game.obstacles {
        let total = o.top_height + game.config.obstacle_gap + o.bottom_height;
        assert!((total - smaller.height).abs() < 1e-9);
        assert!(o.bottom_height >= 0.0);
    }
}
