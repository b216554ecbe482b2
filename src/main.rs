use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use flapper::core::constants::MAX_FRAME_LAG_MS;
use flapper::game::{
    process_input, process_tick, resize, CrashCause, FlappyGame, FlappyInput, PlayField, TickEvent,
};
use flapper::input::map_event;
use flapper::ui::{self, responsive};
use flapper::utils::{build_info, logging};
use flapper::{GameConfig, TickClock};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "flapper")]
#[command(about = "Flappy-Bird-style arcade game for the terminal")]
#[command(disable_version_flag = true)]
struct Args {
    /// JSON config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for obstacle placement; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Log file (defaults to the platform data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Override gravity (pixels/tick²)
    #[arg(long)]
    gravity: Option<f64>,

    /// Override jump impulse (pixels/tick, negative = up)
    #[arg(long, allow_hyphen_values = true)]
    jump: Option<f64>,

    /// Override the obstacle gap height (pixels)
    #[arg(long)]
    gap: Option<f64>,

    /// Show version information
    #[arg(short = 'v', long)]
    version: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut GameConfig) {
        if let Some(gravity) = self.gravity {
            config.gravity = gravity;
        }
        if let Some(jump) = self.jump {
            config.jump_impulse = jump;
        }
        if let Some(gap) = self.gap {
            config.obstacle_gap = gap;
        }
    }
}

/// Restores the terminal on drop, including on early returns and panics
/// unwinding through `main`.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.version {
        println!("{}", build_info::version_line());
        return Ok(());
    }

    let log_path = args
        .log_file
        .clone()
        .or_else(logging::default_log_path)
        .context("no log file given and no platform data directory available")?;
    logging::init_logging(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let mut config = GameConfig::load(args.config.as_deref()).context("failed to load config")?;
    args.apply_overrides(&mut config);
    config.validate().context("invalid command-line override")?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    tracing::info!(
        version = %build_info::version_line(),
        seed = ?args.seed,
        gravity = config.gravity,
        jump = config.jump_impulse,
        gap = config.obstacle_gap,
        "starting"
    );

    let guard = TerminalGuard::enter().context("failed to set up terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let size = terminal.size()?;
    // Too small to start with: use the largest field until a resize says otherwise.
    let field = match responsive::play_area_viewport(size.width, size.height) {
        Some(viewport) => PlayField::fit(viewport, &config),
        None => PlayField::max(&config),
    };
    let mut game = FlappyGame::new(config, field);

    let result = run(&mut terminal, &mut game, &mut rng);
    drop(guard);

    tracing::info!(score = game.score, ticks = game.tick_count, "exiting");
    result.context("game loop failed")
}

/// Frame loop: wait for input until the next tick is due, apply input, run
/// due ticks, draw. Returns when the player quits.
///
/// While the terminal is too small the game is not drawn and does not tick.
fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    game: &mut FlappyGame,
    rng: &mut StdRng,
) -> io::Result<()> {
    let mut clock = TickClock::new(
        Duration::from_millis(game.config.tick_interval_ms),
        Duration::from_millis(MAX_FRAME_LAG_MS),
    );
    let mut last_frame = Instant::now();
    let mut screen = terminal.size()?;

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, game))?;

        if event::poll(clock.until_next())? {
            // Drain everything queued so a burst of input costs one frame
            loop {
                let event = event::read()?;
                if let Event::Resize(cols, rows) = event {
                    screen = Rect::new(0, 0, cols, rows);
                    handle_resize(game, cols, rows);
                } else if let Some(input) =
                    map_event(&event, game.status, ui::restart_button_area(screen))
                {
                    if input == FlappyInput::Quit {
                        return Ok(());
                    }
                    let visible = !responsive::is_too_small(screen);
                    if visible && process_input(game, input) && input == FlappyInput::Restart {
                        clock.reset();
                        tracing::info!("restarted");
                    }
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        let now = Instant::now();
        let due = clock.advance_visible(now - last_frame, !responsive::is_too_small(screen));
        last_frame = now;
        for _ in 0..due {
            let events = process_tick(game, rng);
            log_tick_events(&events);
            if !game.is_active() {
                break;
            }
        }
    }
}

fn handle_resize(game: &mut FlappyGame, cols: u16, rows: u16) {
    let Some(viewport) = responsive::play_area_viewport(cols, rows) else {
        tracing::debug!(cols, rows, "terminal too small, game paused");
        return;
    };
    let field = PlayField::fit(viewport, &game.config);
    if field != game.field {
        tracing::info!(
            cols,
            rows,
            width = field.width,
            height = field.height,
            "play field resized"
        );
        resize(game, field);
    }
}

fn log_tick_events(events: &[TickEvent]) {
    for event in events {
        match event {
            TickEvent::ObstacleSpawned { top_height } => {
                tracing::debug!(top_height, "obstacle spawned");
            }
            TickEvent::Scored { score } => tracing::debug!(score, "scored"),
            TickEvent::Crashed { cause, score } => {
                let cause = match cause {
                    CrashCause::Obstacle => "obstacle",
                    CrashCause::Floor => "floor",
                    CrashCause::Ceiling => "ceiling",
                };
                tracing::info!(cause, score, "game over");
            }
        }
    }
}
