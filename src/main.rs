use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use grid_snake::config::{
    BoardConfig, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_INITIAL_LENGTH,
    DEFAULT_TICK_INTERVAL_MS, FRAME_POLL_MS,
};
use grid_snake::game::GameState;
use grid_snake::input::{self, GameInput};
use grid_snake::renderer::{self, ViewContext};
use grid_snake::score::{self, BestRecord};
use grid_snake::snapshot::{self, SessionMode};
use grid_snake::terminal_runtime::{self, TerminalSession};
use grid_snake::theme::THEMES;

/// Retro terminal snake with a deterministic engine.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board width in cells (clamped to at least 4).
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: u16,

    /// Board height in cells (clamped to at least 4).
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: u16,

    /// Starting snake length (clamped to at least 2).
    #[arg(long = "initial-length", default_value_t = DEFAULT_INITIAL_LENGTH)]
    initial_length: u16,

    /// Milliseconds between simulation ticks.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Seed for the random source; omit for an entropy-based seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Print one JSON game snapshot instead of starting the UI.
    #[arg(long)]
    snapshot: bool,

    /// With --snapshot: advance the engine by this many milliseconds first.
    #[arg(long = "advance-ms")]
    advance_ms: Option<u64>,
}

impl Cli {
    fn board_config(&self) -> BoardConfig {
        BoardConfig {
            width: self.width,
            height: self.height,
            initial_length: self.initial_length,
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if cli.snapshot {
        return run_headless(&cli);
    }

    let records = match score::load_records() {
        Ok(records) => records,
        Err(error) => {
            eprintln!("Warning: could not read best-run records: {error}");
            BestRecord::default()
        }
    };

    terminal_runtime::install_panic_hook();
    run(&cli, records)
}

/// Prints a single snapshot line, optionally fast-forwarded, and exits.
///
/// This is the non-TTY surface automated harnesses drive.
fn run_headless(cli: &Cli) -> io::Result<()> {
    let mut rng = cli.rng();
    let mut state = GameState::new(cli.board_config(), &mut rng);

    if let Some(ms) = cli.advance_ms {
        state = snapshot::advance_by_millis(&state, ms, cli.tick_ms, &mut rng);
    }

    let mode = SessionMode::current(true, false, &state);
    let text = snapshot::render_game_to_text(&state, mode).map_err(io::Error::other)?;
    println!("{text}");
    Ok(())
}

fn run(cli: &Cli, mut records: BestRecord) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut rng = cli.rng();
    let mut state = GameState::new(cli.board_config(), &mut rng);

    let mut open = false;
    let mut paused = false;
    let mut theme_idx = 0;
    let mut run_recorded = false;

    let tick_interval = Duration::from_millis(cli.tick_ms.max(1));
    let mut last_tick = Instant::now();

    loop {
        let view = ViewContext {
            theme: &THEMES[theme_idx],
            open,
            paused,
            best_score: records.best_score,
        };
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, view))?;

        if let Some(game_input) = input::poll_game_input(Duration::from_millis(FRAME_POLL_MS))? {
            match game_input {
                GameInput::Quit => break,
                GameInput::CycleTheme => theme_idx = (theme_idx + 1) % THEMES.len(),
                GameInput::Confirm | GameInput::TogglePause if !open => {
                    open = true;
                    paused = false;
                    run_recorded = false;
                    state = state.restart(&mut rng);
                    last_tick = Instant::now();
                }
                GameInput::Restart => {
                    open = true;
                    paused = false;
                    run_recorded = false;
                    state = state.restart(&mut rng);
                    last_tick = Instant::now();
                }
                GameInput::Confirm if state.game_over => {
                    paused = false;
                    run_recorded = false;
                    state = state.restart(&mut rng);
                    last_tick = Instant::now();
                }
                GameInput::TogglePause if !state.game_over => paused = !paused,
                GameInput::Direction(direction) if open && !paused && !state.game_over => {
                    state = state.set_direction(direction);
                }
                _ => {}
            }
        }

        if open && !paused && !state.game_over && last_tick.elapsed() >= tick_interval {
            state = state.advance(&mut rng);
            last_tick = Instant::now();
        }

        if open && state.game_over && !run_recorded {
            run_recorded = true;
            if records.register_run(state.score, state.snake.len())
                && let Err(error) = score::save_records(records)
            {
                eprintln!("Warning: could not save best-run records: {error}");
            }
        }
    }

    Ok(())
}
