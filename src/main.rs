use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{ConfigError, GameConfig};
use grid_snake::game::{GameState, StartMode};
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::renderer;
use grid_snake::terminal_runtime::TerminalSession;
use grid_snake::theme::ThemeName;
use log::{LevelFilter, info};

/// Longest wait for input before the loop re-checks the tick deadline.
const MAX_POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Start playing immediately instead of showing the start menu.
    #[arg(long = "no-menu")]
    no_menu: bool,

    /// JSON file overriding the default game configuration.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme.
    #[arg(long, value_enum, default_value_t = ThemeName::Classic)]
    theme: ThemeName,

    /// Write logs to this file (filtered by `RUST_LOG`, default `info`).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Run this many ticks without a terminal and print the final state as JSON.
    #[arg(long, value_name = "TICKS")]
    headless: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = load_config(cli.config.as_deref()).map_err(config_error_to_io)?;
    let mode = if cli.no_menu || cli.headless.is_some() {
        StartMode::Immediate
    } else {
        StartMode::Menu
    };
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(config, mode, seed),
        None => GameState::new(config, mode),
    }
    .map_err(config_error_to_io)?;

    if let Some(ticks) = cli.headless {
        return run_headless(state, ticks);
    }

    let mut session = TerminalSession::enter()?;
    run(&mut session, state, cli.theme)
}

fn run(session: &mut TerminalSession, mut state: GameState, theme: ThemeName) -> io::Result<()> {
    let mut input = InputHandler::new();
    let tick_interval = state.config().tick_interval();
    let mut last_tick = Instant::now();

    loop {
        session.draw(|frame| renderer::render(frame, &state, theme.theme()))?;

        let until_tick = tick_interval.saturating_sub(last_tick.elapsed());
        if let Some(game_input) = input.poll_input(until_tick.min(MAX_POLL_INTERVAL))? {
            if matches!(game_input, GameInput::Quit) {
                break;
            }

            let was_ticking = state.is_ticking();
            state.apply_input(game_input);
            if !was_ticking && state.is_ticking() {
                last_tick = Instant::now();
            }
        }

        if state.is_ticking() && last_tick.elapsed() >= tick_interval {
            state.on_tick();
            last_tick = Instant::now();
        }
    }

    info!("quit with score {}", state.score());
    Ok(())
}

fn run_headless(mut state: GameState, ticks: u64) -> io::Result<()> {
    for _ in 0..ticks {
        if !state.is_ticking() {
            break;
        }
        state.on_tick();
    }

    let json = serde_json::to_string_pretty(&state.snapshot())
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;
    println!("{json}");
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<GameConfig, ConfigError> {
    match path {
        Some(path) => GameConfig::load_from_path(path),
        None => Ok(GameConfig::default()),
    }
}

fn config_error_to_io(error: ConfigError) -> io::Error {
    match error {
        ConfigError::Io(error) => error,
        ConfigError::Parse(error) => io::Error::new(io::ErrorKind::InvalidData, error),
        other => io::Error::new(io::ErrorKind::InvalidInput, other),
    }
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;

    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}
