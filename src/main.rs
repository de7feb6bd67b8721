mod ui;

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::assets::Assets;
use flappy::build_info;
use flappy::config::{GameConfig, Overrides};
use flappy::constants::TICK_INTERVAL_MS;
use flappy::game::{GameEvent, Session};
use flappy::input::{map_key, map_keys};
use flappy::logging;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Play {
        config: Option<PathBuf>,
        overrides: Overrides,
    },
    InitConfig {
        config: Option<PathBuf>,
    },
    Version,
    Help,
}

fn print_help() {
    println!("Flappy Bird for the terminal\n");
    println!("Usage: flappy [init-config] [options]\n");
    println!("Commands:");
    println!("  init-config          Write a default config file and exit");
    println!("\nOptions:");
    println!("  --seed N             Seed the pipe gap generator");
    println!("  --assets DIR         Load bird1-3.png, pipe.png, base.png, bg.png from DIR");
    println!("  --config FILE        Read configuration from FILE");
    println!("  --log-level LEVEL    off, error, warn, info, debug or trace");
    println!("  --version, -v        Show version information");
    println!("  --help, -h           Show this help message");
    println!("\nKeys: Space/Up flap, P pause, C play again, Esc quit (after losing), Q quit");
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut config = None;
    let mut overrides = Overrides::default();
    let mut init_config = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .with_context(|| format!("{} needs a value", flag))
        };
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "init-config" => init_config = true,
            "--seed" => {
                let raw = value("--seed")?;
                let seed = raw
                    .parse()
                    .with_context(|| format!("invalid seed '{}'", raw))?;
                overrides.seed = Some(seed);
            }
            "--assets" => overrides.asset_dir = Some(PathBuf::from(value("--assets")?)),
            "--config" => config = Some(PathBuf::from(value("--config")?)),
            "--log-level" => overrides.log_level = Some(value("--log-level")?),
            other => bail!("unknown argument '{}' (run 'flappy --help' for usage)", other),
        }
    }

    if init_config {
        return Ok(Command::InitConfig { config });
    }
    Ok(Command::Play { config, overrides })
}

fn load_config(path: Option<PathBuf>) -> Result<(PathBuf, GameConfig)> {
    let path = match path {
        Some(path) => path,
        None => GameConfig::default_path()?,
    };
    let config = GameConfig::load(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    Ok((path, config))
}

fn init_config(path: Option<PathBuf>) -> Result<()> {
    let (path, config) = load_config(path)?;
    config.save(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Restores the terminal when dropped, including on error and panic unwind.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = stdout.execute(EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = io::stdout().execute(LeaveAlternateScreen);
                return Err(e);
            }
        };
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = self.terminal.backend_mut().execute(LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn play(config_path: Option<PathBuf>, overrides: Overrides) -> Result<()> {
    let (path, mut config) = load_config(config_path)?;
    config.apply(overrides);

    let level = config.level_filter()?;
    let log_path = config.log_path()?;
    logging::init(level, &log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;
    log::info!("{}", build_info::version_line());
    log::debug!("config {} -> {:?}", path.display(), config);

    let assets = Assets::load(config.asset_dir.as_deref()).context("failed to load sprites")?;

    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("pipe seed {}", seed);
    let mut session = Session::new(assets, ChaCha8Rng::seed_from_u64(seed));

    let mut guard = TerminalGuard::enter().context("failed to set up the terminal")?;
    let result = run(&mut guard.terminal, &mut session);
    drop(guard);

    log::info!(
        "exiting after {} round(s), best score {}",
        session.rounds(),
        session.best_score()
    );
    result
}

/// Fixed 30 Hz loop: draw, gather input until the next tick is due, then
/// step the session with everything that arrived.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut Session<Assets, ChaCha8Rng>,
) -> Result<()> {
    let tick = Duration::from_millis(TICK_INTERVAL_MS);
    let mut next_tick = Instant::now() + tick;
    let mut keys = Vec::new();

    while !session.is_terminated() {
        terminal.draw(|frame| {
            ui::draw_game(
                frame,
                &session.scene(),
                session.sprites(),
                session.best_score(),
            )
        })?;

        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                keys.push(key);
                if map_key(key) == Some(GameEvent::QuitRequested) {
                    break;
                }
            }
        }

        session.tick(&map_keys(keys.drain(..)));

        // Drop missed frames instead of replaying them in a burst
        next_tick += tick;
        let now = Instant::now();
        if next_tick < now {
            next_tick = now + tick;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match parse_args(&args)? {
        Command::Version => println!("{}", build_info::version_line()),
        Command::Help => print_help(),
        Command::InitConfig { config } => init_config(config)?,
        Command::Play { config, overrides } => play(config, overrides)?,
    }
    Ok(())
}
