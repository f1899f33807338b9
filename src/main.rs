//! Binary entrypoint for the Treasure Hunter CLI.
//!
//! Commands:
//! - `play [--name <name>] [--mode <mode>] [--seed <n>]` - play a game on this terminal
//! - `init` - create a starter `config.toml`
//!
//! See the library crate docs for module‑level details: `treasure_hunter::`.
use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

use treasure_hunter::config::Config;
use treasure_hunter::game::{Difficulty, SeededRandom, Session};
use treasure_hunter::validation::validate_hunter_name;

#[derive(Parser)]
#[command(name = "treasure-hunter")]
#[command(about = "Wander from town to town in search of treasure")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game
    Play {
        /// Hunter name (prompted for when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Difficulty: easy, normal, hard or samurai
        #[arg(short, long)]
        mode: Option<Difficulty>,

        /// Fixed seed to replay a game
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Write a default configuration file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            init_logging(None, cli.verbose);
            if std::path::Path::new(&cli.config).exists() {
                bail!("{} already exists; not overwriting", cli.config);
            }
            Config::create_default(&cli.config)?;
            println!("Wrote default configuration to {}", cli.config);
        }
        Commands::Play { name, mode, seed } => {
            let config = if std::path::Path::new(&cli.config).exists() {
                Some(Config::load(&cli.config)?)
            } else {
                None
            };
            init_logging(config.as_ref(), cli.verbose);
            if config.is_none() {
                warn!("No config at {}; using defaults", cli.config);
            }
            let config = config.unwrap_or_default();
            play(&config, name, mode, seed)?;
        }
    }

    Ok(())
}

fn play(config: &Config, name: Option<String>, mode: Option<Difficulty>, seed: Option<u64>) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let name = match name {
        Some(n) => validate_hunter_name(&n)?,
        None => prompt_name(&mut input, &mut stdout, &config.game.default_name)?,
    };
    let mode = mode.unwrap_or(config.game.default_mode);
    let seed = seed
        .or(config.game.seed)
        .unwrap_or_else(|| SeededRandom::from_entropy().seed());
    info!("Starting game for {} ({}) with seed {}", name, mode, seed);

    let mut session = Session::new(config, &name, mode, seed);
    writeln!(stdout, "Welcome, {}! Type ? for help.\n", name)?;
    writeln!(stdout, "{}", session.intro())?;

    let mut line = String::new();
    while !session.is_over() {
        write!(stdout, "\n[{}] Your move? ", session.status_line())?;
        stdout.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let out = session.handle(&line);
        writeln!(stdout, "{}", out)?;
    }
    writeln!(stdout, "\n{}", session.hunter().summary())?;
    Ok(())
}

fn prompt_name(input: &mut impl BufRead, out: &mut impl Write, default: &str) -> Result<String> {
    loop {
        write!(out, "What's your name, Hunter? [{}] ", default)?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || line.trim().is_empty() {
            return Ok(default.to_string());
        }
        match validate_hunter_name(&line) {
            Ok(n) => return Ok(n),
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}

fn init_logging(config: Option<&Config>, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let level = match (verbosity, config) {
        (0, Some(cfg)) => cfg.logging.level_filter(),
        (0, None) => log::LevelFilter::Warn,
        (1, _) => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);

    let mut open_error = None;
    let log_file = match config.and_then(|c| c.logging.file.as_deref()) {
        Some(path) => match open_log_file(path) {
            Ok(f) => Some(f),
            Err(e) => {
                open_error = Some(e);
                None
            }
        },
        None => None,
    };

    match log_file {
        Some(f) => {
            let file = std::sync::Mutex::new(f);
            // Echo to the console only when stderr is a terminal; the game itself owns stdout
            let is_tty = atty::is(atty::Stream::Stderr);
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = file.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if is_tty && record.level() <= log::Level::Warn {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        }
        None => {
            builder.format(|fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
            });
        }
    }
    let _ = builder.try_init();
    if let Some(e) = open_error {
        warn!("{}; logging to stderr only", e);
    }
}

fn open_log_file(path: &str) -> Result<std::fs::File> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow!("Failed to open log file {}: {}", path, e))
}
