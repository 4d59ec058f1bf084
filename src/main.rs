use clap::{Parser, ValueEnum};
use lifeterm::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "lifeterm",
    about = "Conway's Game of Life in the terminal",
    after_help = "Keys: arrows move, space toggles, m mass-edit, enter run/pause, q quit"
)]
struct Args {
    /// Milliseconds between generations while running
    #[arg(short, long)]
    tick_ms: Option<u64>,

    /// Character drawn for live cells (printable ASCII)
    #[arg(short, long)]
    glyph: Option<char>,

    /// Hide the status line below the grid
    #[arg(long)]
    no_status: bool,

    /// Config file (default: ~/.lifeterm/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file (default: lifeterm.log in the temp directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(long, default_value_t, value_enum)]
    log_level: LogLevel,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    // The screen belongs to the simulation, so logs go to a file.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("lifeterm.log"));
    if let Ok(log_file) = File::create(&log_path) {
        let _ = WriteLogger::init(args.log_level.into(), log_config, log_file);
    }

    log::info!("lifeterm starting, logging to {}", log_path.display());

    let file_config = config::load_config(args.config.as_deref()).map_err(|e| {
        log::error!("{}", e);
        io::Error::other(e)
    })?;
    let cli = CliOverrides {
        tick_ms: args.tick_ms,
        live_glyph: args.glyph,
        no_status: args.no_status,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!("Resolved config: {:?}", resolved);

    lifeterm::tui::run(resolved).inspect_err(|e| log::error!("Session failed: {}", e))
}
