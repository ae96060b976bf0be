//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The TUI owns the terminal, so interactive sessions only log when a log
//! file is given. CLI subcommands log to stderr.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Logging disabled
    Off,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub target: LogTarget,
}

impl LogConfig {
    /// Map a `-v` count to a level: 0 = warn, 1 = info, 2 = debug, 3+ = trace
    pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Pick a target: an explicit file always wins; otherwise stderr, unless
    /// the terminal is about to be taken over by the TUI.
    pub fn new(verbosity: u8, log_file: Option<PathBuf>, interactive: bool) -> Self {
        let target = match log_file {
            Some(path) => LogTarget::File(path),
            None if interactive => LogTarget::Off,
            None => LogTarget::Stderr,
        };
        LogConfig {
            level: Self::level_from_verbosity(verbosity),
            target,
        }
    }
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let filter = EnvFilter::default().add_directive(config.level.into());
    match &config.target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            let layer = fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .without_time();
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    }
    Ok(())
}
