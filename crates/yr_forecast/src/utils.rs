use clap::{ArgGroup, Parser};
use serde::Deserialize;
use slog::{o, Drain, Level, Logger};
use std::{env, fs, time::Duration};

use crate::Error;

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["url", "file"])))]
pub struct Cli {
    /// Path to Settings.toml file holding the http client options
    #[arg(short, long)]
    pub config: Option<String>,

    /// Set the log level (default: info)
    #[arg(short, long)]
    pub level: Option<String>,

    /// Forecast url, e.g. https://www.yr.no/sted/Norge/Buskerud/Gol/Gol/varsel.xml
    #[arg(short, long)]
    pub url: Option<String>,

    /// Path to a local varsel.xml file
    #[arg(short, long)]
    pub file: Option<String>,

    /// Request timeout in seconds, overrides the settings file (default: none)
    #[arg(short, long)]
    pub timeout_secs: Option<u64>,

    /// Print every forecast interval
    #[arg(short, long)]
    pub all: bool,

    /// Print the whole forecast as json
    #[arg(short, long)]
    pub json: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub user_agent: String,
    pub timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            user_agent: format!("yr-forecast/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: None,
        }
    }
}

impl Settings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Loads the settings file named by `--config`, then applies cli overrides.
pub fn get_settings(cli: &Cli) -> Result<Settings, Error> {
    let mut settings = match &cli.config {
        Some(config_path) => {
            let content = fs::read_to_string(config_path)
                .map_err(|e| Error::Config(format!("error reading {}: {}", config_path, e)))?;
            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("error parsing {}: {}", config_path, e)))?
        }
        None => Settings::default(),
    };
    if cli.timeout_secs.is_some() {
        settings.timeout_secs = cli.timeout_secs;
    }
    Ok(settings)
}

pub fn get_log_level(cli: &Cli) -> Level {
    let level = match &cli.level {
        Some(level) => level.to_lowercase(),
        None => env::var("RUST_LOG")
            .unwrap_or_else(|_| String::from(""))
            .to_lowercase(),
    };
    match level.as_str() {
        "trace" => Level::Trace,
        "debug" => Level::Debug,
        "info" => Level::Info,
        "warn" => Level::Warning,
        "error" => Level::Error,
        _ => Level::Info,
    }
}

pub fn setup_logger(cli: &Cli) -> Logger {
    let log_level = get_log_level(cli);
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::CompactFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let drain = drain.filter_level(log_level).fuse();
    slog::Logger::root(drain, o!("version" => env!("CARGO_PKG_VERSION")))
}
