use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use std::path::PathBuf;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Public game-server listing proxy
///
/// Aggregates paginated public-server listings from the upstream games API,
/// ranks them by a player-count heuristic and serves them over HTTP with a
/// short-lived in-memory cache in front of the upstream rate limit.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Path to a config file. If not provided, the platform config
    /// directory is searched and defaults are used when no file exists.
    #[arg(long = "config", help_heading = "Configuration")]
    pub config: Option<PathBuf>,

    /// Listening port, overriding config file and environment.
    #[arg(long = "port", short = 'p', help_heading = "Configuration")]
    pub port: Option<u16>,

    /// Specify a custom log file path. If not provided, logs go to stdout
    /// only (or to the path from config, when set).
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,

    /// Enable debug logging regardless of RUST_LOG.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,
}
