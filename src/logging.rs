use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn env_filter(debug: bool) -> EnvFilter {
    let directive = if debug {
        "server_browser=debug"
    } else {
        "server_browser=info"
    };
    EnvFilter::from_default_env().add_directive(directive.parse().expect("static directive"))
}

/// Sets up logging for the proxy.
///
/// Logs always go to stdout. When a log file path is configured (CLI flag
/// takes precedence over config), logs additionally go to a daily rolling
/// file appender.
///
/// Returns the guard that must be kept alive for the duration of the
/// process to ensure proper log flushing; `None` when no file logging is
/// configured.
pub async fn setup_logging(args: &Args, config: &Config) -> Result<Option<WorkerGuard>, AppError> {
    let custom_log_path = args.log_file.as_ref().or(config.log_file_path.as_ref());

    let registry = tracing_subscriber::registry().with(
        fmt::Layer::new()
            .with_writer(stdout)
            .with_ansi(true)
            .with_filter(env_filter(args.debug)),
    );

    let Some(custom_path) = custom_log_path else {
        registry.init();
        return Ok(None);
    };

    let path = Path::new(custom_path);
    let log_dir = path.parent().unwrap_or(Path::new("."));
    let log_file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("server_browser.log");

    // Create log directory if it doesn't exist
    if !log_dir.exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    // Rolling file appender that creates a new log file each day. The guard
    // must be kept alive for the duration of the program so logs are
    // flushed properly.
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    registry
        .with(
            fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(env_filter(args.debug)),
        )
        .init();

    Ok(Some(guard))
}
