use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use server_browser::cli::Args;
use server_browser::config::Config;
use server_browser::error::AppError;
use server_browser::listings::ServerBrowser;
use server_browser::logging::setup_logging;
use server_browser::web::build_router;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from_path(path).await?,
        None => Config::load().await?,
    };
    if let Some(port) = args.port {
        config.port = port;
    }

    // The guard must be kept alive for the duration of the program to
    // ensure logs are flushed properly.
    let _guard = setup_logging(&args, &config).await?;

    info!(
        "{} {} starting, upstream: {}",
        server_browser::NAME,
        server_browser::VERSION,
        config.api_domain
    );

    let browser = Arc::new(ServerBrowser::new(&config)?);
    let app = build_router(browser);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
