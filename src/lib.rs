//! Public Game-Server Listing Proxy Library
//!
//! This library aggregates paginated public-server listings from the
//! upstream games API, normalizes and ranks the records, and memoizes the
//! result per game id behind a short TTL so bursts of identical queries do
//! not hammer the upstream rate limit.
//!
//! # Examples
//!
//! ```rust,no_run
//! use server_browser::config::Config;
//! use server_browser::error::AppError;
//! use server_browser::listings::ServerBrowser;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let browser = ServerBrowser::new(&config)?;
//!
//!     // Fetch the 10 best public servers for a game
//!     let listing = browser.get_servers("123456", Some(10)).await?;
//!     for server in &listing.servers {
//!         println!("{}: {}/{} players", server.job_id, server.players, server.max_players);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod listings;
pub mod logging;
pub mod web;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use listings::{ServerBrowser, ServerInfo, ServerListCache, ServerListResponse};
pub use web::build_router;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
