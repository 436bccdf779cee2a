//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Default API domain for the upstream server listing API
pub const DEFAULT_API_DOMAIN: &str = "https://games.roblox.com";

/// Default port the HTTP proxy listens on
pub const DEFAULT_PORT: u16 = 3000;

/// Cache TTL (Time To Live) values in seconds
pub mod cache_ttl {
    /// TTL for an aggregated server list. Short on purpose: listings churn
    /// quickly, and the cache only exists to absorb bursts against the
    /// upstream rate limit.
    pub const SERVER_LIST_SECONDS: u64 = 20;
}

/// Bounded capacity of the server list cache (distinct game ids)
pub const SERVER_LIST_CACHE_CAPACITY: usize = 512;

/// Upstream pagination behavior
pub mod pagination {
    /// Maximum number of pages fetched for a single request, regardless of
    /// how much data the upstream still has
    pub const MAX_PAGES: usize = 3;

    /// Records requested per upstream page
    pub const PAGE_SIZE: usize = 100;

    /// Delay between successive page fetches in milliseconds. Applied only
    /// when another page will actually be fetched.
    pub const PAGE_FETCH_DELAY_MS: u64 = 300;

    /// Stop paginating once `OVERFETCH_FACTOR * limit` raw records have been
    /// accumulated, so ranking can pick the best subset without walking
    /// every page
    pub const OVERFETCH_FACTOR: usize = 2;
}

/// Caller-facing limit handling
pub mod limits {
    /// Server count returned when the caller does not supply a usable limit
    pub const DEFAULT_LIMIT: u32 = 30;

    /// Upper clamp for the requested server count
    pub const MAX_LIMIT: u32 = 100;

    /// Lower clamp for the requested server count. The upstream behavior for
    /// non-positive limits was undefined; we clamp to 1.
    pub const MIN_LIMIT: u32 = 1;
}

/// Default values applied when the upstream omits a field
pub mod defaults {
    /// Player slots assumed when the upstream omits maxPlayers
    pub const MAX_PLAYERS: u32 = 20;

    /// Frame rate assumed when the upstream omits fps
    pub const FPS: i32 = 60;

    /// Latency assumed when the upstream omits ping
    pub const PING: i32 = 0;
}

/// Ranking heuristic parameters
pub mod ranking {
    /// Weight of the current player count in the score
    pub const PLAYERS_WEIGHT: i64 = 10;

    /// Bonus granted to servers running above the fps threshold
    pub const FPS_BONUS: i64 = 5;

    /// Frame rate a server must exceed to earn the bonus
    pub const FPS_THRESHOLD: i32 = 30;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "SERVER_BROWSER_API_DOMAIN";

    /// Environment variable for the listening port
    pub const PORT: &str = "PORT";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "SERVER_BROWSER_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "SERVER_BROWSER_HTTP_TIMEOUT";
}
