//! Request orchestration: validate, consult the cache, aggregate, rank

use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::constants::limits;
use crate::error::AppError;
use crate::listings::api::{aggregate_servers, http_client::create_http_client_with_timeout};
use crate::listings::cache::ServerListCache;
use crate::listings::models::ServerListResponse;
use crate::listings::processors::{normalize_server, rank_servers, truncate_servers};

/// Checks that a caller-supplied game id is present and numeric-looking.
fn is_valid_game_id(game_id: &str) -> bool {
    !game_id.is_empty() && game_id.bytes().all(|b| b.is_ascii_digit())
}

/// Applies the default for absent limits, then clamps into the supported
/// range. The lower clamp keeps non-positive requests from producing empty
/// responses for no reason.
fn resolve_limit(limit: Option<u32>) -> u32 {
    limit
        .unwrap_or(limits::DEFAULT_LIMIT)
        .clamp(limits::MIN_LIMIT, limits::MAX_LIMIT)
}

/// Owns the upstream client and the freshness cache, and turns one inbound
/// query into a full, ranked, correctly truncated response or a structured
/// error. Constructed once at startup and shared across request tasks.
pub struct ServerBrowser {
    client: Client,
    api_domain: String,
    cache: ServerListCache,
}

impl ServerBrowser {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self {
            client,
            api_domain: config.api_domain.clone(),
            cache: ServerListCache::default(),
        })
    }

    /// Assembles a browser from explicit parts. Tests use this to point at
    /// a mock upstream and to shorten the cache TTL.
    pub fn with_parts(
        client: Client,
        api_domain: impl Into<String>,
        cache: ServerListCache,
    ) -> Self {
        Self {
            client,
            api_domain: api_domain.into(),
            cache,
        }
    }

    /// Handles one inbound query for `limit` servers of `game_id`.
    ///
    /// Cache hits are returned verbatim, with no re-ranking. On a miss the
    /// full pipeline runs: aggregate raw pages, normalize each record, rank
    /// the whole accumulated set, truncate to the resolved limit, cache and
    /// return. Errors abort the request entirely; a partial server list is
    /// never returned.
    #[instrument(skip(self))]
    pub async fn get_servers(
        &self,
        game_id: &str,
        limit: Option<u32>,
    ) -> Result<ServerListResponse, AppError> {
        if !is_valid_game_id(game_id) {
            return Err(AppError::InvalidGameId);
        }
        let limit = resolve_limit(limit);

        if let Some(cached) = self.cache.get(game_id).await {
            info!(
                "Serving gameId={} from cache ({} servers)",
                game_id, cached.count
            );
            return Ok(cached);
        }

        debug!("Cache miss for gameId={game_id}, aggregating upstream pages");
        let raw = aggregate_servers(&self.client, &self.api_domain, game_id, limit).await?;
        let total = raw.len();

        let normalized = raw.into_iter().map(normalize_server).collect();
        let ranked = rank_servers(normalized);
        let servers = truncate_servers(ranked, limit as usize);

        let response = ServerListResponse {
            game_id: game_id.to_string(),
            total,
            count: servers.len(),
            servers,
        };
        self.cache.insert(game_id, response.clone()).await;

        info!(
            "Built server list for gameId={}: total={}, count={}",
            game_id, response.total, response.count
        );
        Ok(response)
    }

    /// The cache component, exposed for tests and monitoring.
    pub fn cache(&self) -> &ServerListCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_id_validation() {
        assert!(is_valid_game_id("123456"));
        assert!(is_valid_game_id("0"));
        assert!(!is_valid_game_id(""));
        assert!(!is_valid_game_id("abc"));
        assert!(!is_valid_game_id("123abc"));
        assert!(!is_valid_game_id("12.5"));
        assert!(!is_valid_game_id("-1"));
        assert!(!is_valid_game_id("１２３")); // non-ASCII digits
    }

    #[test]
    fn test_resolve_limit_defaults_and_clamps() {
        assert_eq!(resolve_limit(None), 30);
        assert_eq!(resolve_limit(Some(10)), 10);
        assert_eq!(resolve_limit(Some(9999)), 100);
        assert_eq!(resolve_limit(Some(100)), 100);
        assert_eq!(resolve_limit(Some(0)), 1);
    }
}
