//! Upstream page fetching and bounded pagination
//!
//! One fetch per page, no retries: a failed call propagates immediately so
//! the caller gets a structured error instead of a partial listing. Backoff
//! against the upstream rate limit is handled preventively, by the fixed
//! delay between page fetches and the result cache above this layer.

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::constants::pagination;
use crate::error::AppError;
use crate::listings::api::urls::build_public_servers_url;
use crate::listings::models::{GameServer, ServerPage};

/// Generic single-shot fetch with comprehensive error handling. Non-success
/// statuses map to status-classified errors; malformed bodies map to parse
/// errors. Never retries.
#[instrument(skip(client))]
async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    debug!("Fetching data from URL: {url}");

    let response = client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        // Return specific error types based on HTTP status code
        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                // Valid JSON but unexpected structure
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

/// Fetches one page of the public server listing for a game.
pub async fn fetch_server_page(
    client: &Client,
    api_domain: &str,
    game_id: &str,
    cursor: Option<&str>,
) -> Result<ServerPage, AppError> {
    let url = build_public_servers_url(api_domain, game_id, cursor);
    fetch(client, &url).await
}

/// Drives the page fetcher across up to `pagination::MAX_PAGES` pages,
/// accumulating raw records. An instance reported on several pages (the
/// upstream set shifts under the cursor) is kept once, at its first
/// position.
///
/// Termination is checked after each page, in this precedence:
/// 1. the page budget is exhausted,
/// 2. the upstream returned no continuation cursor,
/// 3. enough records (`OVERFETCH_FACTOR * limit`) were accumulated for
///    ranking to pick the best subset.
///
/// When another page will be fetched, a fixed courtesy delay is awaited
/// first; the delay never runs after the final page. Any fetch error aborts
/// aggregation and propagates.
#[instrument(skip(client, api_domain))]
pub async fn aggregate_servers(
    client: &Client,
    api_domain: &str,
    game_id: &str,
    limit: u32,
) -> Result<Vec<GameServer>, AppError> {
    let target = pagination::OVERFETCH_FACTOR * limit as usize;
    let mut accumulated: Vec<GameServer> = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut cursor: Option<String> = None;

    for page_number in 1..=pagination::MAX_PAGES {
        let page = fetch_server_page(client, api_domain, game_id, cursor.as_deref()).await?;

        debug!(
            "Fetched page {}/{} for gameId={}: {} records, cursor={:?}",
            page_number,
            pagination::MAX_PAGES,
            game_id,
            page.data.len(),
            page.next_page_cursor
        );

        for server in page.data {
            if seen_ids.insert(server.id.clone()) {
                accumulated.push(server);
            }
        }
        cursor = page.next_page_cursor.filter(|c| !c.is_empty());

        if page_number == pagination::MAX_PAGES {
            debug!("Page budget exhausted for gameId={game_id}");
            break;
        }
        if cursor.is_none() {
            debug!("Upstream pagination exhausted for gameId={game_id}");
            break;
        }
        if accumulated.len() >= target {
            debug!(
                "Accumulated {} records (target {}), stopping early for gameId={}",
                accumulated.len(),
                target,
                game_id
            );
            break;
        }

        tokio::time::sleep(Duration::from_millis(pagination::PAGE_FETCH_DELAY_MS)).await;
    }

    info!(
        "Aggregated {} raw records for gameId={}",
        accumulated.len(),
        game_id
    );
    Ok(accumulated)
}
