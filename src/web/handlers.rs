//! Inbound request handlers. Thin by design: parameter plumbing and error
//! mapping only, everything interesting happens in the orchestrator.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::error::AppError;
use crate::listings::ServerBrowser;

#[derive(Debug, Deserialize)]
pub struct ServersQuery {
    #[serde(rename = "gameId")]
    pub game_id: Option<String>,
    /// Kept as a raw string: a non-numeric limit falls back to the default
    /// rather than failing extraction.
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// Parses the raw limit query value; absent or unparseable input yields
/// `None`, which the orchestrator turns into the default limit.
fn parse_limit(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|value| value.parse::<u32>().ok())
}

/// `GET /servers?gameId=<numeric>&limit=<int>`
pub async fn servers(
    State(browser): State<Arc<ServerBrowser>>,
    Query(query): Query<ServersQuery>,
) -> Response {
    let game_id = query.game_id.as_deref().unwrap_or("");
    let limit = parse_limit(query.limit.as_deref());

    match browser.get_servers(game_id, limit).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => {
            warn!("Request for gameId={game_id} failed: {err}");
            error_response(&err)
        }
    }
}

/// `GET /` — pure liveness probe, no core involvement.
pub async fn health() -> Response {
    Json(json!({
        "status": "ok",
        "message": format!("{} {} online", crate::NAME, crate::VERSION),
    }))
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(None), None);
        assert_eq!(parse_limit(Some("10")), Some(10));
        assert_eq!(parse_limit(Some("abc")), None);
        assert_eq!(parse_limit(Some("")), None);
        assert_eq!(parse_limit(Some("-5")), None);
        assert_eq!(parse_limit(Some("10.5")), None);
    }
}
