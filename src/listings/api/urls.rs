//! URL building utilities for the upstream listing API

use crate::constants::pagination;

/// Builds the public servers URL for one page of a game's listing.
/// Requests the maximum page size sorted by descending recency; the cursor
/// parameter is appended only when a non-empty continuation cursor exists.
///
/// # Example
/// ```
/// use server_browser::listings::api::build_public_servers_url;
///
/// let url = build_public_servers_url("https://api.example.com", "123456", None);
/// assert_eq!(
///     url,
///     "https://api.example.com/v1/games/123456/servers/Public?sortOrder=Desc&limit=100"
/// );
///
/// let url = build_public_servers_url("https://api.example.com", "123456", Some("abc"));
/// assert_eq!(
///     url,
///     "https://api.example.com/v1/games/123456/servers/Public?sortOrder=Desc&limit=100&cursor=abc"
/// );
/// ```
pub fn build_public_servers_url(api_domain: &str, game_id: &str, cursor: Option<&str>) -> String {
    let page_size = pagination::PAGE_SIZE;
    let base = format!(
        "{api_domain}/v1/games/{game_id}/servers/Public?sortOrder=Desc&limit={page_size}"
    );
    match cursor {
        Some(cursor) if !cursor.is_empty() => format!("{base}&cursor={cursor}"),
        _ => base,
    }
}
