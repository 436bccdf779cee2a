//! Wire and canonical data models for public server listings

use serde::{Deserialize, Serialize};

/// One server record as returned by the upstream listing API. Everything
/// except the instance id is optional; the upstream freely omits or nulls
/// fields and the normalizer substitutes defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameServer {
    pub id: String,
    #[serde(default)]
    pub playing: Option<u32>,
    #[serde(rename = "maxPlayers", default)]
    pub max_players: Option<u32>,
    #[serde(default)]
    pub fps: Option<f64>,
    #[serde(default)]
    pub ping: Option<f64>,
}

/// One page of the upstream paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerPage {
    #[serde(default)]
    pub data: Vec<GameServer>,
    #[serde(rename = "nextPageCursor", default)]
    pub next_page_cursor: Option<String>,
}

/// Canonical server record served to clients. All fields are concrete:
/// defaults have been substituted and fractional upstream values rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerInfo {
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub players: u32,
    #[serde(rename = "maxPlayers")]
    pub max_players: u32,
    pub fps: i32,
    pub ping: i32,
}

/// Aggregated, ranked and truncated response for one game id.
///
/// `total` counts the raw records collected across pages before truncation;
/// `count` always equals `servers.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerListResponse {
    #[serde(rename = "gameId")]
    pub game_id: String,
    pub total: usize,
    pub count: usize,
    pub servers: Vec<ServerInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_server_default_fields() {
        let json = r#"{ "id": "abc-123" }"#;

        let server: GameServer = serde_json::from_str(json).unwrap();
        assert_eq!(server.id, "abc-123");
        assert_eq!(server.playing, None);
        assert_eq!(server.max_players, None);
        assert_eq!(server.fps, None);
        assert_eq!(server.ping, None);
    }

    #[test]
    fn test_game_server_null_fields_treated_as_absent() {
        let json = r#"{
            "id": "abc-123",
            "playing": null,
            "maxPlayers": null,
            "fps": null,
            "ping": null
        }"#;

        let server: GameServer = serde_json::from_str(json).unwrap();
        assert_eq!(server.playing, None);
        assert_eq!(server.max_players, None);
        assert_eq!(server.fps, None);
        assert_eq!(server.ping, None);
    }

    #[test]
    fn test_game_server_unknown_fields_ignored() {
        let json = r#"{
            "id": "abc-123",
            "playing": 7,
            "maxPlayers": 16,
            "fps": 59.94,
            "ping": 42.3,
            "accessCode": "whatever",
            "vipServerId": 9
        }"#;

        let server: GameServer = serde_json::from_str(json).unwrap();
        assert_eq!(server.playing, Some(7));
        assert_eq!(server.max_players, Some(16));
        assert_eq!(server.fps, Some(59.94));
        assert_eq!(server.ping, Some(42.3));
    }

    #[test]
    fn test_server_page_defaults() {
        let page: ServerPage = serde_json::from_str("{}").unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.next_page_cursor, None);

        let json = r#"{ "data": [{"id": "a"}], "nextPageCursor": "cursor-2" }"#;
        let page: ServerPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.next_page_cursor, Some("cursor-2".to_string()));
    }

    #[test]
    fn test_server_page_null_cursor() {
        let json = r#"{ "data": [], "nextPageCursor": null }"#;
        let page: ServerPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.next_page_cursor, None);
    }

    #[test]
    fn test_server_info_serialization_uses_wire_names() {
        let info = ServerInfo {
            job_id: "job-1".to_string(),
            players: 5,
            max_players: 20,
            fps: 60,
            ping: 80,
        };

        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"jobId\":\"job-1\""));
        assert!(json.contains("\"maxPlayers\":20"));

        let deserialized: ServerInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, info);
    }

    #[test]
    fn test_server_list_response_serialization() {
        let response = ServerListResponse {
            game_id: "123456".to_string(),
            total: 42,
            count: 1,
            servers: vec![ServerInfo {
                job_id: "job-1".to_string(),
                players: 9,
                max_players: 20,
                fps: 60,
                ping: 0,
            }],
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"gameId\":\"123456\""));
        assert!(json.contains("\"total\":42"));
        assert!(json.contains("\"count\":1"));

        let deserialized: ServerListResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, response);
    }
}
