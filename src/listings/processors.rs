//! Normalization and ranking of raw upstream server records

use std::cmp::Reverse;
use tracing::trace;

use crate::constants::{defaults, ranking};
use crate::listings::models::{GameServer, ServerInfo};

/// Maps a raw upstream record into the canonical shape. Pure and total:
/// missing or null fields get defaults, fractional frame rates and latencies
/// are rounded half-away-from-zero.
pub fn normalize_server(raw: GameServer) -> ServerInfo {
    ServerInfo {
        job_id: raw.id,
        players: raw.playing.unwrap_or(0),
        max_players: raw.max_players.unwrap_or(defaults::MAX_PLAYERS),
        fps: raw
            .fps
            .map(|fps| fps.round() as i32)
            .unwrap_or(defaults::FPS),
        ping: raw
            .ping
            .map(|ping| ping.round() as i32)
            .unwrap_or(defaults::PING),
    }
}

/// Heuristic ranking score. Deliberately crude: player count dominates, a
/// flat bonus rewards servers holding a healthy frame rate, and ping and
/// maxPlayers are ignored. Changing this formula changes the ordering
/// clients observe, so it is locked by tests.
pub fn score_server(server: &ServerInfo) -> i64 {
    let fps_bonus = if server.fps > ranking::FPS_THRESHOLD {
        ranking::FPS_BONUS
    } else {
        0
    };
    i64::from(server.players) * ranking::PLAYERS_WEIGHT + fps_bonus
}

/// Sorts servers descending by score. The sort is stable: equally scored
/// servers keep the order in which they were accumulated across pages.
pub fn rank_servers(mut servers: Vec<ServerInfo>) -> Vec<ServerInfo> {
    servers.sort_by_key(|server| Reverse(score_server(server)));
    trace!("Ranked {} servers", servers.len());
    servers
}

/// Keeps the first `limit` servers of an already ranked list.
pub fn truncate_servers(mut servers: Vec<ServerInfo>, limit: usize) -> Vec<ServerInfo> {
    servers.truncate(limit);
    servers
}
