pub mod api;
pub mod cache;
pub mod models;
pub mod orchestrator;
pub mod processors;

pub use cache::ServerListCache;
pub use models::{GameServer, ServerInfo, ServerListResponse, ServerPage};
pub use orchestrator::ServerBrowser;
