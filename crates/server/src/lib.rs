//! Chess relay server
//!
//! Hosts one shared game over TCP. Clients exchange newline-delimited
//! JSON messages (see [`chess_session::protocol`]); the first two to
//! connect play White and Black, everyone else watches. Any client may
//! also ask for an AI move or have a voice phrase turned into a move for
//! a position of its choosing.

pub mod config;
pub mod hub;
pub mod relay;
pub mod requests;

pub use config::{ConfigError, ServerConfig, DEFAULT_BIND, DEFAULT_CONFIG_FILE};
pub use hub::Hub;
pub use relay::Server;
