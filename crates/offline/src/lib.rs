//! Offline chess in the terminal: against the computer or two players
//! sharing one keyboard.

pub mod app;
pub mod config;
pub mod render;

pub use app::{Mode, ModeError, OfflineGame, Reply, HELP};
pub use config::{ConfigError, OfflineConfig};
pub use render::board_diagram;
