//! Connection Registry
//!
//! Process-wide database connection configuration management: a lazily-created,
//! lock-guarded registry that loads `config.json` from the per-user
//! configuration directory, creating the file with default values on first run.

// Module declarations
pub mod infrastructure;

// Re-export the public surface for easier access
pub use infrastructure::{ConfigError, ConfigManager, ConnectionConfig, ConnectionRegistry, init_logging};
