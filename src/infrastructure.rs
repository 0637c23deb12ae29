//! Infrastructure layer for configuration loading and the shared registry
//!
//! This module provides the connection configuration record, the manager that
//! loads it from disk, the process-wide registry instance, and logging setup.

pub mod config;  // Configuration record, defaults, and file manager
pub mod connection_registry;  // Process-wide shared instance
pub mod logging;  // Logging infrastructure

// Re-export commonly used items
pub use config::{ConfigError, ConfigManager, ConnectionConfig};
pub use connection_registry::ConnectionRegistry;
pub use logging::init_logging;
