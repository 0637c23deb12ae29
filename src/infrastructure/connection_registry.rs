//! Process-wide connection registry
//!
//! Owns the single shared [`ConnectionRegistry`] instance. Creation is guarded
//! by a mutex so concurrent first calls construct exactly one instance; the
//! configuration bootstrap runs inside that critical section, exactly once per
//! process lifetime. There is no teardown.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{error, info};

use crate::infrastructure::config::{ConfigManager, ConnectionConfig};

/// Global instance slot, empty until the first `instance()` call
static REGISTRY: Mutex<Option<Arc<ConnectionRegistry>>> = Mutex::new(None);

/// The single shared holder of the database connection configuration
///
/// The registry owns its configuration; callers get owned copies of the field
/// values. Bootstrap failures leave the configuration unset and every field
/// reads as the empty string.
#[derive(Debug)]
pub struct ConnectionRegistry {
    config: Option<ConnectionConfig>,
}

impl ConnectionRegistry {
    /// Return the shared instance, creating it on first access
    ///
    /// All concurrent callers receive handles to the same instance. Bootstrap
    /// failures are logged, never propagated; the instance is still returned
    /// with unset fields.
    pub fn instance() -> Arc<Self> {
        // The guarded section never panics, so a poisoned lock only means a
        // caller thread died elsewhere; recover the slot and carry on.
        let mut slot = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
        slot.get_or_insert_with(|| Arc::new(Self::bootstrap())).clone()
    }

    /// Bootstrap against the well-known per-user configuration path
    fn bootstrap() -> Self {
        match ConfigManager::new() {
            Ok(manager) => Self::with_manager(&manager),
            Err(e) => {
                error!("Failed to resolve configuration file path: {e}");
                Self { config: None }
            }
        }
    }

    /// Build a registry from an explicit configuration manager
    ///
    /// This is the injection seam the global accessor wraps; tests point it at
    /// temporary directories instead of the user profile.
    pub fn with_manager(manager: &ConfigManager) -> Self {
        let config = match manager.load_or_create() {
            Ok(config) => Some(config),
            Err(e) => {
                error!("Error loading configuration: {e}");
                None
            }
        };

        Self { config }
    }

    /// Log the query that would be executed
    ///
    /// There is no real connection behind the registry; the query text is
    /// accepted as-is, empty or malformed included.
    pub fn execute_query(&self, query: &str) {
        info!("Executing query: {query}");
    }

    /// Connection fields keyed by their wire names
    ///
    /// Unset fields map to the empty string.
    pub fn connection_info(&self) -> HashMap<String, String> {
        let (hostname, username, password, database_name) = match &self.config {
            Some(config) => (
                config.hostname.clone(),
                config.username.clone(),
                config.password.clone(),
                config.database_name.clone(),
            ),
            None => Default::default(),
        };

        HashMap::from([
            ("hostname".to_string(), hostname),
            ("username".to_string(), username),
            ("password".to_string(), password),
            ("databaseName".to_string(), database_name),
        ])
    }
}
