//! Configuration infrastructure
//!
//! Contains the connection configuration record and the manager that loads it
//! from the per-user configuration directory, creating a default file on the
//! first run.
//!
//! The load sequence is deliberately asymmetric: a failed default-file write
//! aborts the load outright, while a read or parse failure on an existing file
//! is reported and leaves the configuration unset.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Configuration file name under the application config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Application subdirectory under the platform config directory
const APP_CONFIG_DIR: &str = "connection-registry";

/// Database connection configuration
///
/// Serializes to a JSON object with exactly the keys `hostname`, `username`,
/// `password` and `databaseName`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionConfig {
    pub hostname: String,
    pub username: String,
    pub password: String,
    pub database_name: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            hostname: defaults::HOSTNAME.to_string(),
            username: defaults::USERNAME.to_string(),
            password: defaults::PASSWORD.to_string(),
            database_name: defaults::DATABASE_NAME.to_string(),
        }
    }
}

/// Failures raised while resolving, creating, or loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to resolve user configuration directory")]
    DirectoryResolution,

    #[error("failed to write default configuration to {}", path.display())]
    WriteDefault {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read configuration file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse configuration file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration manager for resolving and loading connection settings
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Get the application configuration directory
    pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::DirectoryResolution)?
            .join(APP_CONFIG_DIR);

        Ok(config_dir)
    }

    /// Create a configuration manager rooted at the well-known path
    pub fn new() -> Result<Self, ConfigError> {
        let config_path = Self::get_config_dir()?.join(CONFIG_FILE_NAME);

        Ok(Self { config_path })
    }

    /// Create a manager rooted at an explicit file path
    ///
    /// Used by tests and embedders that keep configuration outside the user
    /// profile.
    pub fn at_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Get the configuration file path
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the configuration, creating the default file on first run
    ///
    /// A failed default write aborts the load; there is no fall-through to the
    /// read step in that case.
    pub fn load_or_create(&self) -> Result<ConnectionConfig, ConfigError> {
        if !self.config_path.exists() {
            self.write_default()?;
            info!("Default configuration file created: {}", self.config_path.display());
        }

        let content = fs::read_to_string(&self.config_path).map_err(|source| ConfigError::Read {
            path: self.config_path.clone(),
            source,
        })?;

        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.config_path.clone(),
            source,
        })?;

        info!("Loaded configuration from: {}", self.config_path.display());
        Ok(config)
    }

    /// Serialize the default configuration and write it to the config path
    fn write_default(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.write_failure(e))?;
        }

        let content = serde_json::to_string_pretty(&ConnectionConfig::default())
            .map_err(|e| self.write_failure(io::Error::other(e)))?;

        fs::write(&self.config_path, content).map_err(|e| self.write_failure(e))
    }

    fn write_failure(&self, source: io::Error) -> ConfigError {
        ConfigError::WriteDefault {
            path: self.config_path.clone(),
            source,
        }
    }
}

/// Default connection configuration values written on first run
pub mod defaults {
    /// Default hostname placeholder
    pub const HOSTNAME: &str = "default_host";

    /// Default username placeholder
    pub const USERNAME: &str = "default_user";

    /// Default password placeholder
    pub const PASSWORD: &str = "default_password";

    /// Default database name placeholder
    pub const DATABASE_NAME: &str = "default_database";
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn manager_in(dir: &Path) -> ConfigManager {
        ConfigManager::at_path(dir.join(CONFIG_FILE_NAME))
    }

    #[test]
    fn first_run_creates_default_file() {
        let temp_dir = tempdir().expect("temp dir creation failed");
        let manager = manager_in(temp_dir.path());

        let config = manager.load_or_create().expect("first run load failed");
        assert_eq!(config, ConnectionConfig::default());

        // The file must now exist and carry the four default values verbatim
        let content = fs::read_to_string(manager.config_path()).expect("config file missing");
        let value: serde_json::Value = serde_json::from_str(&content).expect("invalid json on disk");
        assert_eq!(value["hostname"], "default_host");
        assert_eq!(value["username"], "default_user");
        assert_eq!(value["password"], "default_password");
        assert_eq!(value["databaseName"], "default_database");
    }

    #[test]
    fn serialized_form_has_exactly_the_four_wire_keys() {
        let value = serde_json::to_value(ConnectionConfig::default()).expect("serialize failed");
        let object = value.as_object().expect("not a json object");

        let mut keys: Vec<_> = object.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["databaseName", "hostname", "password", "username"]);
    }

    #[test]
    fn existing_file_loads_exactly() {
        let temp_dir = tempdir().expect("temp dir creation failed");
        let manager = manager_in(temp_dir.path());

        fs::write(
            manager.config_path(),
            r#"{"hostname":"h","username":"u","password":"p","databaseName":"d"}"#,
        )
        .expect("fixture write failed");

        let config = manager.load_or_create().expect("load failed");
        assert_eq!(config.hostname, "h");
        assert_eq!(config.username, "u");
        assert_eq!(config.password, "p");
        assert_eq!(config.database_name, "d");
    }

    #[test]
    fn second_load_reads_instead_of_rewriting() {
        let temp_dir = tempdir().expect("temp dir creation failed");
        let manager = manager_in(temp_dir.path());

        manager.load_or_create().expect("first run load failed");

        // Replace the file between loads; a rewrite would clobber these values
        fs::write(
            manager.config_path(),
            r#"{"hostname":"h2","username":"u2","password":"p2","databaseName":"d2"}"#,
        )
        .expect("fixture write failed");

        let config = manager.load_or_create().expect("second load failed");
        assert_eq!(config.hostname, "h2");
        assert_eq!(config.database_name, "d2");
    }

    #[test]
    fn invalid_json_is_a_parse_failure() {
        let temp_dir = tempdir().expect("temp dir creation failed");
        let manager = manager_in(temp_dir.path());

        fs::write(manager.config_path(), "not json at all {").expect("fixture write failed");

        let err = manager.load_or_create().expect_err("parse must fail");
        assert!(matches!(err, ConfigError::Parse { .. }), "unexpected error: {err}");
    }

    #[test]
    fn missing_field_is_a_parse_failure() {
        let temp_dir = tempdir().expect("temp dir creation failed");
        let manager = manager_in(temp_dir.path());

        fs::write(
            manager.config_path(),
            r#"{"hostname":"h","username":"u","password":"p"}"#,
        )
        .expect("fixture write failed");

        let err = manager.load_or_create().expect_err("parse must fail");
        assert!(matches!(err, ConfigError::Parse { .. }), "unexpected error: {err}");
    }

    #[test]
    fn unknown_keys_are_ignored_on_read() {
        let temp_dir = tempdir().expect("temp dir creation failed");
        let manager = manager_in(temp_dir.path());

        fs::write(
            manager.config_path(),
            r#"{"hostname":"h","username":"u","password":"p","databaseName":"d","extra":true}"#,
        )
        .expect("fixture write failed");

        let config = manager.load_or_create().expect("load failed");
        assert_eq!(config.hostname, "h");
    }

    #[test]
    fn failed_default_write_aborts_without_creating_the_file() {
        let temp_dir = tempdir().expect("temp dir creation failed");

        // A regular file where the config directory should go makes the
        // directory creation step fail
        let blocker = temp_dir.path().join("blocked");
        fs::write(&blocker, b"").expect("blocker write failed");
        let manager = ConfigManager::at_path(blocker.join(CONFIG_FILE_NAME));

        let err = manager.load_or_create().expect_err("write must fail");
        assert!(matches!(err, ConfigError::WriteDefault { .. }), "unexpected error: {err}");
        assert!(!manager.config_path().exists());
    }
}
