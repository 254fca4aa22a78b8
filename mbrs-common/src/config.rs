//! Bootstrap configuration loading
//!
//! Each setting is resolved independently in this priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`MBRS_DATABASE`, `MBRS_HOST`, `MBRS_PORT`)
//! 3. TOML config file (`MBRS_CONFIG` or `<config_dir>/mbrs/config.toml`)
//! 4. OS-dependent compiled default (fallback)
//!
//! A missing TOML file is not an error. A TOML file that exists but cannot be
//! parsed is.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const ENV_DATABASE: &str = "MBRS_DATABASE";
pub const ENV_HOST: &str = "MBRS_HOST";
pub const ENV_PORT: &str = "MBRS_PORT";
pub const ENV_CONFIG: &str = "MBRS_CONFIG";

/// Bootstrap settings read from the TOML file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive (trace, debug, info, warn, error)
    #[serde(default)]
    pub level: Option<String>,
}

/// Values used when nothing else provides a setting
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        Self {
            database_path: default_data_dir().join("mbrs.db"),
            host: "127.0.0.1".to_string(),
            port: 5800,
            log_level: "info".to_string(),
        }
    }
}

/// Settings supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub database_path: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub config_file: Option<PathBuf>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl ServiceConfig {
    /// Resolve every setting from CLI, environment, TOML file and defaults
    pub fn resolve(cli: CliOverrides) -> Result<Self> {
        let config_path = cli
            .config_file
            .clone()
            .or_else(|| env_var(ENV_CONFIG).map(PathBuf::from))
            .or_else(default_config_path);

        let toml = match config_path {
            Some(path) => load_toml(&path)?.unwrap_or_default(),
            None => TomlConfig::default(),
        };

        Self::merge(cli, toml, CompiledDefaults::for_current_platform())
    }

    fn merge(cli: CliOverrides, toml: TomlConfig, defaults: CompiledDefaults) -> Result<Self> {
        let env_port = match env_var(ENV_PORT) {
            Some(raw) => Some(raw.parse::<u16>().map_err(|e| {
                Error::Config(format!("{} must be a port number, got '{}': {}", ENV_PORT, raw, e))
            })?),
            None => None,
        };

        Ok(Self {
            database_path: cli
                .database_path
                .or_else(|| env_var(ENV_DATABASE).map(PathBuf::from))
                .or(toml.database_path)
                .unwrap_or(defaults.database_path),
            host: cli
                .host
                .or_else(|| env_var(ENV_HOST))
                .or(toml.host)
                .unwrap_or(defaults.host),
            port: cli.port.or(env_port).or(toml.port).unwrap_or(defaults.port),
            log_level: toml.logging.level.unwrap_or(defaults.log_level),
        })
    }

    /// `host:port` string for binding the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load a TOML config file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_toml(path: &Path) -> Result<Option<TomlConfig>> {
    if !path.exists() {
        info!("Config file {} not found, using defaults", path.display());
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str::<TomlConfig>(&content).map_err(|e| {
        Error::Config(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    info!("Loaded config file {}", path.display());
    Ok(Some(config))
}

/// Default TOML location: `<config_dir>/mbrs/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mbrs").join("config.toml"))
}

/// OS-dependent data directory for the database file
fn default_data_dir() -> PathBuf {
    match dirs::data_local_dir() {
        Some(dir) => dir.join("mbrs"),
        None => {
            warn!("Could not determine local data directory, using ./mbrs_data");
            PathBuf::from("./mbrs_data")
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for name in [ENV_DATABASE, ENV_HOST, ENV_PORT, ENV_CONFIG] {
            std::env::remove_var(name);
        }
    }

    fn defaults() -> CompiledDefaults {
        CompiledDefaults {
            database_path: PathBuf::from("/default/mbrs.db"),
            host: "127.0.0.1".to_string(),
            port: 5800,
            log_level: "info".to_string(),
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_nothing_set() {
        clear_env();
        let config =
            ServiceConfig::merge(CliOverrides::default(), TomlConfig::default(), defaults())
                .unwrap();
        assert_eq!(config.database_path, PathBuf::from("/default/mbrs.db"));
        assert_eq!(config.bind_addr(), "127.0.0.1:5800");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_toml_over_defaults() {
        clear_env();
        let toml: TomlConfig = toml::from_str(
            r#"
            database_path = "/toml/mbrs.db"
            port = 6000

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        let config = ServiceConfig::merge(CliOverrides::default(), toml, defaults()).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/toml/mbrs.db"));
        assert_eq!(config.port, 6000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_env_over_toml() {
        clear_env();
        std::env::set_var(ENV_PORT, "7000");
        std::env::set_var(ENV_HOST, "0.0.0.0");
        let toml = TomlConfig {
            port: Some(6000),
            host: Some("10.0.0.1".to_string()),
            ..Default::default()
        };
        let config = ServiceConfig::merge(CliOverrides::default(), toml, defaults()).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:7000");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_cli_over_env() {
        clear_env();
        std::env::set_var(ENV_DATABASE, "/env/mbrs.db");
        let cli = CliOverrides {
            database_path: Some(PathBuf::from("/cli/mbrs.db")),
            ..Default::default()
        };
        let config = ServiceConfig::merge(cli, TomlConfig::default(), defaults()).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/cli/mbrs.db"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_env_port_is_config_error() {
        clear_env();
        std::env::set_var(ENV_PORT, "not-a-port");
        let result =
            ServiceConfig::merge(CliOverrides::default(), TomlConfig::default(), defaults());
        assert!(matches!(result, Err(Error::Config(_))));
        clear_env();
    }

    #[test]
    fn test_missing_toml_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_toml(&dir.path().join("absent.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "port = \"not a number\"").unwrap();
        assert!(matches!(load_toml(&path), Err(Error::Config(_))));
    }
}
