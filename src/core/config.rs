//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.castview/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::LogLevel;
use crate::api::DEFAULT_ENDPOINT;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CastviewConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<LogLevel>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "castview.log";

pub const ENV_ENDPOINT: &str = "CASTVIEW_ENDPOINT";
pub const ENV_LOG_LEVEL: &str = "CASTVIEW_LOG_LEVEL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub log_level: LogLevel,
    pub log_file: PathBuf,
}

/// Overrides taken from the command line (None = flag not given).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub log_level: Option<LogLevel>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.castview/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".castview").join("config.toml"))
}

/// Load config from `~/.castview/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CastviewConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CastviewConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CastviewConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<CastviewConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(CastviewConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CastviewConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# castview Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# endpoint = "https://rickandmortyapi.com/api/character"   # Or set CASTVIEW_ENDPOINT

# [logging]
# level = "debug"          # "off", "error", "warn", "info", "debug", "trace"
# file = "castview.log"    # Relative paths resolve against the working directory
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CastviewConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as `resolve`, with the environment lookup injected.
pub fn resolve_with_env(
    config: &CastviewConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| env(ENV_ENDPOINT))
        .or_else(|| config.api.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    // Log level: CLI → env → config → default. Unparseable env values are ignored.
    let log_level = cli
        .log_level
        .or_else(|| {
            env(ENV_LOG_LEVEL).and_then(|raw| match raw.parse::<LogLevel>() {
                Ok(level) => Some(level),
                Err(e) => {
                    warn!("Ignoring {}: {}", ENV_LOG_LEVEL, e);
                    None
                }
            })
        })
        .or(config.logging.level)
        .unwrap_or_default();

    let log_file = config
        .logging
        .file
        .as_deref()
        .unwrap_or(DEFAULT_LOG_FILE)
        .into();

    ResolvedConfig {
        endpoint,
        log_level,
        log_file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config: CastviewConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.api.endpoint.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&CastviewConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.log_level, LogLevel::Debug);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config: CastviewConfig = toml::from_str(
            r#"
[api]
endpoint = "http://localhost:8080/api/character"

[logging]
level = "warn"
file = "/tmp/castview-test.log"
"#,
        )
        .unwrap();
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.endpoint, "http://localhost:8080/api/character");
        assert_eq!(resolved.log_level, LogLevel::Warn);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/castview-test.log"));
    }

    #[test]
    fn test_env_wins_over_config() {
        let config = CastviewConfig {
            api: ApiConfig {
                endpoint: Some("http://from-config".to_string()),
            },
            logging: LoggingConfig {
                level: Some(LogLevel::Info),
                file: None,
            },
        };
        let env = |key: &str| match key {
            ENV_ENDPOINT => Some("http://from-env".to_string()),
            ENV_LOG_LEVEL => Some("trace".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.endpoint, "http://from-env");
        assert_eq!(resolved.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_cli_wins_over_env() {
        let cli = CliOverrides {
            endpoint: Some("http://from-cli".to_string()),
            log_level: Some(LogLevel::Off),
        };
        let env = |key: &str| match key {
            ENV_ENDPOINT => Some("http://from-env".to_string()),
            ENV_LOG_LEVEL => Some("trace".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&CastviewConfig::default(), &cli, env);
        assert_eq!(resolved.endpoint, "http://from-cli");
        assert_eq!(resolved.log_level, LogLevel::Off);
    }

    #[test]
    fn test_bad_env_log_level_falls_through_to_config() {
        let config = CastviewConfig {
            logging: LoggingConfig {
                level: Some(LogLevel::Error),
                file: None,
            },
            ..Default::default()
        };
        let env = |key: &str| (key == ENV_LOG_LEVEL).then(|| "loud".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.log_level, LogLevel::Error);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: CastviewConfig = toml::from_str("[logging]\nfile = \"x.log\"\n").unwrap();
        assert_eq!(config.logging.file.as_deref(), Some("x.log"));
        assert!(config.api.endpoint.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("castview-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[api\nendpoint = ").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("castview-gen-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.api.endpoint.is_none());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# [api]"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
