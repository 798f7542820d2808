//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.milk-island/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Loading and resolution run before the logger exists, so nothing in here
//! logs. Rejected values are collected in [`ResolvedConfig::warnings`] and
//! errors are returned; `main` reports both once logging is up.

use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::route::Route;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct IslandConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_route: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LayoutConfig {
    pub compact_width: Option<u16>,
    pub sidebar_width: Option<u16>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Terminals narrower than this get the compact (mobile) chat layout.
pub const DEFAULT_COMPACT_WIDTH: u16 = 80;
pub const DEFAULT_SIDEBAR_WIDTH: u16 = 32;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_LOG_FILE: &str = "milk-island.log";

pub const ENV_ROUTE: &str = "MILK_ISLAND_ROUTE";
pub const ENV_LOG_LEVEL: &str = "MILK_ISLAND_LOG_LEVEL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub start_route: Route,
    pub compact_width: u16,
    pub sidebar_width: u16,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    /// Values that were rejected while resolving, one message each
    pub warnings: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with_env(&IslandConfig::default(), &CliOverrides::default(), |_| None)
    }
}

/// Values given on the command line (None = flag not passed).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub route: Option<Route>,
    pub log_level: Option<LevelFilter>,
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

/// Returns the path to `~/.milk-island/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".milk-island").join("config.toml"))
}

/// Load config from `~/.milk-island/config.toml`.
/// Without a home directory there is no file layer and the defaults apply.
pub fn load_config() -> Result<IslandConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(IslandConfig::default()),
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `IslandConfig::default()`; failing to write it is `ConfigError::Io`.
/// If it exists but is malformed, returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<IslandConfig, ConfigError> {
    if !path.exists() {
        generate_default_config(path)?;
        return Ok(IslandConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Milk Island Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_route = "/"                 # "/", "/login" or "/chat" (or MILK_ISLAND_ROUTE)

# [layout]
# compact_width = 80                # narrower terminals hide the chat sidebar
# sidebar_width = 32

# [logging]
# level = "debug"                   # "off", "error", "warn", "info", "debug", "trace"
# file = "milk-island.log"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(ConfigError::Io)?;
    }
    fs::write(path, DEFAULT_CONFIG_CONTENT).map_err(ConfigError::Io)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &IslandConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment supplied by `env`.
pub fn resolve_with_env<F>(config: &IslandConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    // Route: CLI → env → config → default. Bad values fall through to the next layer.
    let start_route = cli
        .route
        .or_else(|| env(ENV_ROUTE).and_then(|s| parse_layer::<Route>(&s, ENV_ROUTE, &mut warnings)))
        .or_else(|| {
            config
                .general
                .start_route
                .as_deref()
                .and_then(|s| parse_layer::<Route>(s, "general.start_route", &mut warnings))
        })
        .unwrap_or_default();

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .or_else(|| {
            env(ENV_LOG_LEVEL).and_then(|s| parse_layer::<LevelFilter>(&s, ENV_LOG_LEVEL, &mut warnings))
        })
        .or_else(|| {
            config
                .logging
                .level
                .as_deref()
                .and_then(|s| parse_layer::<LevelFilter>(s, "logging.level", &mut warnings))
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        start_route,
        compact_width: config
            .layout
            .compact_width
            .unwrap_or(DEFAULT_COMPACT_WIDTH),
        sidebar_width: config
            .layout
            .sidebar_width
            .unwrap_or(DEFAULT_SIDEBAR_WIDTH),
        log_level,
        log_file: PathBuf::from(
            config
                .logging
                .file
                .as_deref()
                .unwrap_or(DEFAULT_LOG_FILE),
        ),
        warnings,
    }
}

/// Parse one layer's value. A bad value is recorded and skipped so the next layer applies.
fn parse_layer<T>(value: &str, source: &str, warnings: &mut Vec<String>) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warnings.push(format!("Ignoring {source} = {value:?}: {e}"));
            None
        }
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
        let config = IslandConfig::default();
        assert!(config.general.start_route.is_none());
        assert!(config.layout.compact_width.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&IslandConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.start_route, Route::Home);
        assert_eq!(resolved.compact_width, DEFAULT_COMPACT_WIDTH);
        assert_eq!(resolved.sidebar_width, DEFAULT_SIDEBAR_WIDTH);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(resolved, ResolvedConfig::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = IslandConfig {
            general: GeneralConfig {
                start_route: Some("/login".to_string()),
            },
            layout: LayoutConfig {
                compact_width: Some(100),
                sidebar_width: Some(28),
            },
            logging: LoggingConfig {
                level: Some("warn".to_string()),
                file: Some("/tmp/island.log".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.start_route, Route::Login);
        assert_eq!(resolved.compact_width, 100);
        assert_eq!(resolved.sidebar_width, 28);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/island.log"));
    }

    #[test]
    fn test_env_wins_over_config() {
        let config = IslandConfig {
            general: GeneralConfig {
                start_route: Some("/login".to_string()),
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            ENV_ROUTE => Some("/chat".to_string()),
            ENV_LOG_LEVEL => Some("trace".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.start_route, Route::Chat);
        assert_eq!(resolved.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_cli_wins_over_env() {
        let cli = CliOverrides {
            route: Some(Route::Login),
            log_level: Some(LevelFilter::Error),
        };
        let env = |_: &str| Some("/chat".to_string());
        let resolved = resolve_with_env(&IslandConfig::default(), &cli, env);
        assert_eq!(resolved.start_route, Route::Login);
        assert_eq!(resolved.log_level, LevelFilter::Error);
    }

    #[test]
    fn test_invalid_env_route_falls_through_to_config() {
        let config = IslandConfig {
            general: GeneralConfig {
                start_route: Some("/chat".to_string()),
            },
            ..Default::default()
        };
        let env = |key: &str| (key == ENV_ROUTE).then(|| "/admin".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.start_route, Route::Chat);
        assert_eq!(resolved.warnings.len(), 1);
        assert!(resolved.warnings[0].contains(ENV_ROUTE));
        assert!(resolved.warnings[0].contains("/admin"));
    }

    #[test]
    fn test_valid_layers_record_no_warnings() {
        let env = |key: &str| (key == ENV_ROUTE).then(|| "/login/".to_string());
        let resolved = resolve_with_env(&IslandConfig::default(), &CliOverrides::default(), env);
        assert_eq!(resolved.start_route, Route::Login);
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn test_each_rejected_layer_is_recorded() {
        let config = IslandConfig {
            general: GeneralConfig {
                start_route: Some("/settings".to_string()),
            },
            logging: LoggingConfig {
                level: Some("loud".to_string()),
                file: None,
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            ENV_ROUTE => Some("/admin".to_string()),
            ENV_LOG_LEVEL => Some("chatty".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.start_route, Route::Home);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.warnings.len(), 4);
        assert!(resolved.warnings.iter().any(|w| w.contains("general.start_route")));
        assert!(resolved.warnings.iter().any(|w| w.contains("logging.level")));
    }

    #[test]
    fn test_invalid_config_route_falls_back_to_home() {
        let config = IslandConfig {
            general: GeneralConfig {
                start_route: Some("/settings".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.start_route, Route::Home);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[layout]
sidebar_width = 40
"#;
        let config: IslandConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.layout.sidebar_width, Some(40));
        assert!(config.layout.compact_width.is_none());
        assert!(config.general.start_route.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_load_missing_file_generates_commented_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.general.start_route.is_none());
        assert!(path.exists());

        // The generated file is all comments, so it parses back to defaults
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.layout.compact_width.is_none());
    }

    #[test]
    fn test_load_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\nstart_route = \"/chat\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.general.start_route.as_deref(), Some("/chat"));
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[layout]\ncompact_width = \"wide\"\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_unwritable_default_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the config directory should be
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("config.toml");

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
