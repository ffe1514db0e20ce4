//! TOML-based configuration for the admin tool.
//!
//! Reads and writes [`PanelConfig`] at the platform-appropriate location:
//! - Windows:  `%APPDATA%\NatPanel\config.toml`
//! - macOS:    `~/Library/Application Support/NatPanel/config.toml`
//! - other:    `$XDG_CONFIG_HOME/natpanel/config.toml` or `~/.config/natpanel/config.toml`
//!
//! Example:
//!
//! ```toml
//! [panel]
//! log_level = "debug"
//!
//! [defaults]
//! network_name = "lab-nat"
//! cidr = "192.168.122.0/24"
//! host_ip = "192.168.122.1"
//! dhcp_start = "192.168.122.2"
//! dhcp_end = "192.168.122.254"
//! ```
//!
//! # Serde default values
//!
//! Every section and every field falls back to its built-in value when absent,
//! so a missing file, an empty file, and a partial file all load.

use std::path::{Path, PathBuf};

use natpanel_core::NetworkDefaults;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PanelConfig {
    #[serde(default)]
    pub panel: PanelSettings,
    /// Suggestions pre-filled on an empty network form.
    #[serde(default)]
    pub defaults: NetworkDefaults,
}

/// General tool settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PanelSettings {
    /// Schema version string – bump when breaking changes are introduced.
    #[serde(default = "default_version")]
    pub version: String,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    /// `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_version() -> String {
    "1.0".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            log_level: default_log_level(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolves the full path to the config file on this platform.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the environment names no
/// base directory (no `APPDATA` on Windows, no `XDG_CONFIG_HOME` or `HOME`
/// elsewhere).
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    platform_config_base()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Loads `PanelConfig` from the platform location.
///
/// A missing file, or a host without a config directory, yields
/// `PanelConfig::default()`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config() -> Result<PanelConfig, ConfigError> {
    match config_file_path() {
        Ok(path) => load_config_from(&path),
        Err(ConfigError::NoPlatformConfigDir) => Ok(PanelConfig::default()),
        Err(e) => Err(e),
    }
}

/// Loads `PanelConfig` from `path`, returning `PanelConfig::default()` if the
/// file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<PanelConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(PanelConfig::default()),
        Err(source) => return Err(io_error(path, source)),
    };
    Ok(toml::from_str(&content)?)
}

/// Writes `config` to `path`, creating missing parent directories.
///
/// Nothing touches the disk if serialization fails.
///
/// # Errors
///
/// Returns [`ConfigError::Serialize`] or [`ConfigError::Io`].
pub fn save_config_to(path: &Path, config: &PanelConfig) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(config)?;
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| io_error(dir, source))?;
    }
    std::fs::write(path, content).map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> ConfigError {
    ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// `NatPanel` directory under the platform's per-user config base.
fn platform_config_base() -> Option<PathBuf> {
    let env_dir = |name: &str| {
        std::env::var_os(name)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    };

    if cfg!(target_os = "windows") {
        env_dir("APPDATA").map(|appdata| appdata.join("NatPanel"))
    } else if cfg!(target_os = "macos") {
        env_dir("HOME").map(|home| home.join("Library/Application Support/NatPanel"))
    } else {
        env_dir("XDG_CONFIG_HOME")
            .or_else(|| env_dir("HOME").map(|home| home.join(".config")))
            .map(|base| base.join("natpanel"))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("natpanel_test_{}", Uuid::new_v4()))
    }

    #[test]
    fn test_panel_config_default_log_level_is_info() {
        let cfg = PanelConfig::default();
        assert_eq!(cfg.panel.log_level, "info");
        assert_eq!(cfg.panel.version, "1.0");
    }

    #[test]
    fn test_panel_config_default_carries_form_defaults() {
        let cfg = PanelConfig::default();
        assert_eq!(cfg.defaults, NetworkDefaults::default());
    }

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let cfg: PanelConfig = toml::from_str("").expect("deserialize empty");
        assert_eq!(cfg, PanelConfig::default());
    }

    #[test]
    fn test_deserialize_partial_defaults_overrides_only_given_keys() {
        // Arrange
        let toml_str = r#"
[defaults]
cidr = "192.168.122.0/24"
host_ip = "192.168.122.1"
"#;

        // Act
        let cfg: PanelConfig = toml::from_str(toml_str).expect("deserialize partial");

        // Assert
        assert_eq!(cfg.defaults.cidr, "192.168.122.0/24");
        assert_eq!(cfg.defaults.host_ip, "192.168.122.1");
        assert_eq!(cfg.defaults.network_name, "alpha-nat");
        assert_eq!(cfg.panel.log_level, "info");
    }

    #[test]
    fn test_deserialize_invalid_toml_returns_parse_error() {
        let result: Result<PanelConfig, toml::de::Error> = toml::from_str("[[[ not valid toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_from_missing_file_returns_default() {
        let path = temp_dir().join("config.toml");

        let cfg = load_config_from(&path).expect("missing file is not an error");

        assert_eq!(cfg, PanelConfig::default());
    }

    #[test]
    fn test_load_config_from_malformed_file_returns_parse_error() {
        // Arrange
        let dir = temp_dir();
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[panel\nlog_level = ").unwrap();

        // Act
        let result = load_config_from(&path);

        // Assert
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_and_load_config_round_trip_via_temp_dir() {
        // Arrange: nested path exercises parent directory creation
        let dir = temp_dir();
        let path = dir.join("nested").join("config.toml");
        let mut cfg = PanelConfig::default();
        cfg.panel.log_level = "debug".to_string();
        cfg.defaults.bridge_name = "virbr7".to_string();

        // Act
        save_config_to(&path, &cfg).expect("save");
        let loaded = load_config_from(&path).expect("load");

        // Assert
        assert_eq!(loaded, cfg);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_config_file_path_ends_with_config_toml() {
        if let Ok(path) = config_file_path() {
            assert!(
                path.ends_with("config.toml"),
                "config file must be named config.toml, got {path:?}"
            );
        }
        // NoPlatformConfigDir in a stripped environment is also acceptable.
    }
}
