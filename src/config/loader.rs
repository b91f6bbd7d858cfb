//! Configuration file loading with precedence handling.

use crate::model::{FlankLimit, FontAttributes, FontStyle, Justification};
use crate::state::PortSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "LABELSTRIP_CONFIG";

/// Environment variable overriding the justification (`start` or `end`).
pub const JUSTIFICATION_ENV: &str = "LABELSTRIP_JUSTIFICATION";

/// Errors that can occur during config loading and saving.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// Failed to serialize or write the config file.
    #[error("Failed to write config file at {path}: {reason}")]
    WriteError {
        /// Path that failed to write.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/labelstrip/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// `"start"` or `"end"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<Justification>,

    /// Windowed labels follow the pointer when items are too dense.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_port: Option<bool>,

    /// Labels shown either side of the hovered one; negative is unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flank_limit: Option<i32>,

    /// Whether `flank_limit` applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flank_mode: Option<bool>,

    /// The port toggle cycles through "off" instead of "flanked".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_none: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<PathBuf>,

    /// Label font. Kept last: TOML tables follow plain keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontSection>,
}

/// `[font]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FontSection {
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face: Option<String>,
    /// `plain`, `bold`, `italic` or `bold-italic`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<FontStyle>,
    /// Point size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Smallest size when following the zoom level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<u32>,
    /// Largest size when following the zoom level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u32>,
    /// Never follow the zoom level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<bool>,
}

impl FontSection {
    fn resolve(self, defaults: FontAttributes) -> FontAttributes {
        FontAttributes {
            face: self.face.unwrap_or(defaults.face),
            style: self.style.unwrap_or(defaults.style),
            size: self.size.unwrap_or(defaults.size),
            min_size: self.min_size.unwrap_or(defaults.min_size),
            max_size: self.max_size.unwrap_or(defaults.max_size),
            fixed: self.fixed.unwrap_or(defaults.fixed),
        }
        .normalized()
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Label justification.
    pub justification: Justification,
    /// Label port settings.
    pub port: PortSettings,
    /// Label font.
    pub font: FontAttributes,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            justification: Justification::Start,
            port: PortSettings::default(),
            font: FontAttributes::default(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// The file form of these settings, every field present.
    pub fn to_config_file(&self) -> ConfigFile {
        ConfigFile {
            justification: Some(self.justification),
            label_port: Some(self.port.enabled),
            flank_limit: Some(self.port.flank_limit.to_raw()),
            flank_mode: Some(self.port.flank_mode),
            default_none: Some(self.port.default_none),
            log_file_path: Some(self.log_file_path.clone()),
            font: Some(FontSection {
                face: Some(self.font.face.clone()),
                style: Some(self.font.style),
                size: Some(self.font.size),
                min_size: Some(self.font.min_size),
                max_size: Some(self.font.max_size),
                fixed: Some(self.font.fixed),
            }),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/labelstrip/labelstrip.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("labelstrip").join("labelstrip.log")
    } else {
        PathBuf::from("labelstrip.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Write resolved settings to `path`, creating its directory if needed.
///
/// # Errors
///
/// Returns [`ConfigError::WriteError`] if serialization, directory creation
/// or the write fails.
pub fn save_config_file(path: &Path, config: &ResolvedConfig) -> Result<(), ConfigError> {
    if path.file_name().is_none() {
        return Err(ConfigError::InvalidPath(path.display().to_string()));
    }
    let write_error = |reason: String| ConfigError::WriteError {
        path: path.to_path_buf(),
        reason,
    };
    let contents =
        toml::to_string_pretty(&config.to_config_file()).map_err(|e| write_error(e.to_string()))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
    }
    std::fs::write(path, contents).map_err(|e| write_error(e.to_string()))?;
    debug!(path = %path.display(), "Saved settings");
    Ok(())
}

/// Resolve default config file path.
///
/// Returns `~/.config/labelstrip/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("labelstrip").join("config.toml"))
}

/// Path settings are read from and written back to.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `LABELSTRIP_CONFIG` environment variable
/// 3. Default path `~/.config/labelstrip/config.toml`
pub fn config_path_with_precedence(config_path: Option<PathBuf>) -> Option<PathBuf> {
    config_path
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from))
        .or_else(default_config_path)
}

/// Load configuration with precedence handling.
///
/// See [`config_path_with_precedence`]. Missing config files are NOT errors;
/// defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    match config_path_with_precedence(config_path) {
        Some(path) => load_config_file(path),
        None => Ok(None),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `LABELSTRIP_JUSTIFICATION`: `start` or `end`; other values are ignored
///   with a warning.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(value) = std::env::var(JUSTIFICATION_ENV) {
        match value.trim().to_ascii_lowercase().as_str() {
            "start" => config.justification = Justification::Start,
            "end" => config.justification = Justification::End,
            other => warn!(value = other, "Ignoring unknown {JUSTIFICATION_ENV}"),
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let port = PortSettings {
        enabled: config.label_port.unwrap_or(defaults.port.enabled),
        flank_mode: config.flank_mode.unwrap_or(defaults.port.flank_mode),
        flank_limit: config
            .flank_limit
            .map_or(defaults.port.flank_limit, FlankLimit::from_raw),
        default_none: config.default_none.unwrap_or(defaults.port.default_none),
    };

    ResolvedConfig {
        justification: config.justification.unwrap_or(defaults.justification),
        port,
        font: config
            .font
            .map_or(defaults.font.clone(), |section| section.resolve(defaults.font)),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// CLI flags that override configuration when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--justify`.
    pub justification: Option<Justification>,
    /// `--flank`; enables flank mode with the given limit.
    pub flank_limit: Option<FlankLimit>,
    /// `--no-port`.
    pub disable_port: bool,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: &CliOverrides) -> ResolvedConfig {
    if let Some(justification) = overrides.justification {
        config.justification = justification;
    }

    if let Some(limit) = overrides.flank_limit {
        config.port.flank_mode = true;
        config.port.flank_limit = limit;
    }

    if overrides.disable_port {
        config.port.enabled = false;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

#[cfg(test)]
mod log_path_tests {
    use super::*;

    #[test]
    fn default_log_path_ends_with_labelstrip_log() {
        let path = default_log_path();
        assert!(
            path.to_string_lossy().ends_with("labelstrip.log"),
            "Default log path should end with 'labelstrip.log', got: {:?}",
            path
        );
    }

    #[test]
    fn resolved_config_default_includes_log_path() {
        let config = ResolvedConfig::default();
        assert!(!config.log_file_path.as_os_str().is_empty());
    }

    #[test]
    fn config_file_log_path_overrides_default() {
        let custom_path = PathBuf::from("/custom/path/to/app.log");
        let config_file = ConfigFile {
            log_file_path: Some(custom_path.clone()),
            ..ConfigFile::default()
        };

        let resolved = merge_config(Some(config_file));
        assert_eq!(resolved.log_file_path, custom_path);
    }

    #[test]
    fn missing_config_file_log_path_uses_default() {
        let resolved = merge_config(Some(ConfigFile::default()));
        assert_eq!(resolved.log_file_path, default_log_path());
    }
}
