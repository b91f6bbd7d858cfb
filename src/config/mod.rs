//! Configuration module.
//!
//! Persisted strip settings live in a TOML file; see [`loader`]. Demo key
//! bindings are in [`keybindings`].

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, config_path_with_precedence, default_config_path,
    default_log_path, load_config_file, load_config_with_precedence, merge_config,
    save_config_file, CliOverrides, ConfigError, ConfigFile, FontSection, ResolvedConfig,
};
