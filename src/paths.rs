//! Centralized path definitions for replate
//!
//! Single source of truth for where configuration and the recipient
//! registry live.
//!
//! ## Storage Layout
//!
//! ### Per-Project (working directory)
//!
//! ```text
//! kitchen/
//! ├── replate.toml              # Site location, risk/impact settings
//! └── recipients.toml           # Recipient registry
//! ```
//!
//! ### Global (user-level fallback)
//!
//! ```text
//! ~/.replate/
//! └── config.toml               # Used when no replate.toml is present
//! ```

use std::path::PathBuf;

/// Project configuration filename
pub const REPLATE_TOML: &str = "replate.toml";

/// Default recipient registry filename
pub const RECIPIENTS_TOML: &str = "recipients.toml";

/// Global config directory name
const GLOBAL_DIR: &str = ".replate";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the project `replate.toml` in the working directory
#[must_use]
pub fn project_config() -> PathBuf {
    PathBuf::from(REPLATE_TOML)
}

/// Get the global replate directory.
///
/// Returns `~/.replate/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.replate/config.toml`, the fallback when a working directory
/// has no `replate.toml` of its own.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
