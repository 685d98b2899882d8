//! Path utilities for patentcat.
//!
//! User-level files live under `~/.patentcat/`:
//! - `~/.patentcat/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the patentcat home directory (`~/.patentcat/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".patentcat")
}

/// Returns the default config file path (`~/.patentcat/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
