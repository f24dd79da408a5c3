//! # Configuration
//!
//! Roster configuration is managed by [`confique`], which handles layered loading
//! from a TOML file and environment variables.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `ROSTER_STORAGE_KEY`, `ROSTER_EXPORT_FILENAME`,
//!    `ROSTER_SEED_SAMPLE_DATA`.
//! 2. **Config file**: `<data dir>/roster.toml`, if present.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage_key` | `mahasiswa_data` | Slot the roster is persisted under |
//! | `export_filename` | `mahasiswa.json` | File name used by `roster export` |
//! | `seed_sample_data` | `true` | Seed the sample roster into an empty store |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, RosterError};

pub const CONFIG_FILENAME: &str = "roster.toml";
pub const DEFAULT_STORAGE_KEY: &str = "mahasiswa_data";
pub const DEFAULT_EXPORT_FILENAME: &str = "mahasiswa.json";

/// Configuration for roster, stored in `roster.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Storage slot holding the roster (a file name stem for the file backend).
    #[config(env = "ROSTER_STORAGE_KEY", default = "mahasiswa_data")]
    pub storage_key: String,

    /// File name written by `export` when no explicit path is given.
    #[config(env = "ROSTER_EXPORT_FILENAME", default = "mahasiswa.json")]
    pub export_filename: String,

    /// Seed the built-in sample roster when the store is empty at startup.
    #[config(env = "ROSTER_SEED_SAMPLE_DATA", default = true)]
    pub seed_sample_data: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
            seed_sample_data: true,
        }
    }
}

impl RosterConfig {
    /// Loads configuration for `data_dir` (environment, then `roster.toml`, then defaults).
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::builder()
            .env()
            .file(Self::config_path(data_dir))
            .load()
            .map_err(|e| RosterError::Config(e.to_string()))
    }

    pub fn config_path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILENAME)
    }

    /// Where `export` writes by default.
    pub fn export_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.export_filename)
    }

    /// A commented sample `roster.toml`.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}
