//! # csstags-config
//!
//! Layered configuration loading for csstags using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CSSTAGS_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.csstags/config.toml`
//! 4. User-level `~/.config/csstags/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CSSTAGS_SCAN__KINDS` -> `scan.kinds`,
//! `CSSTAGS_OUTPUT__FORMAT` -> `output.format`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use csstags_config::CsstagsConfig;
//!
//! let config = CsstagsConfig::load_with_dotenv(None).expect("config");
//! let kinds = config.scan.enabled_kinds().expect("valid kinds");
//! println!("{} kinds enabled", kinds.len());
//! ```

mod error;
mod output;
mod scan;

pub use error::ConfigError;
pub use output::{OutputConfig, TagFormat};
pub use scan::{ScanConfig, parse_kind_letters};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CsstagsConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl CsstagsConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    /// Returns [`ConfigError::Figment`] if a source fails to parse, and
    /// [`ConfigError::InvalidValue`] if `scan.kinds` names an unknown kind.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(explicit).extract()?;
        config.scan.enabled_kinds()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".csstags/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit --config file
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("CSSTAGS_").split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("csstags").join("config.toml"))
    }
}
