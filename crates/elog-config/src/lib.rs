//! # elog-config
//!
//! Layered configuration loading for the elog client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ELOG_*` prefix, `__` as separator)
//! 2. Project-level `.elog/config.toml`
//! 3. User-level `~/.config/elog/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ELOG_SERVER__BASE_URL` -> `server.base_url`,
//! `ELOG_SHIFT__CUTOFF` -> `shift.cutoff`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use elog_config::ElogConfig;
//!
//! let config = ElogConfig::load_with_dotenv().expect("config");
//! println!("service: {}", config.server.base_url);
//! ```

mod error;
mod general;
mod server;
mod shift;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use server::ServerConfig;
pub use shift::ShiftConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ElogConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub shift: ShiftConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ElogConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be read or a value does not
    /// fit its field, or if the loaded values fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".elog/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ELOG_").split("__"))
    }

    /// Reject values that parse but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("elog").join("config.toml"))
    }
}
