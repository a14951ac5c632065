//! # salecast-config
//!
//! Layered configuration loading for Salecast using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SALECAST_*` prefix, `__` as separator)
//! 2. Project-level `.salecast/config.toml`
//! 3. User-level `~/.config/salecast/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SALECAST_STORAGE__DATA_DIR` -> `storage.data_dir`,
//! `SALECAST_MODEL__ALPHA` -> `model.alpha`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use salecast_config::SalecastConfig;
//!
//! let config = SalecastConfig::load_with_dotenv().expect("config");
//! println!("datasets in {}", config.storage.data_dir.display());
//! ```

mod error;
mod forecast;
mod general;
mod model;
mod storage;

pub use error::ConfigError;
pub use forecast::ForecastConfig;
pub use general::GeneralConfig;
pub use model::ModelConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SalecastConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub forecast: ForecastConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SalecastConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load with an explicit TOML file layered between the project file and env.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let figment = Self::figment().merge(Toml::file(path));
        Self::extract(figment.merge(Env::prefixed("SALECAST_").split("__")))
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".salecast/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SALECAST_").split("__"))
    }

    /// Extract and validate a config from any figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on extraction failure or invalid values.
    pub fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.model.alpha.is_finite() || self.model.alpha <= 0.0 {
            return Err(invalid("model.alpha", "must be a positive finite number"));
        }
        if self.forecast.max_horizon_years == 0 {
            return Err(invalid("forecast.max_horizon_years", "must be at least 1"));
        }
        if self.forecast.default_horizon_years == 0
            || self.forecast.default_horizon_years > self.forecast.max_horizon_years
        {
            return Err(invalid(
                "forecast.default_horizon_years",
                "must be between 1 and forecast.max_horizon_years",
            ));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("salecast").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
