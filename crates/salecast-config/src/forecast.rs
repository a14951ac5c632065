//! Forecast horizon limits.

use serde::{Deserialize, Serialize};

const fn default_max_horizon_years() -> u32 {
    50
}

const fn default_horizon_years() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForecastConfig {
    /// Largest horizon a forecast request may ask for.
    #[serde(default = "default_max_horizon_years")]
    pub max_horizon_years: u32,

    /// Horizon used when a request does not name one.
    #[serde(default = "default_horizon_years")]
    pub default_horizon_years: u32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            max_horizon_years: default_max_horizon_years(),
            default_horizon_years: default_horizon_years(),
        }
    }
}
