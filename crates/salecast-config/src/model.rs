//! Regression trainer settings.

use serde::{Deserialize, Serialize};

/// Ridge penalty. Weak on purpose: it only keeps tiny datasets from
/// producing a singular system.
const fn default_alpha() -> f64 {
    0.1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// L2 regularization strength for the ridge fit.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
        }
    }
}
