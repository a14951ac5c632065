//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_format() -> String {
    String::from("table")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given (json, table, raw).
    #[serde(default = "default_format")]
    pub default_format: String,

    /// User id used when `--user` is not given.
    #[serde(default)]
    pub default_user: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            default_user: String::new(),
        }
    }
}
