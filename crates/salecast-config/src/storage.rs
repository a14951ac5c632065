//! Where per-user datasets and model artifacts live.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> PathBuf {
    PathBuf::from("user_data")
}

fn default_model_dir() -> PathBuf {
    PathBuf::from("models")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding `<user_id>.csv` datasets and `users.jsonl`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory holding `<user_id>_model.json` artifacts.
    #[serde(default = "default_model_dir")]
    pub model_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            model_dir: default_model_dir(),
        }
    }
}

impl StorageConfig {
    /// Path of the JSONL user registry.
    #[must_use]
    pub fn users_file(&self) -> PathBuf {
        self.data_dir.join("users.jsonl")
    }
}
