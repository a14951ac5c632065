//! Per-user model artifacts.
//!
//! A model is stored as a small JSON blob at `<model_dir>/<user_id>_model.json`.
//! Callers treat the contents as opaque; only this module reads them.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use salecast_core::UserId;

use crate::error::ModelError;
use crate::trainer::TrainedModel;

#[derive(Debug, Clone)]
pub struct ModelStore {
    model_dir: PathBuf,
}

impl ModelStore {
    /// Open a store rooted at `model_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Io` if the directory cannot be created.
    pub fn open(model_dir: impl Into<PathBuf>) -> Result<Self, ModelError> {
        let model_dir = model_dir.into();
        std::fs::create_dir_all(&model_dir).map_err(|e| ModelError::io(&model_dir, e))?;
        Ok(Self { model_dir })
    }

    #[must_use]
    pub fn model_dir(&self) -> &Path {
        &self.model_dir
    }

    #[must_use]
    pub fn path_for(&self, user_id: &UserId) -> PathBuf {
        self.model_dir.join(format!("{user_id}_model.json"))
    }

    /// Save `model`, replacing the user's previous model.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Io` or `ModelError::Artifact` on failure; the
    /// previous artifact is left untouched in that case.
    pub fn save(&self, user_id: &UserId, model: &TrainedModel) -> Result<(), ModelError> {
        let path = self.path_for(user_id);
        let tmp = tempfile::NamedTempFile::new_in(&self.model_dir)
            .map_err(|e| ModelError::io(&self.model_dir, e))?;

        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut writer, model).map_err(|source| {
                ModelError::Artifact {
                    path: path.clone(),
                    source,
                }
            })?;
            writer.flush().map_err(|e| ModelError::io(tmp.path(), e))?;
        }

        tmp.persist(&path).map_err(|e| ModelError::io(&path, e.error))?;
        tracing::info!(%user_id, path = %path.display(), "saved model");
        Ok(())
    }

    /// Load the user's model. `None` means no model has been trained yet.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Io` if the file exists but cannot be read, or
    /// `ModelError::Artifact` if it cannot be decoded.
    pub fn load(&self, user_id: &UserId) -> Result<Option<TrainedModel>, ModelError> {
        let path = self.path_for(user_id);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(ModelError::io(path, error)),
        };

        let model = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| ModelError::Artifact { path, source })?;
        Ok(Some(model))
    }

    #[must_use]
    pub fn exists(&self, user_id: &UserId) -> bool {
        self.path_for(user_id).is_file()
    }
}
