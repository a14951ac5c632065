use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use salecast_core::{Dataset, UserId, ValidationError};

use crate::append::append;
use crate::error::StoreError;
use crate::upload::read_upload;

/// File-backed dataset storage, one CSV per user.
#[derive(Debug, Clone)]
pub struct RecordStore {
    data_dir: PathBuf,
}

impl RecordStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir).map_err(|e| StoreError::io(&data_dir, e))?;
        Ok(Self { data_dir })
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Dataset file for `user_id`: `<data_dir>/<user_id>.csv`.
    #[must_use]
    pub fn path_for(&self, user_id: &UserId) -> PathBuf {
        self.data_dir.join(format!("{user_id}.csv"))
    }

    #[must_use]
    pub fn exists(&self, user_id: &UserId) -> bool {
        self.path_for(user_id).is_file()
    }

    /// Load the user's dataset. A missing file is an empty dataset.
    ///
    /// # Errors
    ///
    /// - `StoreError::Io` if the file exists but cannot be read.
    /// - `StoreError::Validation` / `StoreError::Csv` if its contents are corrupt.
    pub fn load(&self, user_id: &UserId) -> Result<Dataset, StoreError> {
        let path = self.path_for(user_id);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(%user_id, "no dataset yet");
                return Ok(Dataset::new());
            }
            Err(error) => return Err(StoreError::io(path, error)),
        };

        let raw = read_upload(BufReader::new(file))?;
        let dataset = append(Dataset::new(), &raw).map_err(|error| {
            ValidationError::message(format!(
                "stored dataset {} is corrupt: {error}",
                path.display()
            ))
        })?;

        tracing::debug!(%user_id, records = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    /// Write the whole dataset, replacing any previous copy.
    ///
    /// The CSV is written to a temp file beside the target and renamed over
    /// it, so a failed write leaves the previous dataset in place.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` on any filesystem failure.
    pub fn persist(&self, user_id: &UserId, dataset: &Dataset) -> Result<(), StoreError> {
        let path = self.path_for(user_id);
        let tmp = tempfile::NamedTempFile::new_in(&self.data_dir)
            .map_err(|e| StoreError::io(&self.data_dir, e))?;

        {
            let mut writer = csv::Writer::from_writer(BufWriter::new(tmp.as_file()));
            if dataset.is_empty() {
                writer.write_record(crate::REQUIRED_COLUMNS)?;
            }
            for record in dataset {
                writer.serialize(record)?;
            }
            let mut inner = writer
                .into_inner()
                .map_err(|e| StoreError::io(tmp.path(), e.into_error()))?;
            inner.flush().map_err(|e| StoreError::io(tmp.path(), e))?;
        }

        tmp.persist(&path)
            .map_err(|e| StoreError::io(&path, e.error))?;

        tracing::info!(%user_id, records = dataset.len(), path = %path.display(), "persisted dataset");
        Ok(())
    }
}
