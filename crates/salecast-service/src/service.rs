//! The per-user forecasting pipeline.

use std::io::Read;

use salecast_chart::{Chart, render_history};
use salecast_config::SalecastConfig;
use salecast_core::{Dataset, PredictionBatch, RawRecord, UserId};
use salecast_model::forecast::{self, check_horizon};
use salecast_model::{DEFAULT_ALPHA, MIN_TRAINING_RECORDS, ModelStore, TrainedModel, trainer};
use salecast_store::{RecordStore, append, ensure_csv_file_name, read_upload};

use crate::error::ServiceError;
use crate::report::{IngestReport, TrainingOutcome};

/// Tunables taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceOptions {
    pub alpha: f64,
    pub max_horizon_years: u32,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            max_horizon_years: 50,
        }
    }
}

impl From<&SalecastConfig> for ServiceOptions {
    fn from(config: &SalecastConfig) -> Self {
        Self {
            alpha: config.model.alpha,
            max_horizon_years: config.forecast.max_horizon_years,
        }
    }
}

/// Load, mutate, persist and retrain, one user at a time.
///
/// Holds no per-user state between calls; the files are the source of truth.
#[derive(Debug, Clone)]
pub struct ForecastService {
    records: RecordStore,
    models: ModelStore,
    options: ServiceOptions,
}

impl ForecastService {
    #[must_use]
    pub const fn new(records: RecordStore, models: ModelStore, options: ServiceOptions) -> Self {
        Self {
            records,
            models,
            options,
        }
    }

    /// Open both stores at the configured locations, creating them if needed.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if either directory cannot be created.
    pub fn from_config(config: &SalecastConfig) -> Result<Self, ServiceError> {
        let records = RecordStore::open(&config.storage.data_dir)?;
        let models = ModelStore::open(&config.storage.model_dir)?;
        Ok(Self::new(records, models, ServiceOptions::from(config)))
    }

    #[must_use]
    pub const fn records(&self) -> &RecordStore {
        &self.records
    }

    #[must_use]
    pub const fn models(&self) -> &ModelStore {
        &self.models
    }

    #[must_use]
    pub const fn options(&self) -> &ServiceOptions {
        &self.options
    }

    /// Append one manually entered record.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the record is invalid or persistence fails.
    /// On a validation failure nothing is written. A training failure after
    /// the records are saved is reported as [`TrainingOutcome::Failed`].
    pub fn add_record(&self, user_id: &UserId, raw: RawRecord) -> Result<IngestReport, ServiceError> {
        self.ingest(user_id, &[raw])
    }

    /// Append every row of an uploaded CSV file.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the file name is not `.csv`, a required
    /// column is missing, any row is invalid, or persistence fails. On a
    /// validation failure nothing is written. A training failure after the
    /// records are saved is reported as [`TrainingOutcome::Failed`].
    pub fn upload_csv<R: Read>(
        &self,
        user_id: &UserId,
        file_name: &str,
        reader: R,
    ) -> Result<IngestReport, ServiceError> {
        ensure_csv_file_name(file_name)?;
        let rows = read_upload(reader)?;
        tracing::debug!(%user_id, file_name, rows = rows.len(), "read upload");
        self.ingest(user_id, &rows)
    }

    fn ingest(&self, user_id: &UserId, rows: &[RawRecord]) -> Result<IngestReport, ServiceError> {
        let existing = self.records.load(user_id)?;
        let dataset = append(existing, rows)?;
        self.records.persist(user_id, &dataset)?;
        tracing::info!(%user_id, added = rows.len(), records = dataset.len(), "appended records");

        let training = if dataset.len() < MIN_TRAINING_RECORDS {
            tracing::debug!(%user_id, records = dataset.len(), "too few records to train");
            TrainingOutcome::Skipped {
                records: dataset.len(),
                required: MIN_TRAINING_RECORDS,
            }
        } else {
            match self.train(user_id, &dataset) {
                Ok(model) => TrainingOutcome::from(&model),
                Err(error) => {
                    tracing::warn!(%user_id, %error, "records saved but training failed");
                    TrainingOutcome::Failed {
                        reason: error.to_string(),
                    }
                }
            }
        };

        Ok(IngestReport {
            added: rows.len(),
            total: dataset.len(),
            training,
        })
    }

    /// Refit the user's model from the persisted dataset and save it.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` with kind `InsufficientData` when fewer than two
    /// records are stored, or a store/model error.
    pub fn retrain(&self, user_id: &UserId) -> Result<TrainedModel, ServiceError> {
        let dataset = self.records.load(user_id)?;
        self.train(user_id, &dataset)
    }

    fn train(&self, user_id: &UserId, dataset: &Dataset) -> Result<TrainedModel, ServiceError> {
        let model = trainer::fit(dataset, self.options.alpha)?;
        self.models.save(user_id, &model)?;
        tracing::info!(
            %user_id,
            records = model.n_samples,
            r_squared = model.r_squared,
            "retrained model"
        );
        Ok(model)
    }

    /// Historical sales chart, when the user has both data and a model.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if a stored file cannot be read.
    pub fn history(&self, user_id: &UserId) -> Result<Option<Chart>, ServiceError> {
        if !self.models.exists(user_id) {
            return Ok(None);
        }
        let dataset = self.records.load(user_id)?;
        if dataset.is_empty() {
            return Ok(None);
        }
        Ok(Some(render_history(&dataset)))
    }

    /// Forecast `horizon_years` of monthly sales after the last observed month.
    ///
    /// # Errors
    ///
    /// - `ServiceError::NoModel` when no model has been trained.
    /// - `ServiceError::NoData` when there is no dataset.
    /// - Validation when the horizon is zero or above the configured maximum.
    pub fn forecast(
        &self,
        user_id: &UserId,
        horizon_years: u32,
    ) -> Result<PredictionBatch, ServiceError> {
        let model = self
            .models
            .load(user_id)?
            .ok_or_else(|| ServiceError::NoModel(user_id.clone()))?;
        if !self.records.exists(user_id) {
            return Err(ServiceError::NoData(user_id.clone()));
        }
        let dataset = self.records.load(user_id)?;
        let last_observed = forecast::last_observed(&dataset)
            .ok_or_else(|| ServiceError::NoData(user_id.clone()))?;

        check_horizon(horizon_years, self.options.max_horizon_years)?;
        let batch = forecast::predict(&model, last_observed, horizon_years)?;
        tracing::info!(
            %user_id,
            horizon_years,
            %last_observed,
            predictions = batch.len(),
            "forecast generated"
        );
        Ok(batch)
    }
}
