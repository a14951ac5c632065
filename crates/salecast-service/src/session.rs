//! Per-session forecast state.

use salecast_chart::export_csv;
use salecast_core::{PredictionBatch, UserId};

use crate::error::ServiceError;
use crate::service::ForecastService;

/// The most recent prediction batch for one logged-in user.
///
/// A failed prediction keeps the previous batch.
#[derive(Debug, Clone)]
pub struct Session {
    user_id: UserId,
    current_batch: Option<PredictionBatch>,
}

impl Session {
    #[must_use]
    pub const fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            current_batch: None,
        }
    }

    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    #[must_use]
    pub const fn current_batch(&self) -> Option<&PredictionBatch> {
        self.current_batch.as_ref()
    }

    /// Forecast and make the result the current batch.
    ///
    /// # Errors
    ///
    /// Propagates [`ForecastService::forecast`] errors.
    pub fn predict(
        &mut self,
        service: &ForecastService,
        horizon_years: u32,
    ) -> Result<&PredictionBatch, ServiceError> {
        let batch = service.forecast(&self.user_id, horizon_years)?;
        Ok(self.current_batch.insert(batch))
    }

    /// The current batch as CSV.
    ///
    /// # Errors
    ///
    /// Returns kind `NoData` when nothing has been predicted yet.
    pub fn export_csv(&self) -> Result<Vec<u8>, ServiceError> {
        let bytes = export_csv(self.current_batch.as_ref())?;
        tracing::info!(user_id = %self.user_id, bytes = bytes.len(), "exported predictions");
        Ok(bytes)
    }

    pub fn clear(&mut self) {
        self.current_batch = None;
    }
}
