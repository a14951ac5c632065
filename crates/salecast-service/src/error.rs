use salecast_chart::ChartError;
use salecast_core::{ErrorKind, UserId, ValidationError};
use salecast_model::ModelError;
use salecast_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("No trained model found for user {0}. Add historical data first.")]
    NoModel(UserId),

    #[error("No historical data found for user {0}. Add data first.")]
    NoData(UserId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Chart(#[from] ChartError),
}

impl ServiceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoModel(_) => ErrorKind::NoModel,
            Self::NoData(_) => ErrorKind::NoData,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Store(e) => e.kind(),
            Self::Model(e) => e.kind(),
            Self::Chart(e) => e.kind(),
        }
    }
}
