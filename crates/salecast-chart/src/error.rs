use salecast_core::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// There is no prediction batch to export.
    #[error("No data: run a prediction before exporting")]
    NoData,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChartError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NoData => ErrorKind::NoData,
            Self::Csv(_) | Self::Io(_) => ErrorKind::Io,
        }
    }
}
