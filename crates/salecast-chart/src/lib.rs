//! # salecast-chart
//!
//! Presentation adapter for Salecast.
//!
//! Charts are emitted as Plotly-compatible figure JSON, optionally wrapped in
//! an embeddable HTML fragment. Nothing here draws pixels; the page that
//! embeds the fragment is expected to load `plotly.js` itself.
//!
//! The current prediction batch can also be exported as CSV.

pub mod chart;
pub mod error;
pub mod export;

pub use chart::{Chart, Series, render_forecast, render_history};
pub use error::ChartError;
pub use export::{EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME, export_csv};
