//! # salecast-store
//!
//! The record store: per-user, append-only sales datasets.
//!
//! - [`append`] validates a batch of raw records and merges it all-or-nothing.
//! - [`read_upload`] turns an uploaded CSV into raw records, requiring the
//!   `year`, `month` and `sales` columns.
//! - [`RecordStore`] persists a whole dataset per user as
//!   `<data_dir>/<user_id>.csv` and loads it back (empty when absent).
//!
//! The persisted file is the only source of truth; nothing is cached
//! between calls.

mod append;
pub mod error;
mod record_store;
mod upload;

pub use append::append;
pub use error::StoreError;
pub use record_store::RecordStore;
pub use upload::{REQUIRED_COLUMNS, ensure_csv_file_name, read_upload};
