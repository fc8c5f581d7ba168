//! Domain model: transfer records, datasets, and the error taxonomy.

pub mod error;
mod record;

pub use error::{AppError, LoadError};
pub use record::{Dataset, TransferRecord};
