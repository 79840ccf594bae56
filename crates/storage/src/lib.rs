//! Storage Layer
//!
//! Read-only SQLite access to the climate-observation dataset with
//! repository pattern.

mod models;
mod repository;

pub use models::{Measurement, Station};
pub use repository::Repository;

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("No calendar-year predecessor for date: {0}")]
    DateArithmetic(chrono::NaiveDate),
}
