//! Entity models for the climate dataset.
//!
//! Immutable projections of the `measurement` and `station` tables. Rows are
//! bulk-loaded once outside this system and never mutated here.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// One daily precipitation/temperature reading at a station.
///
/// `date` identifies the reading but is not unique; multiple stations report
/// on the same day. Serializes with the date as an ISO-8601 string and the
/// numeric fields as native JSON numbers.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Measurement {
    pub date: NaiveDate,
    pub station: String,
    pub prcp: i64,
    pub tobs: i64,
}

/// Metadata record for a single weather station.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Station {
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}
