//! Repository Implementation

use chrono::{Datelike, NaiveDate};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::{Measurement, Station, StorageError};

/// Read-only repository over the climate database.
///
/// Holds a connection pool; concurrent requests share it safely since no
/// operation writes. Date filters bind the caller's string verbatim: dates
/// are stored as ISO-8601 TEXT, so well-formed inputs compare
/// chronologically and malformed inputs fall back to lexicographic TEXT
/// comparison.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Connect to the database at the given URL.
    pub async fn connect(url: &str) -> Result<Self, StorageError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await?;

        info!("Connected to climate database at {}", url);
        Ok(Self { pool })
    }

    /// Wrap an existing pool (used by tests and embedders).
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Every measurement row, in storage-native order.
    pub async fn all_measurements(&self) -> Result<Vec<Measurement>, StorageError> {
        let rows = sqlx::query_as::<_, Measurement>(
            "SELECT date, station, prcp, tobs FROM measurement",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Every station row.
    pub async fn all_stations(&self) -> Result<Vec<Station>, StorageError> {
        let rows = sqlx::query_as::<_, Station>(
            "SELECT station, name, latitude, longitude, elevation FROM station",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Measurements with `date >= start` (inclusive).
    pub async fn measurements_from(&self, start: &str) -> Result<Vec<Measurement>, StorageError> {
        let rows = sqlx::query_as::<_, Measurement>(
            "SELECT date, station, prcp, tobs FROM measurement WHERE date >= ?1",
        )
        .bind(start)
        .fetch_all(&self.pool)
        .await?;

        debug!("Open range from {} matched {} rows", start, rows.len());
        Ok(rows)
    }

    /// Measurements with `date` in `[start, end]` inclusive.
    pub async fn measurements_between(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<Measurement>, StorageError> {
        let rows = sqlx::query_as::<_, Measurement>(
            "SELECT date, station, prcp, tobs FROM measurement WHERE date BETWEEN ?1 AND ?2",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        debug!("Closed range {}..{} matched {} rows", start, end, rows.len());
        Ok(rows)
    }

    /// Latest date present in the measurement table, if any.
    pub async fn max_measurement_date(&self) -> Result<Option<NaiveDate>, StorageError> {
        let max = sqlx::query_scalar::<_, Option<NaiveDate>>("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await?;

        Ok(max)
    }

    /// Measurements strictly newer than one calendar year before the latest
    /// date on record (same month/day, year minus one — not a 365-day
    /// window, so results differ around leap days).
    ///
    /// An empty table yields an empty result. A latest date of Feb 29 has no
    /// same-month/day predecessor year and fails with
    /// [`StorageError::DateArithmetic`].
    pub async fn measurements_in_last_year(&self) -> Result<Vec<Measurement>, StorageError> {
        let Some(max_date) = self.max_measurement_date().await? else {
            return Ok(Vec::new());
        };

        let cutoff = max_date
            .with_year(max_date.year() - 1)
            .ok_or(StorageError::DateArithmetic(max_date))?;

        let rows = sqlx::query_as::<_, Measurement>(
            "SELECT date, station, prcp, tobs FROM measurement WHERE date > ?1",
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        debug!(
            "Last-year window after {} matched {} rows",
            cutoff,
            rows.len()
        );
        Ok(rows)
    }
}
