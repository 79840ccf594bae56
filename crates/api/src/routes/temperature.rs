//! Temperature Routes

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::routes::keyed_by_date;
use crate::{ApiError, AppState, TemperatureSummary};
use storage::Measurement;

/// Observations from the final calendar year of data, keyed by date with
/// stringified readings
pub async fn get_tobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Map<String, Value>>>, ApiError> {
    let rows = state.repository.measurements_in_last_year().await?;

    Ok(Json(keyed_by_date(
        rows.into_iter().map(|m| (m.date, m.tobs)),
    )))
}

/// TMIN/TMAX/TAVG for all dates on or after `start`
pub async fn get_range_open(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureSummary>, ApiError> {
    let rows = state.repository.measurements_from(&start).await?;
    summarize(&rows)
}

/// TMIN/TMAX/TAVG for dates between `start` and `end`, inclusive
pub async fn get_range_closed(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureSummary>, ApiError> {
    let rows = state.repository.measurements_between(&start, &end).await?;
    summarize(&rows)
}

fn summarize(rows: &[Measurement]) -> Result<Json<TemperatureSummary>, ApiError> {
    let tobs: Vec<i64> = rows.iter().map(|m| m.tobs).collect();

    TemperatureSummary::from_observations(&tobs)
        .map(Json)
        .ok_or(ApiError::EmptyRange)
}
