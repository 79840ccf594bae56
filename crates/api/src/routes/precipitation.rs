//! Precipitation Routes

use axum::extract::State;
use axum::Json;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::routes::keyed_by_date;
use crate::{ApiError, AppState};

/// Full precipitation history, keyed by date with stringified readings
pub async fn get_precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Map<String, Value>>>, ApiError> {
    let rows = state.repository.all_measurements().await?;

    Ok(Json(keyed_by_date(
        rows.into_iter().map(|m| (m.date, m.prcp)),
    )))
}
