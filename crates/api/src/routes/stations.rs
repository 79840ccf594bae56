//! Station Routes

use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::{ApiError, AppState};
use storage::Station;

/// Every station as a full record with native JSON types
pub async fn get_stations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Station>>, ApiError> {
    let stations = state.repository.all_stations().await?;
    Ok(Json(stations))
}
