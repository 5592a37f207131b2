use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, SystemStatus};

pub async fn get_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SystemStatus>>, ApiError> {
    let (vendors, instagram_vendors, google_vendors) = state.store().vendor_counts().await?;
    let cache_entries = state.store().cache_entry_count().await?;

    Ok(Json(ApiResponse::success(SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.start_time.elapsed().as_secs(),
        vendors,
        instagram_vendors,
        google_vendors,
        cache_entries,
    })))
}
