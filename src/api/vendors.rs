use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, VendorDto, VendorListQuery};

const DEFAULT_LIST_LIMIT: u64 = 50;

pub async fn list_vendors(
    State(state): State<Arc<AppState>>,
    Query(query): Query<VendorListQuery>,
) -> Result<Json<ApiResponse<Vec<VendorDto>>>, ApiError> {
    let vendors = state
        .store()
        .list_vendors(
            query.category.as_deref(),
            query.city.as_deref(),
            query.state.as_deref(),
            query.limit.unwrap_or(DEFAULT_LIST_LIMIT),
        )
        .await?;

    Ok(Json(ApiResponse::success(
        vendors.into_iter().map(VendorDto::from).collect(),
    )))
}

pub async fn get_vendor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<VendorDto>>, ApiError> {
    let vendor = state
        .store()
        .get_vendor(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Vendor", id))?;

    Ok(Json(ApiResponse::success(VendorDto::from(vendor))))
}
