use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

use super::{
    ApiError, ApiResponse, AppState, CityDto, DirectoryQuery, SearchRequest, SearchResponseDto,
    StateDto,
};
use crate::locations;
use crate::models::SearchResult;

/// Provider search through the location-scoped cache.
pub async fn search_vendors(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<ApiResponse<SearchResponseDto>>, ApiError> {
    if request.keyword.trim().is_empty() || request.location.trim().is_empty() {
        return Err(ApiError::validation(
            "Missing required parameters: keyword and location",
        ));
    }

    let (results, source) = state
        .search_service()
        .search(
            &request.keyword,
            &request.location,
            request.subcategory.as_deref(),
        )
        .await?;

    Ok(Json(ApiResponse::success(SearchResponseDto {
        total_results: results.len(),
        results,
        source,
    })))
}

/// Local search across the collected vendor tables; never calls the
/// provider.
pub async fn search_directory(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DirectoryQuery>,
) -> Result<Json<ApiResponse<Vec<SearchResult>>>, ApiError> {
    if query.keyword.trim().is_empty() || query.location.trim().is_empty() {
        return Err(ApiError::validation(
            "Missing required parameters: keyword and location",
        ));
    }

    let results = state
        .directory_service()
        .search(&query.keyword, &query.location)
        .await?;

    Ok(Json(ApiResponse::success(results)))
}

/// The static state/city table, for location pickers.
pub async fn list_locations() -> Json<ApiResponse<Vec<StateDto>>> {
    let states = locations::US_LOCATIONS
        .iter()
        .map(|s| StateDto {
            name: s.name,
            abbreviation: s.abbreviation,
            cities: s
                .cities
                .iter()
                .map(|c| CityDto {
                    name: c.name,
                    location_code: c.code,
                })
                .collect(),
        })
        .collect();

    Json(ApiResponse::success(states))
}
