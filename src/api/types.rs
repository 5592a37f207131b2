use serde::{Deserialize, Serialize};

use crate::entities::vendors;
use crate::models::SearchResult;
use crate::services::SearchSource;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub keyword: String,
    pub location: String,
    #[serde(default)]
    pub subcategory: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponseDto {
    pub results: Vec<SearchResult>,
    pub total_results: usize,
    pub source: SearchSource,
}

#[derive(Debug, Deserialize)]
pub struct DirectoryQuery {
    pub keyword: String,
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct VendorListQuery {
    pub category: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct VendorDto {
    pub id: i32,
    pub business_name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub rating: Option<f32>,
    pub reviews_count: Option<i32>,
    pub city: String,
    pub state: String,
}

impl From<vendors::Model> for VendorDto {
    fn from(m: vendors::Model) -> Self {
        Self {
            id: m.id,
            business_name: m.business_name,
            category: m.category,
            subcategory: m.subcategory,
            description: m.description,
            phone: m.phone,
            address: m.address,
            website: m.website,
            rating: m.rating,
            reviews_count: m.reviews_count,
            city: m.city,
            state: m.state,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StateDto {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub cities: Vec<CityDto>,
}

#[derive(Debug, Serialize)]
pub struct CityDto {
    pub name: &'static str,
    pub location_code: i32,
}

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: String,
    pub uptime: u64,
    pub vendors: u64,
    pub instagram_vendors: u64,
    pub google_vendors: u64,
    pub cache_entries: u64,
}
