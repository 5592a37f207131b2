//! Vendor listing shapes.
//!
//! Each upstream source guarantees a different set of fields, so listings
//! are modeled as a tagged union with one variant per source. Everything
//! that leaves the service (API responses, cache rows) goes through the
//! common [`SearchResult`] projection instead of the raw variants.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub value: f32,
    pub votes_count: i32,
    pub rating_type: String,
}

impl Rating {
    #[must_use]
    pub fn max5(value: f32, votes_count: i32) -> Self {
        Self {
            value,
            votes_count,
            rating_type: "Max5".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorSource {
    Instagram,
    Google,
    Database,
}

impl VendorSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Google => "google",
            Self::Database => "database",
        }
    }
}

/// A vendor profile collected from Instagram.
#[derive(Debug, Clone, PartialEq)]
pub struct InstagramListing {
    pub id: i32,
    pub instagram_handle: String,
    pub business_name: Option<String>,
    pub bio: Option<String>,
    pub follower_count: Option<i32>,
    pub profile_image_url: Option<String>,
    pub instagram_url: Option<String>,
    pub phone: Option<String>,
    pub city: String,
    pub state: String,
}

/// A Google Maps business listing, either freshly fetched from the
/// provider or previously collected into the `google_vendors` table.
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleListing {
    pub place_id: String,
    pub business_name: String,
    pub description: Option<String>,
    pub rating: Option<Rating>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub photos: Vec<String>,
    pub city: String,
    pub state: String,
}

/// A curated row from the `vendors` directory table.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseListing {
    pub id: i32,
    pub business_name: String,
    pub category: String,
    pub description: Option<String>,
    pub rating: Option<f32>,
    pub reviews_count: Option<i32>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VendorListing {
    Instagram(InstagramListing),
    Google(GoogleListing),
    Database(DatabaseListing),
}

impl VendorListing {
    #[must_use]
    pub const fn source(&self) -> VendorSource {
        match self {
            Self::Instagram(_) => VendorSource::Instagram,
            Self::Google(_) => VendorSource::Google,
            Self::Database(_) => VendorSource::Database,
        }
    }

    /// Projects the source-specific listing into the common view served
    /// to callers and stored in the cache.
    #[must_use]
    pub fn into_search_result(self) -> SearchResult {
        match self {
            Self::Instagram(v) => {
                let title = v
                    .business_name
                    .unwrap_or_else(|| v.instagram_handle.clone());
                let url = v.instagram_url.unwrap_or_else(|| {
                    format!("https://instagram.com/{}", v.instagram_handle)
                });
                let images = v.profile_image_url.clone().into_iter().collect();

                SearchResult {
                    title,
                    place_id: format!("instagram_{}", v.id),
                    description: Some(
                        v.bio
                            .unwrap_or_else(|| "Wedding vendor on Instagram".to_string()),
                    ),
                    rating: None,
                    phone: v.phone,
                    address: Some(format!("{}, {}", v.city, v.state)),
                    url: Some(url),
                    main_image: v.profile_image_url,
                    images,
                    city: v.city,
                    state: v.state,
                    vendor_source: VendorSource::Instagram,
                }
            }
            Self::Google(v) => SearchResult {
                title: v.business_name,
                place_id: v.place_id,
                description: v.description.or_else(|| v.address.clone()),
                rating: v.rating,
                phone: v.phone,
                address: v.address,
                url: v.website,
                main_image: v.logo_url,
                images: v.photos,
                city: v.city,
                state: v.state,
                vendor_source: VendorSource::Google,
            },
            Self::Database(v) => {
                let description = v.description.unwrap_or_else(|| {
                    format!("{} in {}, {}", v.category, v.city, v.state)
                });

                SearchResult {
                    title: v.business_name,
                    place_id: format!("vendor_{}", v.id),
                    description: Some(description),
                    rating: v
                        .rating
                        .map(|value| Rating::max5(value, v.reviews_count.unwrap_or(0))),
                    phone: v.phone,
                    address: v.address,
                    url: v.website,
                    main_image: None,
                    images: Vec::new(),
                    city: v.city,
                    state: v.state,
                    vendor_source: VendorSource::Database,
                }
            }
        }
    }
}

/// The common vendor view returned from every search path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub place_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub city: String,
    pub state: String,
    pub vendor_source: VendorSource,
}
