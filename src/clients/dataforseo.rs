//! DataForSEO Google Maps SERP client.
//!
//! Each live call is metered by the provider, so this client is only
//! reached after the cache has been probed. Credentials are injected at
//! construction; they are never read from the environment at call time.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{GoogleListing, Rating, SearchResult, VendorListing};

const MAPS_LIVE_PATH: &str = "/v3/serp/google/maps/live/advanced";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("DataForSEO credentials are not configured")]
    Configuration,

    #[error("DataForSEO API error: {status} - {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("DataForSEO request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("DataForSEO response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.login.is_empty() && !self.password.is_empty()
    }
}

/// Abstraction over the external business-search provider, so the search
/// orchestrator can be exercised with a stub transport in tests.
#[async_trait]
pub trait VendorSearchProvider: Send + Sync {
    async fn search(
        &self,
        keyword: &str,
        location_code: i32,
        city: &str,
        state: &str,
    ) -> Result<Vec<SearchResult>, ProviderError>;
}

#[derive(Clone)]
pub struct DataForSeoClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
    depth: u32,
}

impl DataForSeoClient {
    pub fn with_shared_client(
        client: Client,
        base_url: impl Into<String>,
        credentials: Credentials,
        depth: u32,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            credentials,
            depth,
        }
    }

    /// Fetches raw Maps listings for a keyword within a resolved location.
    ///
    /// An empty item list is a valid result, not an error.
    pub async fn search_maps(
        &self,
        keyword: &str,
        location_code: i32,
    ) -> Result<Vec<MapsItem>, ProviderError> {
        if !self.credentials.is_configured() {
            return Err(ProviderError::Configuration);
        }

        let url = format!("{}{}", self.base_url, MAPS_LIVE_PATH);
        let body = [MapsQuery {
            keyword,
            location_code,
            language_code: "en",
            device: "desktop",
            os: "windows",
            depth: self.depth,
        }];

        debug!(keyword, location_code, "querying DataForSEO maps endpoint");

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.credentials.login, Some(&self.credentials.password))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }

        let text = response.text().await?;
        let parsed: MapsResponse = serde_json::from_str(&text)?;

        if let Some(cost) = parsed.cost {
            debug!(cost, "DataForSEO call cost");
        }

        Ok(parsed
            .tasks
            .into_iter()
            .flat_map(|t| t.result)
            .flat_map(|r| r.items)
            .collect())
    }
}

#[async_trait]
impl VendorSearchProvider for DataForSeoClient {
    async fn search(
        &self,
        keyword: &str,
        location_code: i32,
        city: &str,
        state: &str,
    ) -> Result<Vec<SearchResult>, ProviderError> {
        let items = self.search_maps(keyword, location_code).await?;

        Ok(items
            .into_iter()
            .filter_map(|item| item_into_listing(item, city, state))
            .map(|listing| VendorListing::Google(listing).into_search_result())
            .collect())
    }
}

#[derive(Debug, Serialize)]
struct MapsQuery<'a> {
    keyword: &'a str,
    location_code: i32,
    language_code: &'a str,
    device: &'a str,
    os: &'a str,
    depth: u32,
}

#[derive(Debug, Deserialize)]
struct MapsResponse {
    #[serde(default)]
    tasks: Vec<MapsTask>,
    cost: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct MapsTask {
    #[serde(default)]
    result: Vec<MapsTaskResult>,
}

#[derive(Debug, Deserialize)]
struct MapsTaskResult {
    #[serde(default)]
    items: Vec<MapsItem>,
}

/// A raw listing as the Maps endpoint returns it. Almost everything is
/// optional; items without a title and place id are dropped.
#[derive(Debug, Deserialize)]
pub struct MapsItem {
    pub title: Option<String>,
    pub place_id: Option<String>,
    pub description: Option<String>,
    pub rating: Option<MapsRating>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub url: Option<String>,
    pub main_image: Option<String>,
    pub logo: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct MapsRating {
    pub value: Option<f32>,
    pub votes_count: Option<i32>,
}

fn item_into_listing(item: MapsItem, city: &str, state: &str) -> Option<GoogleListing> {
    let business_name = item.title?;
    let place_id = item.place_id?;

    let rating = item
        .rating
        .and_then(|r| r.value.map(|v| Rating::max5(v, r.votes_count.unwrap_or(0))));

    Some(GoogleListing {
        place_id,
        business_name,
        description: item.description,
        rating,
        phone: item.phone,
        address: item.address,
        website: item.url,
        logo_url: item.main_image.or(item.logo),
        photos: item.images,
        city: city.to_string(),
        state: state.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VendorSource;

    const SAMPLE_RESPONSE: &str = r#"{
        "cost": 0.002,
        "tasks": [{
            "result": [{
                "items": [
                    {
                        "title": "Austin Wedding Co",
                        "place_id": "ChIJexample1",
                        "rating": {"value": 4.8, "votes_count": 57},
                        "phone": "(512) 555-0101",
                        "address": "100 Congress Ave, Austin, TX",
                        "url": "https://austinweddingco.example"
                    },
                    {
                        "place_id": "ChIJuntitled"
                    }
                ]
            }]
        }]
    }"#;

    #[test]
    fn response_items_flatten_across_tasks() {
        let parsed: MapsResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        let items: Vec<MapsItem> = parsed
            .tasks
            .into_iter()
            .flat_map(|t| t.result)
            .flat_map(|r| r.items)
            .collect();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn untitled_items_are_dropped() {
        let parsed: MapsResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        let listings: Vec<GoogleListing> = parsed
            .tasks
            .into_iter()
            .flat_map(|t| t.result)
            .flat_map(|r| r.items)
            .filter_map(|i| item_into_listing(i, "Austin", "TX"))
            .collect();

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].business_name, "Austin Wedding Co");
        assert_eq!(listings[0].rating.as_ref().unwrap().votes_count, 57);
    }

    #[test]
    fn listing_projects_to_google_result() {
        let parsed: MapsResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        let listing = parsed
            .tasks
            .into_iter()
            .flat_map(|t| t.result)
            .flat_map(|r| r.items)
            .find_map(|i| item_into_listing(i, "Austin", "TX"))
            .unwrap();

        let result = VendorListing::Google(listing).into_search_result();
        assert_eq!(result.vendor_source, VendorSource::Google);
        assert_eq!(result.city, "Austin");
        // No description on the raw item, so the address stands in.
        assert_eq!(
            result.description.as_deref(),
            Some("100 Congress Ave, Austin, TX")
        );
    }

    #[test]
    fn empty_response_is_a_valid_empty_result() {
        let parsed: MapsResponse = serde_json::from_str(r#"{"tasks": []}"#).unwrap();
        assert!(parsed.tasks.is_empty());
    }

    #[test]
    fn query_body_carries_the_structured_fields() {
        let body = [MapsQuery {
            keyword: "portrait photographer",
            location_code: 1_003_550,
            language_code: "en",
            device: "desktop",
            os: "windows",
            depth: 20,
        }];

        let json = serde_json::to_value(body).unwrap();
        assert_eq!(json[0]["keyword"], "portrait photographer");
        assert_eq!(json[0]["location_code"], 1_003_550);
        assert_eq!(json[0]["language_code"], "en");
        assert_eq!(json[0]["device"], "desktop");
        assert_eq!(json[0]["os"], "windows");
        assert_eq!(json[0]["depth"], 20);
    }

    #[test]
    fn blank_credentials_are_not_configured() {
        let creds = Credentials {
            login: String::new(),
            password: "secret".to_string(),
        };
        assert!(!creds.is_configured());

        let creds = Credentials {
            login: "login".to_string(),
            password: "secret".to_string(),
        };
        assert!(creds.is_configured());
    }
}
