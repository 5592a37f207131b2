//! Cache behavior of the vendor search orchestrator, exercised against an
//! in-memory database and a counting stub provider.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sea_orm::ConnectionTrait;
use vendry::clients::dataforseo::{ProviderError, VendorSearchProvider};
use vendry::db::Store;
use vendry::models::{Rating, SearchResult, VendorSource};
use vendry::services::{SearchError, SearchService, SearchSource};

struct StubProvider {
    calls: AtomicUsize,
    results: Vec<SearchResult>,
    failing: bool,
}

impl StubProvider {
    fn returning(results: Vec<SearchResult>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            results,
            failing: false,
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            results: Vec::new(),
            failing: true,
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VendorSearchProvider for StubProvider {
    async fn search(
        &self,
        _keyword: &str,
        _location_code: i32,
        _city: &str,
        _state: &str,
    ) -> Result<Vec<SearchResult>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing {
            return Err(ProviderError::Api {
                status: reqwest::StatusCode::BAD_GATEWAY,
                body: "upstream unavailable".to_string(),
            });
        }

        Ok(self.results.clone())
    }
}

fn sample_results() -> Vec<SearchResult> {
    vec![
        SearchResult {
            title: "Austin Wedding Co".to_string(),
            place_id: "ChIJexample1".to_string(),
            description: Some("Full-service photography studio".to_string()),
            rating: Some(Rating::max5(4.8, 57)),
            phone: Some("(512) 555-0101".to_string()),
            address: Some("100 Congress Ave, Austin, TX".to_string()),
            url: Some("https://austinweddingco.example".to_string()),
            main_image: None,
            images: Vec::new(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            vendor_source: VendorSource::Google,
        },
        SearchResult {
            title: "Lakeside Venue".to_string(),
            place_id: "ChIJexample2".to_string(),
            description: None,
            rating: None,
            phone: None,
            address: None,
            url: None,
            main_image: None,
            images: Vec::new(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            vendor_source: VendorSource::Google,
        },
    ]
}

async fn memory_store() -> Store {
    Store::new("sqlite::memory:")
        .await
        .expect("Failed to open in-memory store")
}

#[tokio::test]
async fn fresh_tuple_fetches_once_and_caches_with_ttl() {
    let store = memory_store().await;
    let stub = StubProvider::returning(sample_results());
    let service = SearchService::new(store.clone(), stub.clone(), 14);

    let (results, source) = service
        .search("Photographer", "Austin, TX", None)
        .await
        .unwrap();

    assert_eq!(source, SearchSource::Live);
    assert_eq!(results, sample_results());
    assert_eq!(stub.call_count(), 1);

    let entry = store
        .get_cache_entry("photographer", "austin", "tx", "")
        .await
        .unwrap()
        .expect("cache row missing after live search");

    assert_eq!(entry.location_code, 1_003_550);

    let created = chrono::DateTime::parse_from_rfc3339(&entry.created_at).unwrap();
    let expires = chrono::DateTime::parse_from_rfc3339(&entry.expires_at).unwrap();
    assert_eq!(expires - created, chrono::Duration::days(14));
}

#[tokio::test]
async fn second_search_within_ttl_is_served_from_cache() {
    let store = memory_store().await;
    let stub = StubProvider::returning(sample_results());
    let service = SearchService::new(store, stub.clone(), 14);

    let (first, first_source) = service
        .search("photographer", "Austin, TX", None)
        .await
        .unwrap();
    let (second, second_source) = service
        .search("photographer", "Austin, TX", None)
        .await
        .unwrap();

    assert_eq!(first_source, SearchSource::Live);
    assert_eq!(second_source, SearchSource::Cache);
    // Round-trip: the cached payload is element-for-element what was written.
    assert_eq!(second, first);
    assert_eq!(stub.call_count(), 1);
}

#[tokio::test]
async fn expired_entry_is_refetched_and_replaced() {
    let store = memory_store().await;
    let stub = StubProvider::returning(sample_results());
    let service = SearchService::new(store.clone(), stub.clone(), 14);

    let stale = vec![SearchResult {
        title: "Closed Down Studio".to_string(),
        place_id: "ChIJstale".to_string(),
        description: None,
        rating: None,
        phone: None,
        address: None,
        url: None,
        main_image: None,
        images: Vec::new(),
        city: "Austin".to_string(),
        state: "TX".to_string(),
        vendor_source: VendorSource::Google,
    }];

    // Seed an already-expired row for the tuple.
    store
        .put_cached_search(
            "photographer",
            "austin",
            "tx",
            "",
            1_003_550,
            &stale,
            chrono::Duration::days(-1),
        )
        .await
        .unwrap();

    let (results, source) = service
        .search("photographer", "Austin, TX", None)
        .await
        .unwrap();

    assert_eq!(source, SearchSource::Live);
    assert_eq!(results, sample_results());
    assert_eq!(stub.call_count(), 1);

    let entry = store
        .get_cache_entry("photographer", "austin", "tx", "")
        .await
        .unwrap()
        .expect("replacement cache row missing");
    assert!(!entry.search_results.contains("Closed Down Studio"));

    let expires = chrono::DateTime::parse_from_rfc3339(&entry.expires_at).unwrap();
    assert!(expires > chrono::Utc::now());
}

#[tokio::test]
async fn cache_write_failure_still_returns_fetched_results() {
    let store = memory_store().await;
    let stub = StubProvider::returning(sample_results());
    let service = SearchService::new(store.clone(), stub.clone(), 14);

    // Make every cache operation fail while the fetch path stays intact.
    store
        .conn
        .execute_unprepared("DROP TABLE vendor_cache")
        .await
        .unwrap();

    let (results, source) = service
        .search("photographer", "Austin, TX", None)
        .await
        .unwrap();

    assert_eq!(source, SearchSource::Live);
    assert_eq!(results, sample_results());
    assert_eq!(stub.call_count(), 1);
}

#[tokio::test]
async fn subcategory_scoped_searches_get_independent_rows() {
    let store = memory_store().await;
    let stub = StubProvider::returning(sample_results());
    let service = SearchService::new(store.clone(), stub.clone(), 14);

    service
        .search("photographer", "Austin, TX", Some("portrait"))
        .await
        .unwrap();
    service
        .search("photographer", "Austin, TX", Some("wedding"))
        .await
        .unwrap();

    assert_eq!(stub.call_count(), 2);
    assert_eq!(store.cache_entry_count().await.unwrap(), 2);

    assert!(store
        .get_cache_entry("photographer", "austin", "tx", "portrait")
        .await
        .unwrap()
        .is_some());
    assert!(store
        .get_cache_entry("photographer", "austin", "tx", "wedding")
        .await
        .unwrap()
        .is_some());

    // And each subcategory is now served from its own row.
    let (_, source) = service
        .search("photographer", "Austin, TX", Some("portrait"))
        .await
        .unwrap();
    assert_eq!(source, SearchSource::Cache);
    assert_eq!(stub.call_count(), 2);
}

#[tokio::test]
async fn unknown_location_fails_before_the_provider_is_called() {
    let store = memory_store().await;
    let stub = StubProvider::returning(sample_results());
    let service = SearchService::new(store, stub.clone(), 14);

    let err = service
        .search("photographer", "Smallville, KS", None)
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::UnknownLocation(_)));
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn malformed_location_is_rejected() {
    let store = memory_store().await;
    let stub = StubProvider::returning(sample_results());
    let service = SearchService::new(store, stub.clone(), 14);

    let err = service
        .search("photographer", "Austin", None)
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::InvalidLocation(_)));
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn provider_failure_surfaces_and_caches_nothing() {
    let store = memory_store().await;
    let stub = StubProvider::failing();
    let service = SearchService::new(store.clone(), stub.clone(), 14);

    let err = service
        .search("photographer", "Austin, TX", None)
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Provider(_)));
    assert_eq!(stub.call_count(), 1);
    assert_eq!(store.cache_entry_count().await.unwrap(), 0);
}

#[tokio::test]
async fn subcategory_folds_into_the_provider_keyword_tuple() {
    let store = memory_store().await;
    let stub = StubProvider::returning(sample_results());
    let service = SearchService::new(store.clone(), stub.clone(), 14);

    service
        .search("Photographer", "Austin, TX", Some(" Portrait "))
        .await
        .unwrap();

    // The tuple is normalized: trimmed and lower-cased.
    assert!(store
        .get_cache_entry("photographer", "austin", "tx", "portrait")
        .await
        .unwrap()
        .is_some());
}
