//! Local three-source directory search against seeded vendor tables.

use sea_orm::{ActiveModelTrait, Set};
use vendry::db::Store;
use vendry::entities::{google_vendors, instagram_vendors, vendors};
use vendry::models::VendorSource;
use vendry::services::DirectoryService;

async fn memory_store() -> Store {
    Store::new("sqlite::memory:")
        .await
        .expect("Failed to open in-memory store")
}

async fn seed(store: &Store) {
    instagram_vendors::ActiveModel {
        instagram_handle: Set("atxshots".to_string()),
        business_name: Set(Some("ATX Shots".to_string())),
        bio: Set(Some("Austin wedding photography".to_string())),
        category: Set(Some("photographers".to_string())),
        follower_count: Set(Some(8_200)),
        city: Set("Austin".to_string()),
        state: Set("TX".to_string()),
        ..Default::default()
    }
    .insert(&store.conn)
    .await
    .unwrap();

    vendors::ActiveModel {
        business_name: Set("Lone Star Photography".to_string()),
        category: Set("photographers".to_string()),
        description: Set(Some("Documentary-style wedding coverage".to_string())),
        rating: Set(Some(4.6)),
        reviews_count: Set(Some(18)),
        city: Set("Austin".to_string()),
        state: Set("TX".to_string()),
        status: Set("approved".to_string()),
        ..Default::default()
    }
    .insert(&store.conn)
    .await
    .unwrap();

    // Pending rows never surface in search.
    vendors::ActiveModel {
        business_name: Set("Unreviewed Photos LLC".to_string()),
        category: Set("photographers".to_string()),
        city: Set("Austin".to_string()),
        state: Set("TX".to_string()),
        status: Set("pending".to_string()),
        ..Default::default()
    }
    .insert(&store.conn)
    .await
    .unwrap();

    google_vendors::ActiveModel {
        place_id: Set("ChIJgoogle1".to_string()),
        business_name: Set("Capture Austin".to_string()),
        category: Set(Some("photographers".to_string())),
        rating: Set(Some(4.9)),
        reviews_count: Set(Some(102)),
        city: Set("Austin".to_string()),
        state: Set("TX".to_string()),
        ..Default::default()
    }
    .insert(&store.conn)
    .await
    .unwrap();

    // Wrong city, must not match an Austin search.
    google_vendors::ActiveModel {
        place_id: Set("ChIJgoogle2".to_string()),
        business_name: Set("Dallas Lens Co".to_string()),
        category: Set(Some("photographers".to_string())),
        city: Set("Dallas".to_string()),
        state: Set("TX".to_string()),
        ..Default::default()
    }
    .insert(&store.conn)
    .await
    .unwrap();
}

#[tokio::test]
async fn directory_search_merges_sources_in_order() {
    let store = memory_store().await;
    seed(&store).await;

    let service = DirectoryService::new(store);
    let results = service.search("photographer", "Austin, TX").await.unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].vendor_source, VendorSource::Instagram);
    assert_eq!(results[1].vendor_source, VendorSource::Database);
    assert_eq!(results[2].vendor_source, VendorSource::Google);

    assert_eq!(results[0].title, "ATX Shots");
    assert_eq!(results[1].title, "Lone Star Photography");
    assert_eq!(results[2].title, "Capture Austin");
}

#[tokio::test]
async fn keyword_folds_into_canonical_category() {
    let store = memory_store().await;
    seed(&store).await;

    let service = DirectoryService::new(store);

    // None of the seeded names contain "wedding photography", but the
    // keyword maps onto the photographers category.
    let results = service
        .search("wedding photography", "Austin, TX")
        .await
        .unwrap();

    assert_eq!(results.len(), 3);
}

#[tokio::test]
async fn unapproved_and_out_of_town_vendors_are_hidden() {
    let store = memory_store().await;
    seed(&store).await;

    let service = DirectoryService::new(store);
    let results = service.search("photographer", "Austin, TX").await.unwrap();

    assert!(results.iter().all(|r| r.title != "Unreviewed Photos LLC"));
    assert!(results.iter().all(|r| r.title != "Dallas Lens Co"));
}

#[tokio::test]
async fn unmapped_keyword_falls_back_to_substring_match() {
    let store = memory_store().await;
    seed(&store).await;

    let service = DirectoryService::new(store);

    // "Lens" is no canonical category; it should still find the Dallas
    // google row by business name when searching Dallas.
    let results = service.search("Lens", "Dallas, TX").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Dallas Lens Co");
}

#[tokio::test]
async fn database_listing_projection_carries_rating() {
    let store = memory_store().await;
    seed(&store).await;

    let service = DirectoryService::new(store);
    let results = service.search("photographer", "Austin, TX").await.unwrap();

    let db_result = results
        .iter()
        .find(|r| r.vendor_source == VendorSource::Database)
        .unwrap();

    let rating = db_result.rating.as_ref().expect("rating");
    assert!((rating.value - 4.6).abs() < f32::EPSILON);
    assert_eq!(rating.votes_count, 18);
    assert!(db_result.place_id.starts_with("vendor_"));
}
