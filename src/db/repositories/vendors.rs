use crate::entities::{google_vendors, instagram_vendors, prelude::*, vendors};
use crate::models::{
    DatabaseListing, GoogleListing, InstagramListing, Rating, SearchResult, VendorListing,
};
use anyhow::Result;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Per-source cap matching what one directory search page can show.
const SOURCE_LIMIT: u64 = 20;

pub struct VendorRepository {
    conn: DatabaseConnection,
}

impl VendorRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Searches collected Instagram profiles. With a canonical category the
    /// match is exact; otherwise the keyword is matched against the bio and
    /// business name.
    pub async fn search_instagram(
        &self,
        category: Option<&str>,
        keyword: &str,
        city: &str,
        state: &str,
    ) -> Result<Vec<SearchResult>> {
        let mut query = InstagramVendors::find();

        query = if let Some(cat) = category {
            query.filter(instagram_vendors::Column::Category.eq(cat))
        } else {
            query.filter(
                Condition::any()
                    .add(instagram_vendors::Column::Bio.contains(keyword))
                    .add(instagram_vendors::Column::BusinessName.contains(keyword)),
            )
        };

        let rows = query
            .filter(instagram_vendors::Column::City.contains(city))
            .filter(instagram_vendors::Column::State.contains(state))
            .limit(SOURCE_LIMIT)
            .all(&self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|m| {
                VendorListing::Instagram(InstagramListing {
                    id: m.id,
                    instagram_handle: m.instagram_handle,
                    business_name: m.business_name,
                    bio: m.bio,
                    follower_count: m.follower_count,
                    profile_image_url: m.profile_image_url,
                    instagram_url: m.instagram_url,
                    phone: m.phone,
                    city: m.city,
                    state: m.state,
                })
                .into_search_result()
            })
            .collect())
    }

    /// Searches the curated vendors table. Only approved rows are served.
    pub async fn search_approved(
        &self,
        category: Option<&str>,
        keyword: &str,
        city: &str,
        state: &str,
    ) -> Result<Vec<SearchResult>> {
        let mut query = Vendors::find().filter(vendors::Column::Status.eq("approved"));

        query = if let Some(cat) = category {
            query.filter(vendors::Column::Category.eq(cat))
        } else {
            query.filter(
                Condition::any()
                    .add(vendors::Column::BusinessName.contains(keyword))
                    .add(vendors::Column::Description.contains(keyword))
                    .add(vendors::Column::Category.contains(keyword)),
            )
        };

        let rows = query
            .filter(vendors::Column::City.contains(city))
            .filter(vendors::Column::State.contains(state))
            .limit(SOURCE_LIMIT)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::approved_row_to_result).collect())
    }

    /// Searches previously collected Google Business rows.
    pub async fn search_google(
        &self,
        category: Option<&str>,
        keyword: &str,
        city: &str,
        state: &str,
    ) -> Result<Vec<SearchResult>> {
        let mut query = GoogleVendors::find();

        query = if let Some(cat) = category {
            query.filter(google_vendors::Column::Category.eq(cat))
        } else {
            query.filter(
                Condition::any()
                    .add(google_vendors::Column::BusinessName.contains(keyword))
                    .add(google_vendors::Column::Description.contains(keyword))
                    .add(google_vendors::Column::Category.contains(keyword)),
            )
        };

        let rows = query
            .filter(google_vendors::Column::City.contains(city))
            .filter(google_vendors::Column::State.contains(state))
            .limit(SOURCE_LIMIT)
            .all(&self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|m| {
                let photos = m
                    .photos
                    .as_deref()
                    .and_then(|p| serde_json::from_str::<Vec<String>>(p).ok())
                    .unwrap_or_default();

                VendorListing::Google(GoogleListing {
                    place_id: m.place_id,
                    business_name: m.business_name,
                    description: m.description,
                    rating: m
                        .rating
                        .map(|v| Rating::max5(v, m.reviews_count.unwrap_or(0))),
                    phone: m.phone,
                    address: m.address,
                    website: m.website,
                    logo_url: m.logo_url,
                    photos,
                    city: m.city,
                    state: m.state,
                })
                .into_search_result()
            })
            .collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<vendors::Model>> {
        Ok(Vendors::find_by_id(id).one(&self.conn).await?)
    }

    pub async fn list_approved(
        &self,
        category: Option<&str>,
        city: Option<&str>,
        state: Option<&str>,
        limit: u64,
    ) -> Result<Vec<vendors::Model>> {
        let mut query = Vendors::find().filter(vendors::Column::Status.eq("approved"));

        if let Some(cat) = category {
            query = query.filter(vendors::Column::Category.eq(cat));
        }
        if let Some(city) = city {
            query = query.filter(vendors::Column::City.contains(city));
        }
        if let Some(state) = state {
            query = query.filter(vendors::Column::State.contains(state));
        }

        Ok(query
            .order_by_asc(vendors::Column::BusinessName)
            .limit(limit)
            .all(&self.conn)
            .await?)
    }

    pub async fn counts(&self) -> Result<(u64, u64, u64)> {
        let vendors = Vendors::find().count(&self.conn).await?;
        let instagram = InstagramVendors::find().count(&self.conn).await?;
        let google = GoogleVendors::find().count(&self.conn).await?;
        Ok((vendors, instagram, google))
    }

    fn approved_row_to_result(m: vendors::Model) -> SearchResult {
        VendorListing::Database(DatabaseListing {
            id: m.id,
            business_name: m.business_name,
            category: m.category,
            description: m.description,
            rating: m.rating,
            reviews_count: m.reviews_count,
            phone: m.phone,
            address: m.address,
            website: m.website,
            city: m.city,
            state: m.state,
        })
        .into_search_result()
    }
}
