use sea_orm::entity::prelude::*;

/// Google Business listings collected by the data pipelines.
/// `photos` is a JSON array of image URLs.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "google_vendors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub place_id: String,
    pub business_name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f32>,
    pub reviews_count: Option<i32>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub photos: Option<String>,
    pub city: String,
    pub state: String,
    pub created_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
