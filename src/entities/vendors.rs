use sea_orm::entity::prelude::*;

/// Curated directory vendors. Only rows with status "approved" are served
/// from search.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vendors")]
pub struct Model {
    #[sea_orm(primary_key)]
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
    pub status: String,
    pub created_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
