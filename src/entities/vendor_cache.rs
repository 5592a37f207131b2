use sea_orm::entity::prelude::*;

/// One cached provider search per (category, city, state, subcategory)
/// tuple. Key columns are stored lower-cased; a search without a
/// subcategory stores the empty string so the unique index still applies
/// (SQLite treats NULLs as distinct).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vendor_cache")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category: String,
    pub city: String,
    pub state: String,
    pub subcategory: String,
    pub location_code: i32,
    #[sea_orm(column_type = "Text")]
    pub search_results: String,
    pub created_at: String,
    pub expires_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
