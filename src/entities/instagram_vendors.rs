use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "instagram_vendors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub instagram_handle: String,
    pub business_name: Option<String>,
    pub bio: Option<String>,
    pub category: Option<String>,
    pub follower_count: Option<i32>,
    pub profile_image_url: Option<String>,
    pub instagram_url: Option<String>,
    pub phone: Option<String>,
    pub city: String,
    pub state: String,
    pub created_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
