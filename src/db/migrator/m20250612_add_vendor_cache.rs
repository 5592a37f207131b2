use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VendorCache::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VendorCache::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VendorCache::Category).string().not_null())
                    .col(ColumnDef::new(VendorCache::City).string().not_null())
                    .col(ColumnDef::new(VendorCache::State).string().not_null())
                    .col(
                        ColumnDef::new(VendorCache::Subcategory)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(VendorCache::LocationCode)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VendorCache::SearchResults)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VendorCache::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(VendorCache::ExpiresAt)
                            .timestamp()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vendor_cache_tuple")
                    .table(VendorCache::Table)
                    .col(VendorCache::Category)
                    .col(VendorCache::City)
                    .col(VendorCache::State)
                    .col(VendorCache::Subcategory)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VendorCache::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VendorCache {
    Table,
    Id,
    Category,
    City,
    State,
    Subcategory,
    LocationCode,
    SearchResults,
    CreatedAt,
    ExpiresAt,
}
