use crate::entities::prelude::*;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Schema;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let schema = Schema::new(backend);

        manager
            .create_table(
                schema
                    .create_table_from_entity(Vendors)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(InstagramVendors)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(GoogleVendors)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vendors_category_location")
                    .table(VendorsIden::Table)
                    .col(VendorsIden::Category)
                    .col(VendorsIden::City)
                    .col(VendorsIden::State)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_instagram_vendors_category_location")
                    .table(InstagramVendorsIden::Table)
                    .col(InstagramVendorsIden::Category)
                    .col(InstagramVendorsIden::City)
                    .col(InstagramVendorsIden::State)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_google_vendors_category_location")
                    .table(GoogleVendorsIden::Table)
                    .col(GoogleVendorsIden::Category)
                    .col(GoogleVendorsIden::City)
                    .col(GoogleVendorsIden::State)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GoogleVendorsIden::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(InstagramVendorsIden::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(VendorsIden::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VendorsIden {
    #[sea_orm(iden = "vendors")]
    Table,
    Category,
    City,
    State,
}

#[derive(DeriveIden)]
enum InstagramVendorsIden {
    #[sea_orm(iden = "instagram_vendors")]
    Table,
    Category,
    City,
    State,
}

#[derive(DeriveIden)]
enum GoogleVendorsIden {
    #[sea_orm(iden = "google_vendors")]
    Table,
    Category,
    City,
    State,
}
