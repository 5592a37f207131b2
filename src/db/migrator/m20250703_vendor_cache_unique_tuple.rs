use sea_orm_migration::prelude::*;

/// Rebuilds the cache tuple index as UNIQUE including subcategory.
/// Without subcategory in the key, subcategory-scoped searches collided
/// with the plain category row; duplicates are removed first so the
/// unique index can be created.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        conn.execute_unprepared(
            "DELETE FROM vendor_cache WHERE rowid NOT IN (SELECT MIN(rowid) FROM vendor_cache GROUP BY category, city, state, subcategory)",
        )
        .await?;

        conn.execute_unprepared("DROP INDEX IF EXISTS idx_vendor_cache_tuple")
            .await?;

        conn.execute_unprepared(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_vendor_cache_tuple_unique ON vendor_cache(category, city, state, subcategory)",
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        conn.execute_unprepared("DROP INDEX IF EXISTS idx_vendor_cache_tuple_unique")
            .await?;

        conn.execute_unprepared(
            "CREATE INDEX IF NOT EXISTS idx_vendor_cache_tuple ON vendor_cache(category, city, state, subcategory)",
        )
        .await?;

        Ok(())
    }
}
