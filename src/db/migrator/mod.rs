use sea_orm_migration::prelude::*;

mod m20250601_initial;
mod m20250612_add_vendor_cache;
mod m20250703_vendor_cache_unique_tuple;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_initial::Migration),
            Box::new(m20250612_add_vendor_cache::Migration),
            Box::new(m20250703_vendor_cache_unique_tuple::Migration),
        ]
    }
}
