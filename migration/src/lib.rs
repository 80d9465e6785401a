pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_clubs_table;
mod m20260101_000002_create_stadiums_table;
mod m20260101_000003_create_matches_table;
mod m20260102_000004_add_match_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_clubs_table::Migration),
            Box::new(m20260101_000002_create_stadiums_table::Migration),
            Box::new(m20260101_000003_create_matches_table::Migration),
            Box::new(m20260102_000004_add_match_lookup_indexes::Migration),
        ]
    }
}
