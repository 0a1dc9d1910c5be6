use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users;
mod m20250601_000002_create_content_tables;
mod m20250601_000003_create_media;
mod m20250601_000004_create_user_favourites;
mod m20250601_000005_create_notes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users::Migration),
            Box::new(m20250601_000002_create_content_tables::Migration),
            Box::new(m20250601_000003_create_media::Migration),
            Box::new(m20250601_000004_create_user_favourites::Migration),
            Box::new(m20250601_000005_create_notes::Migration),
        ]
    }
}
