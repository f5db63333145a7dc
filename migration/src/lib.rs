pub use sea_orm_migration::prelude::*;

mod m20251016_000001_user;
mod m20251016_000002_planet;
mod m20251016_000003_person;
mod m20251016_000004_favorites;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251016_000001_user::Migration),
            Box::new(m20251016_000002_planet::Migration),
            Box::new(m20251016_000003_person::Migration),
            Box::new(m20251016_000004_favorites::Migration),
        ]
    }
}
