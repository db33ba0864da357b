use sea_orm_migration::prelude::*;

mod m20240912_add_painting_aliases;
mod m20240912_create_paintings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240912_create_paintings::Migration),
            Box::new(m20240912_add_painting_aliases::Migration),
        ]
    }
}
