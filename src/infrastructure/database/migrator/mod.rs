//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_order_statuses;
mod m20240301_000002_create_products;
mod m20240301_000003_create_services;
mod m20240301_000004_create_orders;
mod m20240301_000005_create_order_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_order_statuses::Migration),
            Box::new(m20240301_000002_create_products::Migration),
            Box::new(m20240301_000003_create_services::Migration),
            Box::new(m20240301_000004_create_orders::Migration),
            Box::new(m20240301_000005_create_order_items::Migration),
        ]
    }
}
