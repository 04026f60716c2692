//! Create order_statuses table and seed the lifecycle states

use sea_orm_migration::prelude::*;
use uuid::Uuid;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderStatuses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrderStatuses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OrderStatuses::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_order_statuses_name")
                    .table(OrderStatuses::Table)
                    .col(OrderStatuses::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Seed the lifecycle states; statuses are reference data and the
        // core flows only ever read them.
        for name in ["Created", "InProgress", "Completed", "Cancelled"] {
            let insert = Query::insert()
                .into_table(OrderStatuses::Table)
                .columns([OrderStatuses::Id, OrderStatuses::Name])
                .values_panic([Uuid::new_v4().into(), name.into()])
                .to_owned();
            manager.exec_stmt(insert).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderStatuses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum OrderStatuses {
    Table,
    Id,
    Name,
}
