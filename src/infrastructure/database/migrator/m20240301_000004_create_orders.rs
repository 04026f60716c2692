//! Create orders table

use sea_orm_migration::prelude::*;

use super::m20240301_000001_create_order_statuses::OrderStatuses;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Orders::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Orders::ResellerId).uuid().not_null())
                    .col(ColumnDef::new(Orders::CustomerId).uuid().not_null())
                    .col(ColumnDef::new(Orders::StatusId).uuid().not_null())
                    .col(
                        ColumnDef::new(Orders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_status")
                            .from(Orders::Table, Orders::StatusId)
                            .to(OrderStatuses::Table, OrderStatuses::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Listings sort newest-first; status filtering joins through this
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_status_id")
                    .table(Orders::Table)
                    .col(Orders::StatusId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_created_at")
                    .table(Orders::Table)
                    .col(Orders::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Orders {
    Table,
    Id,
    ResellerId,
    CustomerId,
    StatusId,
    CreatedAt,
}
