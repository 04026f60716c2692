//! Order entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order model - one customer purchase with at least one line item
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Order ID (UUID, stored as a fixed-width blob by SQLite)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Reseller who placed the order
    pub reseller_id: Uuid,

    /// Customer the order is for
    pub customer_id: Uuid,

    /// Current lifecycle status
    pub status_id: Uuid,

    /// When the order was created (immutable)
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order_status::Entity",
        from = "Column::StatusId",
        to = "super::order_status::Column::Id"
    )]
    Status,
    #[sea_orm(has_many = "super::order_item::Entity")]
    Items,
}

impl Related<super::order_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Status.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
