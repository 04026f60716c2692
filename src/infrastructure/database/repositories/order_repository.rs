//! SeaORM implementation of OrderRepository

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::domain::{
    DomainError, DomainResult, MonthlyProfit, NewOrder, OrderDetail, OrderItemDetail,
    OrderRepository, OrderSummary,
};
use crate::infrastructure::database::entities::{order, order_item, order_status, product, service};

/// Status assigned to every freshly created order. Seeded by the
/// order_statuses migration; creation fails if it is missing.
const CREATED_STATUS: &str = "Created";

/// Status selecting orders for the monthly profit report.
const COMPLETED_STATUS: &str = "Completed";

// ── Conversion helpers ──────────────────────────────────────────

/// Prices are stored in the smallest currency unit; views carry two
/// fractional digits.
fn cents(amount: i64) -> Decimal {
    Decimal::new(amount, 2)
}

/// A row referencing a catalog/status entry that no longer exists is a
/// broken foreign key, not a client error.
fn broken_reference(what: &str, id: Uuid) -> DomainError {
    DomainError::Database(sea_orm::DbErr::Custom(format!(
        "dangling reference: {} {}",
        what, id
    )))
}

// ── SeaOrmOrderRepository ───────────────────────────────────────

pub struct SeaOrmOrderRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Per-order (line count, cost, price) in cents for the given orders.
    async fn item_totals(
        &self,
        order_ids: &[Uuid],
    ) -> DomainResult<HashMap<Uuid, (u64, i64, i64)>> {
        let rows = order_item::Entity::find()
            .filter(order_item::Column::OrderId.is_in(order_ids.iter().copied()))
            .find_also_related(product::Entity)
            .all(&self.db)
            .await?;

        let mut totals: HashMap<Uuid, (u64, i64, i64)> = HashMap::new();
        for (item, product) in rows {
            let product = product.ok_or_else(|| broken_reference("product", item.product_id))?;
            let entry = totals.entry(item.order_id).or_default();
            entry.0 += 1;
            entry.1 += item.quantity as i64 * product.unit_cost;
            entry.2 += item.quantity as i64 * product.unit_price;
        }
        Ok(totals)
    }

    /// Summaries for all orders, optionally filtered by status name,
    /// newest first. Totals are computed from current catalog prices.
    async fn summaries(&self, status_name: Option<&str>) -> DomainResult<Vec<OrderSummary>> {
        let mut query = order::Entity::find()
            .find_also_related(order_status::Entity)
            .order_by_desc(order::Column::CreatedAt);

        if let Some(name) = status_name {
            query = query.filter(order_status::Column::Name.eq(name));
        }

        let orders = query.all(&self.db).await?;

        let ids: Vec<Uuid> = orders.iter().map(|(o, _)| o.id).collect();
        let totals = self.item_totals(&ids).await?;

        orders
            .into_iter()
            .map(|(o, status)| {
                let status = status.ok_or_else(|| broken_reference("status", o.status_id))?;
                let (item_count, cost, price) = totals.get(&o.id).copied().unwrap_or_default();
                Ok(OrderSummary {
                    id: o.id,
                    reseller_id: o.reseller_id,
                    customer_id: o.customer_id,
                    status_id: status.id,
                    status_name: status.name,
                    item_count,
                    total_cost: cents(cost),
                    total_price: cents(price),
                    created_at: o.created_at,
                })
            })
            .collect()
    }
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn find_all(&self) -> DomainResult<Vec<OrderSummary>> {
        self.summaries(None).await
    }

    async fn find_by_status(&self, status_name: &str) -> DomainResult<Vec<OrderSummary>> {
        self.summaries(Some(status_name)).await
    }

    async fn find_by_id(&self, order_id: Uuid) -> DomainResult<Option<OrderDetail>> {
        let Some((o, status)) = order::Entity::find_by_id(order_id)
            .find_also_related(order_status::Entity)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };
        let status = status.ok_or_else(|| broken_reference("status", o.status_id))?;

        let rows = order_item::Entity::find()
            .filter(order_item::Column::OrderId.eq(order_id))
            .find_also_related(product::Entity)
            .all(&self.db)
            .await?;

        let service_ids: Vec<Uuid> = rows.iter().map(|(i, _)| i.service_id).collect();
        let service_names: HashMap<Uuid, String> = service::Entity::find()
            .filter(service::Column::Id.is_in(service_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect();

        let mut items = Vec::with_capacity(rows.len());
        let mut total_cost = 0i64;
        let mut total_price = 0i64;

        for (item, product) in rows {
            let product = product.ok_or_else(|| broken_reference("product", item.product_id))?;
            let service_name = service_names
                .get(&item.service_id)
                .cloned()
                .ok_or_else(|| broken_reference("service", item.service_id))?;

            let item_cost = item.quantity as i64 * product.unit_cost;
            let item_price = item.quantity as i64 * product.unit_price;
            total_cost += item_cost;
            total_price += item_price;

            items.push(OrderItemDetail {
                id: item.id,
                order_id: item.order_id,
                service_id: item.service_id,
                service_name,
                product_id: item.product_id,
                product_name: product.name,
                unit_cost: cents(product.unit_cost),
                unit_price: cents(product.unit_price),
                total_cost: cents(item_cost),
                total_price: cents(item_price),
                quantity: item.quantity,
            });
        }

        Ok(Some(OrderDetail {
            id: o.id,
            reseller_id: o.reseller_id,
            customer_id: o.customer_id,
            status_id: status.id,
            status_name: status.name,
            item_count: items.len() as u64,
            total_cost: cents(total_cost),
            total_price: cents(total_price),
            created_at: o.created_at,
            items,
        }))
    }

    async fn update_status(
        &self,
        order_id: Uuid,
        status_name: &str,
    ) -> DomainResult<OrderSummary> {
        let status = order_status::Entity::find()
            .filter(order_status::Column::Name.eq(status_name))
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "OrderStatus",
                field: "name",
                value: status_name.to_string(),
            })?;

        let o = order::Entity::find_by_id(order_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Order",
                field: "id",
                value: order_id.to_string(),
            })?;

        let mut active: order::ActiveModel = o.into();
        active.status_id = Set(status.id);
        active.update(&self.db).await?;

        let detail = self
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| broken_reference("order", order_id))?;
        Ok(detail.summary())
    }

    async fn status_exists(&self, status_name: &str) -> DomainResult<bool> {
        let status = order_status::Entity::find()
            .filter(order_status::Column::Name.eq(status_name))
            .one(&self.db)
            .await?;
        Ok(status.is_some())
    }

    async fn product_exists(&self, product_id: Uuid) -> DomainResult<bool> {
        let product = product::Entity::find_by_id(product_id).one(&self.db).await?;
        Ok(product.is_some())
    }

    async fn service_exists(&self, service_id: Uuid) -> DomainResult<bool> {
        let service = service::Entity::find_by_id(service_id).one(&self.db).await?;
        Ok(service.is_some())
    }

    async fn create(&self, new_order: NewOrder) -> DomainResult<OrderDetail> {
        let status = order_status::Entity::find()
            .filter(order_status::Column::Name.eq(CREATED_STATUS))
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                DomainError::Validation(format!(
                    "order status \"{}\" is not configured",
                    CREATED_STATUS
                ))
            })?;

        let order_id = Uuid::new_v4();
        let created_at = Utc::now();

        // Order row and all item rows commit together
        let txn = self.db.begin().await?;

        order::ActiveModel {
            id: Set(order_id),
            reseller_id: Set(new_order.reseller_id),
            customer_id: Set(new_order.customer_id),
            status_id: Set(status.id),
            created_at: Set(created_at),
        }
        .insert(&txn)
        .await?;

        for item in &new_order.items {
            order_item::ActiveModel {
                id: Set(Uuid::new_v4()),
                order_id: Set(order_id),
                service_id: Set(item.service_id),
                product_id: Set(item.product_id),
                quantity: Set(item.quantity),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        self.find_by_id(order_id)
            .await?
            .ok_or_else(|| broken_reference("order", order_id))
    }

    async fn monthly_profit(&self) -> DomainResult<Vec<MonthlyProfit>> {
        let orders = order::Entity::find()
            .find_also_related(order_status::Entity)
            .filter(order_status::Column::Name.eq(COMPLETED_STATUS))
            .all(&self.db)
            .await?;

        let ids: Vec<Uuid> = orders.iter().map(|(o, _)| o.id).collect();
        let totals = self.item_totals(&ids).await?;

        // BTreeMap keeps the (year, month) groups ascending and unique
        let mut groups: BTreeMap<(i32, u32), (u64, i64, i64)> = BTreeMap::new();
        for (o, _) in orders {
            let (_, cost, price) = totals.get(&o.id).copied().unwrap_or_default();
            let entry = groups
                .entry((o.created_at.year(), o.created_at.month()))
                .or_default();
            entry.0 += 1;
            entry.1 += cost;
            entry.2 += price;
        }

        Ok(groups
            .into_iter()
            .map(|((year, month), (order_count, cost, price))| MonthlyProfit {
                year,
                month,
                order_count,
                total_cost: cents(cost),
                total_price: cents(price),
            })
            .collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────
