//! Domain layer: views over orders, the persistence contract and errors.

pub mod error;
pub mod order;

pub use error::{DomainError, DomainResult};
pub use order::{
    MonthlyProfit, NewOrder, NewOrderItem, OrderDetail, OrderItemDetail, OrderRepository,
    OrderSummary,
};
