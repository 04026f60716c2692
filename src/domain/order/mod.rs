//! Order aggregate: read views, creation inputs and the repository contract.

pub mod model;
pub mod repository;

pub use model::{
    MonthlyProfit, NewOrder, NewOrderItem, OrderDetail, OrderItemDetail, OrderSummary,
};
pub use repository::OrderRepository;
