//! Database entities module

pub mod order;
pub mod order_item;
pub mod order_status;
pub mod product;
pub mod service;

pub use order::Entity as Order;
pub use order_item::Entity as OrderItem;
pub use order_status::Entity as OrderStatus;
pub use product::Entity as Product;
pub use service::Entity as Service;
