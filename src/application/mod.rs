//! Application layer: business rules gating mutations.

pub mod services;

pub use services::OrderService;
