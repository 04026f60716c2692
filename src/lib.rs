//! # Order Management Service
//!
//! Backend for recording orders placed against a catalog of products and
//! services, tracking order status transitions and reporting aggregate
//! monthly profit.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business views, repository contract and errors
//! - **application**: Business rules gating mutations (order validation)
//! - **infrastructure**: External concerns (database, migrations)
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
