//! Orders module — CRUD + monthly profit report

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
