//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::OrderService;
use crate::interfaces::http::common::ErrorBody;
use crate::interfaces::http::modules::{health, orders};

/// Shared state for all routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<OrderService>,
    pub db: DatabaseConnection,
    pub started_at: Arc<Instant>,
}

impl AppState {
    pub fn new(service: Arc<OrderService>, db: DatabaseConnection) -> Self {
        Self {
            service,
            db,
            started_at: Arc::new(Instant::now()),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Orders
        orders::list_orders,
        orders::get_order,
        orders::orders_by_status,
        orders::update_order_status,
        orders::create_order,
        orders::monthly_profit,
    ),
    components(schemas(
        ErrorBody,
        health::HealthResponse,
        health::ComponentHealth,
        orders::OrderSummaryResponse,
        orders::OrderDetailResponse,
        orders::OrderItemResponse,
        orders::MonthlyProfitResponse,
        orders::CreateOrderRequest,
        orders::CreateOrderItemRequest,
    )),
    tags(
        (name = "Orders", description = "Order management endpoints"),
        (name = "Health", description = "Service health")
    ),
    info(
        title = "Order Service API",
        description = "Order management backend: orders, status transitions and monthly profit reporting"
    )
)]
struct ApiDoc;

/// Create the REST API router.
pub fn create_api_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .route("/orders/Profit", get(orders::monthly_profit))
        .route(
            "/orders/GetByStatus/{statusName}",
            get(orders::orders_by_status),
        )
        .route(
            "/orders/UpdateStatus/{orderId}",
            post(orders::update_order_status),
        )
        .route("/orders/{orderId}", get(orders::get_order))
        .route("/health", get(health::health_check))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// ── Tests ──────────────────────────────────────────────────────
