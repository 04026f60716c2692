//! Order REST API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::dto::{
    CreateOrderRequest, MonthlyProfitResponse, OrderDetailResponse, OrderSummaryResponse,
    UpdateStatusParams,
};
use crate::interfaces::http::common::{ApiError, ErrorBody, ValidatedJson};
use crate::interfaces::http::router::AppState;

#[utoipa::path(
    get,
    path = "/orders",
    tag = "Orders",
    responses(
        (status = 200, description = "All orders, newest first", body = Vec<OrderSummaryResponse>)
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderSummaryResponse>>, ApiError> {
    let orders = state.service.get_orders().await?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/orders/{orderId}",
    tag = "Orders",
    params(("orderId" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order detail", body = OrderDetailResponse),
        (status = 404, description = "Order not found", body = ErrorBody)
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> Result<Json<OrderDetailResponse>, ApiError> {
    match state.service.get_order_by_id(order_id).await? {
        Some(detail) => Ok(Json(detail.into())),
        None => Err(ApiError::not_found(format!("Order {} not found", order_id))),
    }
}

#[utoipa::path(
    get,
    path = "/orders/GetByStatus/{statusName}",
    tag = "Orders",
    params(("statusName" = String, Path, description = "Exact status name")),
    responses(
        (status = 200, description = "Orders in the given status (possibly empty)", body = Vec<OrderSummaryResponse>)
    )
)]
pub async fn orders_by_status(
    State(state): State<AppState>,
    Path(status_name): Path<String>,
) -> Result<Json<Vec<OrderSummaryResponse>>, ApiError> {
    let orders = state.service.get_orders_by_status(&status_name).await?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/orders/UpdateStatus/{orderId}",
    tag = "Orders",
    params(
        ("orderId" = Uuid, Path, description = "Order ID"),
        UpdateStatusParams
    ),
    responses(
        (status = 200, description = "Updated order summary", body = OrderSummaryResponse),
        (status = 400, description = "Blank or unknown status name", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody)
    )
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Query(params): Query<UpdateStatusParams>,
) -> Result<Json<OrderSummaryResponse>, ApiError> {
    let summary = state
        .service
        .update_order_status(order_id, &params.status_name)
        .await?;
    Ok(Json(summary.into()))
}

#[utoipa::path(
    post,
    path = "/orders",
    tag = "Orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Created order detail", body = OrderDetailResponse),
        (status = 400, description = "Invalid request", body = ErrorBody)
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderDetailResponse>), ApiError> {
    let detail = state.service.create_order(req.into()).await?;
    Ok((StatusCode::CREATED, Json(detail.into())))
}

#[utoipa::path(
    get,
    path = "/orders/Profit",
    tag = "Orders",
    responses(
        (status = 200, description = "Monthly profit for completed orders, ascending by month", body = Vec<MonthlyProfitResponse>)
    )
)]
pub async fn monthly_profit(
    State(state): State<AppState>,
) -> Result<Json<Vec<MonthlyProfitResponse>>, ApiError> {
    let report = state.service.get_monthly_profit().await?;
    Ok(Json(report.into_iter().map(Into::into).collect()))
}
