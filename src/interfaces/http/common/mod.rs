//! Shared HTTP plumbing: the error body and the validated-JSON extractor.

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// JSON error body: `{ "error": "<message>" }`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// HTTP-mapped error. Validation failures map to 400, missing orders to
/// 404, everything else (infrastructure) to 500.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(_) => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            DomainError::NotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            DomainError::Database(ref db_err) => {
                error!("Request failed: {}", db_err);
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Internal server error".to_string(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let api: ApiError = DomainError::Validation("bad".to_string()).into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let api: ApiError = DomainError::NotFound {
            entity: "Order",
            field: "id",
            value: "x".to_string(),
        }
        .into();
        assert_eq!(api.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_maps_to_500_without_leaking_detail() {
        let api: ApiError =
            DomainError::Database(sea_orm::DbErr::Custom("secret".to_string())).into();
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!api.message.contains("secret"));
    }
}
