use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Wire shape for error responses: `{"success": false, "message": "..."}`.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

/// Application error taxonomy.
///
/// Every error the core pipeline can produce maps onto one of three cases,
/// which the boundary layer translates into HTTP status codes:
///
/// - [`AppError::Validation`] - 400, an IP in the batch is not valid/resolvable
/// - [`AppError::StoreUnavailable`] - 403, the cache store could not be read
///   for the administrative dump
/// - [`AppError::Internal`] - 500, anything else
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{ip} is not a valid IP address")]
    Validation { ip: String },

    #[error("{message}")]
    StoreUnavailable { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn validation(ip: impl Into<String>) -> Self {
        Self::Validation { ip: ip.into() }
    }

    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::StoreUnavailable { .. } => StatusCode::FORBIDDEN,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();
        tracing::error!("{}", message);

        let body = ErrorBody {
            success: false,
            message,
        };

        (status, Json(body)).into_response()
    }
}
