use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use models::errors::ModelError;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Errors surfaced to HTTP clients. Bodies are plain text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Serialization(String),
}

impl From<ModelError> for ApiError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Decode(msg) => Self::BadRequest(msg),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => Self::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                warn!(error = %msg, "rejecting undecodable body");
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Serialization(msg) => {
                error!(error = %msg, "response serialization failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}
