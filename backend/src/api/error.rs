//! HTTP error payloads.
//!
//! The only modelled failure is a weather lookup for a city absent from the
//! fixture table. [`ApiError`] maps onto an HTTP response here so handlers
//! stay free of transport concerns.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Localised message returned when a city has no weather fixture.
pub const CITY_NOT_FOUND_MESSAGE: &str = "Город не найден";

/// Error envelope returned by the HTTP surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ErrorBody {
    /// Human-readable, localised error message
    #[schema(example = "Город не найден")]
    pub error: String,
}

/// Failures a fixture endpoint can surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The requested entity has no fixture.
    #[error("{message}")]
    NotFound {
        /// Message placed in the error envelope.
        message: String,
    },
}

impl ApiError {
    /// Not-found error for a city missing from the weather fixture table.
    #[must_use]
    pub fn city_not_found() -> Self {
        Self::NotFound {
            message: CITY_NOT_FOUND_MESSAGE.to_owned(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;
