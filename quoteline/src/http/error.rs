use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quoteline_core::QuotelineError;
use serde_json::json;

/// An error rendered to clients as `{"detail": ...}` with a status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    /// Build from a status code and detail message.
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// Map a chart-series failure to its response.
    #[must_use]
    pub fn from_series(symbol: &str, err: &QuotelineError) -> Self {
        match err {
            QuotelineError::InvalidPeriod { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "Invalid period")
            }
            QuotelineError::NoDataFound { .. } => Self::new(
                StatusCode::NOT_FOUND,
                format!("No data found for symbol {symbol}"),
            ),
            other => Self::new(
                StatusCode::BAD_REQUEST,
                format!("Error fetching data for {symbol}: {}", other.message()),
            ),
        }
    }

    /// Map a current-price failure to its response; every kind is a 400.
    #[must_use]
    pub fn from_price(symbol: &str, err: &QuotelineError) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("Error fetching current price for {symbol}: {}", err.message()),
        )
    }

    /// Map a malformed query string (e.g. a repeated `period`) to a 400.
    #[must_use]
    pub fn from_query_rejection(rejection: &QueryRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }

    /// Response status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Client-facing detail message.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}
