use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;

/// Everything that can go wrong while talking to the market-data provider.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("COINGECKO_API_KEY is not defined in the environment")]
    MissingApiKey,

    /// Never carries the request URL: the API key travels in its query.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("Upstream responded with status {0}")]
    Status(StatusCode),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unexpected data from upstream: {0}")]
    UnexpectedData(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        UpstreamError::Http(e.without_url())
    }
}

impl UpstreamError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, UpstreamError::Status(status) if *status == StatusCode::NOT_FOUND)
    }
}

/// Error returned to API callers. The message is the whole public body;
/// upstream details stay in the server log.
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body for every non-2xx JSON response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
