use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::models::Enveloped;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    MissingParameter(String),

    #[error("Invalid format")]
    InvalidFormat { available: Vec<String> },

    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    ResolutionFailed(String),

    #[error("{0}")]
    Internal(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingParameter(_)
            | AppError::InvalidFormat { .. }
            | AppError::ResolutionFailed(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::Internal(_) | AppError::HttpClient(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Attaches the endpoint path that failed, for the response body
    pub fn at(self, endpoint: &'static str) -> RouteError {
        RouteError {
            endpoint: Some(endpoint),
            error: self,
        }
    }
}

/// An [`AppError`] raised while serving a particular endpoint
#[derive(Debug)]
pub struct RouteError {
    endpoint: Option<&'static str>,
    error: AppError,
}

impl RouteError {
    pub fn error(&self) -> &AppError {
        &self.error
    }
}

impl From<AppError> for RouteError {
    fn from(error: AppError) -> Self {
        Self {
            endpoint: None,
            error,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    endpoint: Option<&'static str>,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    available_formats: Option<Vec<String>>,
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let status = self.error.status();

        if status.is_server_error() {
            tracing::error!(endpoint = ?self.endpoint, error = %self.error, "Request failed");
        } else {
            tracing::warn!(endpoint = ?self.endpoint, error = %self.error, "Request rejected");
        }

        let message = self.error.to_string();
        let available_formats = match self.error {
            AppError::InvalidFormat { available } => Some(available),
            _ => None,
        };

        let body = Json(Enveloped::new(ErrorBody {
            endpoint: self.endpoint,
            error: message,
            available_formats,
        }));

        (status, body).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        RouteError::from(self).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
