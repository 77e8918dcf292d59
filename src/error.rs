//! # Centralized Error Handling
//!
//! This module provides a unified error handling system for the application.
//! It centralizes error logging and HTTP response generation so handlers can
//! propagate failures with `?` instead of building responses by hand.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Central application error type.
///
/// The service performs no I/O beyond a host-name lookup, so the taxonomy is
/// small. _Lookup errors are logged automatically when converted into a
/// response._
#[derive(Error, Debug)]
pub enum AppError {
    #[error("host name lookup error")]
    Hostname(#[from] std::io::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Hostname(e) = &self {
            error!(?e, "Host name lookup failed");
        }

        let (status, message) = match self {
            AppError::Hostname(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Host name lookup failed"),
        };

        let body = Json(ErrorBody { message });
        (status, body).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
