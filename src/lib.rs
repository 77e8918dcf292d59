//! # Hostinfo - Host Identity Microservice
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers
//! - [`models`] - Response payload types
//! - [`utils`] - Utility functions and constants
//! - [`error`] - Centralized error handling

pub mod error;
pub mod handlers;
pub mod models;
pub mod utils;

use axum::{Router, routing::get};

use crate::handlers::status;

/// Creates the Axum router with the application's single route.
///
/// `GET /` returns the host-status payload. Every other path and every other
/// method on `/` falls through to the framework defaults (404 / 405).
///
/// # Returns
///
/// A configured Axum router ready to be served
pub fn app() -> Router {
    Router::new().route("/", get(status))
}
