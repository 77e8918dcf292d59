//! # HTTP Request Handlers
//!
//! This module contains all HTTP request handlers for the Hostinfo service.
//!
//! ## Available Handlers
//!
//! - **Status** (`status`) - Host identity and environment report

mod status;

pub use status::*;
