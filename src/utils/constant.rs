//! # Application Constants
//!
//! This module defines the fixed values used throughout the Hostinfo service:
//! the response banner, the recognized environment variable, and network
//! defaults.

/// Banner returned in the `message` field of every status response.
pub const STATUS_MESSAGE: &str = "Kubernetes Microservice Running";

/// Name of the environment variable controlling the `environment` field.
pub const ENVIRONMENT_VAR: &str = "ENV";

/// Value reported when [`ENVIRONMENT_VAR`] is unset or empty.
pub const DEFAULT_ENVIRONMENT: &str = "dev";

/// Port the server listens on when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;
