use std::env;

use crate::utils::constant::{DEFAULT_ENVIRONMENT, ENVIRONMENT_VAR};

/// Reads the deployment environment from the process environment.
///
/// Returns the value of [`ENVIRONMENT_VAR`], or [`DEFAULT_ENVIRONMENT`] when
/// the variable is unset or empty. Read on every call, so a change to the
/// variable is visible on the next request.
pub fn environment() -> String {
    match env::var(ENVIRONMENT_VAR) {
        Ok(value) if !value.is_empty() => value,
        _ => DEFAULT_ENVIRONMENT.to_string(),
    }
}
