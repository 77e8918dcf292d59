//! # Status Handler
//!
//! Implements the single endpoint of the service: a JSON report of the
//! running host's network name and its deployment environment. In a
//! Kubernetes deployment the hostname identifies which pod answered.

use axum::Json;
use tracing::{debug, instrument};

use crate::error::AppResult;
use crate::models::StatusResponse;
use crate::utils::constant::STATUS_MESSAGE;
use crate::utils::environment;

/// Reports the host identity and deployment environment.
///
/// GET /
///
/// Resolves the host's network name via the operating system and reads the
/// recognized environment variable (falling back to the default when it is
/// unset or empty). The payload is assembled fresh on every request; nothing
/// is cached between requests.
///
/// # Returns
///
/// - `200 OK` with [`StatusResponse`] - Report assembled successfully
/// - `500 Internal Server Error` - Host name lookup failed
#[instrument(fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn status() -> AppResult<Json<StatusResponse>> {
    let hostname = hostname::get()?.to_string_lossy().into_owned();
    let environment = environment();

    debug!(%hostname, %environment, "Assembled status report");

    Ok(Json(StatusResponse {
        message: STATUS_MESSAGE.to_string(),
        hostname,
        environment,
    }))
}
