use serde::{Deserialize, Serialize};

/// Payload describing the running host and its environment.
///
/// Constructed per request and discarded after serialization; no instance
/// outlives the request that built it.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Fixed banner identifying the service.
    pub message: String,
    /// Network name of the host, resolved at request time.
    pub hostname: String,
    /// Deployment environment, from the recognized variable ("dev" when unset).
    pub environment: String,
}
