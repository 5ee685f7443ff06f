//! Data Transfer Objects (DTOs) for responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned with every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable failure message
    #[schema(example = "Username already exists")]
    pub error: String,
    /// HTTP status code, repeated for clients that only read the body
    #[schema(example = 409)]
    pub code: u16,
}

/// Body returned by the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
}
