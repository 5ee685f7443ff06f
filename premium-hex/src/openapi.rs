//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use premium_types::dto::{ErrorResponse, HealthResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
async fn health() {}

/// Register a premium user and charge the premium price
#[utoipa::path(
    post,
    path = "/premium/{username}",
    tag = "premium",
    params(
        ("username" = String, Path, description = "Username to register; must be unique")
    ),
    responses(
        (status = 201, description = "User registered and charged"),
        (status = 400, description = "Username missing", body = ErrorResponse,
            example = json!({"error": "Username missing", "code": 400})),
        (status = 402, description = "Card expired or credit maxed", body = ErrorResponse,
            example = json!({"error": "Card expired", "code": 402})),
        (status = 409, description = "Username already exists", body = ErrorResponse,
            example = json!({"error": "Username already exists", "code": 409})),
        (status = 500, description = "Unexpected storage or payment provider fault", body = ErrorResponse)
    )
)]
async fn register_premium() {}

/// OpenAPI documentation for the premium registration API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Premium Registration API",
        version = "1.0.0",
        description = "Registers premium users. A registration stores the user and charges the premium price in one transaction: either both happen or neither does.",
        license(name = "MIT"),
    ),
    paths(health, register_premium),
    components(schemas(ErrorResponse, HealthResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "premium", description = "Premium user registration"),
    )
)]
pub struct ApiDoc;
