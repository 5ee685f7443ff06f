//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use utoipa::OpenApi;

use premium_types::{HealthResponse, PaymentGateway, UserRepository};

use super::error::ApiError;
use crate::RegistrationService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<R: UserRepository, G: PaymentGateway> {
    pub service: RegistrationService<R, G>,
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".into(),
    })
}

/// OpenAPI document for the service.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Register a premium user named by the path segment.
#[tracing::instrument(skip(state))]
pub async fn register_premium<R: UserRepository, G: PaymentGateway>(
    State(state): State<Arc<AppState<R, G>>>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.service.register(Some(&username)).await?;
    Ok(StatusCode::CREATED)
}

/// `POST /premium/` with the username segment left out.
#[tracing::instrument(skip(state))]
pub async fn register_premium_unnamed<R: UserRepository, G: PaymentGateway>(
    State(state): State<Arc<AppState<R, G>>>,
) -> Result<impl IntoResponse, ApiError> {
    state.service.register(None).await?;
    Ok(StatusCode::CREATED)
}
