//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use premium_types::{PaymentGateway, UserRepository};

use super::handlers::{self, AppState};
use crate::RegistrationService;

/// HTTP Server for the premium registration API.
pub struct HttpServer<R: UserRepository, G: PaymentGateway> {
    state: Arc<AppState<R, G>>,
}

impl<R: UserRepository, G: PaymentGateway> HttpServer<R, G> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: RegistrationService<R, G>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Returns the service the routes drive.
    pub fn service(&self) -> &RegistrationService<R, G> {
        &self.state.service
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Build HTTP metrics layer (uses globally set MeterProvider)
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        Router::new()
            .route("/health", get(handlers::health))
            .route("/api-docs/openapi.json", get(handlers::openapi_json))
            .route(
                "/premium/{username}",
                post(handlers::register_premium::<R, G>),
            )
            .route("/premium/", post(handlers::register_premium_unnamed::<R, G>))
            .route("/premium", post(handlers::register_premium_unnamed::<R, G>))
            .layer(metrics)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
