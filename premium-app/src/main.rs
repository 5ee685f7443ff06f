//! # Premium Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the repository adapter
//! - Create the payment gateway and registration service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payment_provider::SaasClient;
use premium_hex::{RegistrationService, SaasPaymentGateway, inbound::HttpServer};
use premium_repo::build_repo;

fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("premium-service"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Export spans only when a collector is configured
    let (telemetry, otel_provider) = if std::env::var_os("OTEL_EXPORTER_OTLP_ENDPOINT").is_some()
    {
        let (otel_tracer, provider) = init_tracer()?;
        (
            Some(tracing_opentelemetry::layer().with_tracer(otel_tracer)),
            Some(provider),
        )
    } else {
        (None, None)
    };

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,premium_app=debug,premium_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting premium server on port {}", config.port);
    tracing::info!(
        price = %config.plan.price,
        provider_mode = ?config.provider_mode,
        "Premium plan configured"
    );

    // Build repository (handles connection and migration)
    let repo = build_repo(&config.database_url).await?;

    let gateway = SaasPaymentGateway::new(SaasClient::new(config.provider_mode));
    let service = RegistrationService::new(repo, gateway, config.plan);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    flush_traces(otel_provider);
    Ok(())
}

/// Shuts the span exporter down, returning whether the flush succeeded.
fn flush_traces(provider: Option<sdktrace::SdkTracerProvider>) -> bool {
    match provider.map(|provider| provider.shutdown()) {
        Some(Err(e)) => {
            tracing::warn!(error = %e, "failed to flush traces on shutdown");
            false
        }
        _ => true,
    }
}
