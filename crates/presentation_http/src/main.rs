//! Fechas Habiles HTTP Server
//!
//! Main entry point for the working-days API server.

use std::{sync::Arc, time::Duration};

use application::{HolidayCatalog, WorkingDaysService, ports::HolidaySourcePort};
use infrastructure::{AppConfig, HolidayFeedAdapter};
use presentation_http::{RequestIdLayer, routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so the log format can honor it; the
    // load error, if any, is reported once tracing is up.
    let (config, config_err) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(&config.server.log_format);

    if let Some(e) = config_err {
        tracing::warn!("Failed to load config, using defaults: {}", e);
    }

    info!(
        "📅 Fechas Habiles v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    info!(
        host = %config.server.host,
        port = %config.server.port,
        holiday_feed = %config.holidays.base_url,
        "Configuration loaded"
    );

    // Initialize the holiday feed adapter
    let adapter = HolidayFeedAdapter::with_config(config.holidays.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize holiday feed client: {e}"))?;
    let source: Arc<dyn HolidaySourcePort> = Arc::new(adapter);

    // Initialize services
    let catalog = Arc::new(HolidayCatalog::new(source));
    let working_days = WorkingDaysService::new(catalog);

    let state = AppState::new(Arc::new(working_days));

    // Build router
    let app = routes::create_router(state);

    // CORS only when enabled; an empty origin list allows all origins
    let app = if config.server.cors_enabled {
        app.layer(cors_layer(&config.server.allowed_origins))
    } else {
        app
    };

    // Add middleware (order matters: last added = outermost)
    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new());

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);
    info!("📚 OpenAPI document: http://{}/api-docs/openapi.json", addr);

    // Graceful shutdown configuration
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Initialize the tracing subscriber with the configured format
fn init_tracing(log_format: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "habiles_server=debug,presentation_http=debug,tower_http=debug".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Build the CORS layer from the configured origin list
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET])
            .allow_headers(Any)
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
    // Connection draining itself is handled by axum's graceful_shutdown
}
