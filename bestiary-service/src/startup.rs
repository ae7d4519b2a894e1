//! Application startup and lifecycle management.

use crate::config::Config;
use crate::handlers;
use crate::models::Creature;
use crate::services::{BestiaryService, CreatureRegistry};
use axum::middleware::from_fn;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::tracing::request_id_middleware;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub bestiary: BestiaryService,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// Binds the listener immediately (port 0 = random port for testing)
    /// and seeds the registry with its initial entry.
    pub async fn build(config: Config) -> Result<Self, AppError> {
        let registry = CreatureRegistry::new();
        registry
            .add(Creature {
                id: 1,
                family: "Amphibian".to_string(),
                common_name: "Frog".to_string(),
            })
            .await;

        let bestiary = BestiaryService::new(registry);

        let addr = format!("{}:{}", config.server.host, config.server.port);
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let state = AppState { config, bestiary };

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get the application state for inspection in tests.
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> Result<(), AppError> {
        let router = Router::new()
            .route("/", get(handlers::read_root))
            .route("/items/:item_id", get(handlers::read_item))
            .route("/create_amphibian", post(handlers::create_amphibian))
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .layer(from_fn(request_id_middleware))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");

                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                }),
            )
            .with_state(self.state);

        tracing::info!("Listening on port {}", self.port);
        axum::serve(self.listener, router).await?;

        Ok(())
    }
}
