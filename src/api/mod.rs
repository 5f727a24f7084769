// Lightweight HTTP API and form page over the forward search

pub mod handlers;
pub mod templates;
pub mod types;

use axum::http::{header, Method};
use axum::routing::get;
use axum::Router;
use minijinja::Environment;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Settings;
use crate::core::{ConfigProvider, PalindromeSearch};
use crate::utils::error::{FuelError, Result};

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub settings: Arc<Settings>,
    pub search: PalindromeSearch,
    pub templates: Arc<Environment<'static>>,
}

impl ApiState {
    pub fn new(settings: Settings) -> Result<Self> {
        Ok(Self {
            search: PalindromeSearch::new(settings.epsilon()),
            settings: Arc::new(settings),
            templates: Arc::new(templates::environment()?),
        })
    }
}

/// Build the axum router with the page and API routes.
pub fn build_router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let api = Router::new()
        .route(
            "/api/calculate",
            get(handlers::calculate_get).post(handlers::calculate_post),
        )
        .route("/api/health", get(handlers::health))
        .layer(cors);

    Router::new()
        .route("/", get(handlers::index).post(handlers::index_submit))
        .merge(api)
        .with_state(state)
}

/// Serves until Ctrl-C.
pub async fn start_server(settings: Settings) -> Result<()> {
    let addr = settings.bind_address();
    let state = ApiState::new(settings)?;
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| FuelError::ServerError {
            message: format!("Could not bind {}: {}", addr, e),
        })?;

    tracing::info!("Web UI: http://{addr}");
    tracing::info!("API: http://{addr}/api/calculate");
    println!("Starting web server on {addr}");
    println!("Web UI: http://{addr}");
    println!("API: http://{addr}/api/calculate");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutting down web server");
        })
        .await
        .map_err(|e| FuelError::ServerError {
            message: e.to_string(),
        })?;
    Ok(())
}
