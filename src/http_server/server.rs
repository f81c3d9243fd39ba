//! HTTP server assembly
//!
//! Combines the analysis routes under /api with a health probe and a CORS
//! layer, and runs the axum serve loop.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{Logger, Severity};

use super::analysis_routes::{analysis_routes, AnalysisState};
use super::config::HttpServerConfig;

/// HTTP server for the analysis API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Server with default configuration and an empty store
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Server with custom configuration and an empty store
    pub fn with_config(config: HttpServerConfig) -> Self {
        let router = Self::build_router(&config, Arc::new(AnalysisState::new()));
        Self { config, router }
    }

    /// Build the combined router over the given state
    fn build_router(config: &HttpServerConfig, state: Arc<AnalysisState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health))
            .nest("/api", analysis_routes(state))
            .layer(cors)
    }

    /// The socket address string
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        Logger::log(
            Severity::Info,
            "http_server_started",
            &[("addr", &addr.to_string())],
        );

        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// GET /health - liveness probe
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_addr() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_custom_port() {
        let server = HttpServer::with_config(HttpServerConfig::with_port(8080));
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::new();
        let _router = server.router();
    }

    #[test]
    fn test_router_builds_with_cors_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..HttpServerConfig::default()
        };
        let _router = HttpServer::with_config(config).router();
    }
}
