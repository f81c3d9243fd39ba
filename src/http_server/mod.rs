//! HTTP server subsystem
//!
//! Thin axum boundary over the analysis store. Handlers translate wire
//! payloads to store calls and store errors to status codes; all data
//! integrity rules live below this layer.

mod analysis_routes;
mod config;
mod errors;
mod server;

pub use analysis_routes::{analysis_routes, AnalysisState};
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
