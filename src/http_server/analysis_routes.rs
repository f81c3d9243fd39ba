//! Analysis HTTP routes
//!
//! Endpoints for creating, listing, fetching, and deleting analyses. The
//! creation body arrives as raw JSON and goes through the schema validator
//! before it can reach the store; read paths hit the store directly.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::schema::{self, Analysis};
use crate::store::AnalysisStore;

use super::errors::{ApiError, ApiResult};

/// State shared across analysis handlers
pub struct AnalysisState {
    /// The authoritative record collection
    pub store: AnalysisStore,
}

impl AnalysisState {
    /// State backed by an empty store
    pub fn new() -> Self {
        Self {
            store: AnalysisStore::new(),
        }
    }
}

impl Default for AnalysisState {
    fn default() -> Self {
        Self::new()
    }
}

/// Query parameters for listing analyses
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Optional free-text filter over claim and reasoning
    #[serde(default)]
    pub search: Option<String>,
}

/// Response body for a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Always true; a miss is a 404 instead
    pub success: bool,
}

/// Build the analysis router
pub fn analysis_routes(state: Arc<AnalysisState>) -> Router {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/analyses", get(list_analyses))
        .route("/analyses/:id", get(get_analysis))
        .route("/analyses/:id", delete(delete_analysis))
        .with_state(state)
}

/// POST /api/analyze - validate and persist a new analysis
async fn analyze(
    State(state): State<Arc<AnalysisState>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Analysis>> {
    let payload = schema::validate_create(&body)?;
    let analysis = state.store.create(payload)?;
    Ok(Json(analysis))
}

/// GET /api/analyses - list, optionally filtered by ?search=
async fn list_analyses(
    State(state): State<Arc<AnalysisState>>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<Analysis>>> {
    let analyses = match params.search.as_deref() {
        Some(text) => state.store.search(text)?,
        None => state.store.list_all()?,
    };
    Ok(Json(analyses))
}

/// GET /api/analyses/:id - fetch one analysis
async fn get_analysis(
    State(state): State<Arc<AnalysisState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Analysis>> {
    // A syntactically invalid id cannot name a record, so it is a miss
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound)?;
    let analysis = state.store.get(id)?;
    Ok(Json(analysis))
}

/// DELETE /api/analyses/:id - remove one analysis
async fn delete_analysis(
    State(state): State<Arc<AnalysisState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound)?;
    if state.store.delete(id)? {
        Ok(Json(DeleteResponse { success: true }))
    } else {
        Err(ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    fn state() -> Arc<AnalysisState> {
        Arc::new(AnalysisState::new())
    }

    fn creation_body(claim: &str) -> Value {
        json!({
            "claim": claim,
            "verdict": "caution",
            "reasoning": "partially supported",
            "confidenceScore": 65,
            "impactMode": true,
        })
    }

    #[tokio::test]
    async fn test_analyze_returns_stored_record() {
        let state = state();
        let Json(record) = analyze(State(state.clone()), Json(creation_body("vaccines work")))
            .await
            .unwrap();

        assert_eq!(record.claim, "vaccines work");
        assert_eq!(record.confidence_score, 65);
        assert!(record.impact_mode);
        assert_eq!(state.store.get(record.id).unwrap(), record);
    }

    #[tokio::test]
    async fn test_analyze_rejects_invalid_body() {
        let err = analyze(State(state()), Json(json!({"claim": ""})))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_with_and_without_search() {
        let state = state();
        analyze(State(state.clone()), Json(creation_body("apples are red")))
            .await
            .unwrap();
        analyze(State(state.clone()), Json(creation_body("sky is green")))
            .await
            .unwrap();

        let Json(all) = list_analyses(State(state.clone()), Query(ListParams { search: None }))
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let Json(hits) = list_analyses(
            State(state),
            Query(ListParams {
                search: Some("APPLES".to_string()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].claim, "apples are red");
    }

    #[tokio::test]
    async fn test_get_missing_and_malformed_ids_are_404() {
        let state = state();

        let err = get_analysis(State(state.clone()), Path(Uuid::new_v4().to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = get_analysis(State(state), Path("not-a-uuid".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let state = state();
        let Json(record) = analyze(State(state.clone()), Json(creation_body("c")))
            .await
            .unwrap();

        let Json(resp) = delete_analysis(State(state.clone()), Path(record.id.to_string()))
            .await
            .unwrap();
        assert!(resp.success);

        let err = delete_analysis(State(state), Path(record.id.to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
