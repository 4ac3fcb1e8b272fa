//! JSON HTTP surface over the aggregation engine.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::engine::{AggregationEngine, AggregationError};
use crate::models::{Facet, FacetParseError, SearchCriteria, SortFacet};

#[derive(Clone)]
struct AppState {
    engine: Arc<AggregationEngine>,
}

/// Build the application router
pub fn router(engine: AggregationEngine) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/api/all-artworks", get(all_artworks))
        .route("/api/artwork/{id}", get(artwork_detail))
        .layer(CorsLayer::permissive())
        .with_state(AppState {
            engine: Arc::new(engine),
        })
}

/// Bind and serve until the process is stopped
pub async fn run(addr: SocketAddr, engine: AggregationEngine) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router(engine)).await
}

async fn welcome() -> &'static str {
    "Welcome to the musea artwork aggregation API"
}

/// Query parameters of `/api/all-artworks`.
///
/// Facet parameters arrive as either the sentinel string `any` or a
/// JSON-encoded mapping object; they are decoded into their tagged variants
/// once, here at the boundary.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchParams {
    q: Option<String>,
    page: Option<u32>,
    classification: Option<String>,
    technique: Option<String>,
    sort_opt: Option<String>,
    sort_order: Option<String>,
    min_results: Option<usize>,
}

impl SearchParams {
    fn into_criteria(self) -> Result<SearchCriteria, FacetParseError> {
        let mut criteria = SearchCriteria::default();
        criteria.query = self.q;

        if let Some(page) = self.page {
            criteria.page = page;
        }
        if let Some(raw) = self.classification.as_deref() {
            criteria.classification = Facet::parse(raw)?;
        }
        if let Some(raw) = self.technique.as_deref() {
            criteria.technique = Facet::parse(raw)?;
        }
        if let Some(raw) = self.sort_opt.as_deref() {
            criteria.sort = SortFacet::parse(raw)?;
        }
        if let Some(raw) = self.sort_order.as_deref() {
            criteria.sort_order = raw.parse()?;
        }
        if let Some(min) = self.min_results {
            criteria.min_results = min;
        }

        Ok(criteria)
    }
}

async fn all_artworks(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let criteria = match params.into_criteria() {
        Ok(criteria) => criteria,
        Err(err) => return error_response(StatusCode::BAD_REQUEST, &err.to_string()),
    };

    match state.engine.search_artworks(&criteria).await {
        Ok(result) => Json(result).into_response(),
        Err(err) => aggregation_error_response(err),
    }
}

async fn artwork_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.engine.get_artwork_detail(&id).await {
        Ok(Some(artwork)) => Json(artwork).into_response(),
        // Not found is a valid empty outcome, not an error.
        Ok(None) => Json(json!({})).into_response(),
        Err(err) => aggregation_error_response(err),
    }
}

fn aggregation_error_response(err: AggregationError) -> Response {
    let status = match err {
        AggregationError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        AggregationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, &err.to_string())
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
