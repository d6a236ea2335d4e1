use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::RwLock;
use search_core::{read_corpus, DocId, Document, SearchConfig, SearchServer};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub k: Option<usize>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<Document>,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub num_docs: u64,
    pub num_terms: usize,
    pub max_results: usize,
}

#[derive(Deserialize)]
pub struct BatchRequest {
    pub documents: Vec<BatchDocument>,
}

#[derive(Deserialize)]
pub struct BatchDocument {
    pub id: DocId,
    pub text: String,
}

#[derive(Serialize)]
pub struct BatchResponse {
    pub added: usize,
    pub num_docs: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub search: Arc<RwLock<SearchServer>>,
    pub admin_token: Option<String>,
}

/// Build a search server from a corpus file in the line-oriented format.
pub fn load_corpus_file(path: &Path, config: SearchConfig) -> Result<SearchServer> {
    let f = File::open(path).with_context(|| format!("opening corpus {}", path.display()))?;
    let corpus = read_corpus(&mut BufReader::new(f))
        .with_context(|| format!("reading corpus {}", path.display()))?;
    Ok(corpus.into_search_server(config))
}

pub fn build_app(search: SearchServer, admin_token: Option<String>) -> Router {
    let app_state = AppState { search: Arc::new(RwLock::new(search)), admin_token };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val.split(',').filter_map(|s| s.trim().parse().ok()).collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(origins))
                    .allow_methods(Any)
                    .allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/stats", get(stats_handler))
        .route("/index/batch", post(index_batch))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let search = state.search.read();
    let max = search.config().max_results;
    let k = params.k.unwrap_or(max).min(max);

    let mut results = search.find_all_documents(&params.q);
    drop(search);
    let total_hits = results.len();
    results.truncate(k);

    let took_s = start.elapsed().as_secs_f64();
    tracing::debug!(query = %params.q, total_hits, took_s, "search");
    Json(SearchResponse { query: params.q, took_s, total_hits, results })
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let search = state.search.read();
    Json(StatsResponse {
        num_docs: search.document_count(),
        num_terms: search.term_count(),
        max_results: search.config().max_results,
    })
}

async fn index_batch(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(batch): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, (StatusCode, String)> {
    authorize(&state, &headers)?;
    let mut search = state.search.write();
    for doc in &batch.documents {
        search.add_document(doc.id, &doc.text);
    }
    let num_docs = search.document_count();
    tracing::info!(added = batch.documents.len(), num_docs, "appended documents");
    Ok(Json(BatchResponse { added: batch.documents.len(), num_docs }))
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), (StatusCode, String)> {
    let required = match &state.admin_token {
        Some(t) => t,
        None => return Err((StatusCode::UNAUTHORIZED, "ADMIN_TOKEN not set".into())),
    };
    let provided = headers.get("X-ADMIN-TOKEN").and_then(|v| v.to_str().ok()).unwrap_or("");
    if provided == required {
        Ok(())
    } else {
        Err((StatusCode::UNAUTHORIZED, "invalid admin token".into()))
    }
}
