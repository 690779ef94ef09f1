use anyhow::Result;
use axum::extract::{DefaultBodyLimit, Multipart, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tfidf_core::{DocumentDescriptor, DocumentInput, EngineConfig, ProcessOutput, TfidfEngine, TfidfError};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Multipart field name carrying uploaded documents.
const FILES_FIELD: &str = "files";

#[derive(Deserialize)]
pub struct ProcessParams {
    pub top_n_words: Option<usize>,
}

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<TfidfEngine>,
}

impl AppState {
    fn top_n(&self, params: &ProcessParams) -> usize { params.top_n_words.unwrap_or_else(|| self.engine.default_top_n_words()) }
}

pub fn build_app(config: EngineConfig, max_upload_bytes: usize) -> Result<Router> {
    // Stopwords are loaded here, before the first request is accepted
    let engine = TfidfEngine::new(config)?;
    Ok(router(Arc::new(engine), max_upload_bytes))
}

pub fn router(engine: Arc<TfidfEngine>, max_upload_bytes: usize) -> Router {
    let app_state = AppState { engine };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val.split(',').filter_map(|s| s.trim().parse().ok()).collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(|| async { "ok" }))
        .route("/api/process-files", post(process_files_handler))
        .route("/api/process", post(process_json_handler))
        .with_state(app_state)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn root_handler() -> Json<Value> { Json(serde_json::json!({ "message": "TF-IDF API is running" })) }

/// Every multipart part named `files` becomes one document; always answered with the per-filename mapping.
pub async fn process_files_handler(
    State(state): State<AppState>,
    Query(params): Query<ProcessParams>,
    mut multipart: Multipart,
) -> Result<Json<ProcessOutput>, (StatusCode, String)> {
    let mut documents: Vec<DocumentDescriptor> = Vec::new();
    while let Some(field) = multipart.next_field().await.map_err(|e| (StatusCode::BAD_REQUEST, e.body_text()))? {
        if field.name() != Some(FILES_FIELD) {
            continue;
        }
        let filename = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.map_err(|e| (StatusCode::BAD_REQUEST, e.body_text()))?;
        let content = String::from_utf8(bytes.to_vec()).map_err(|_| {
            let name = filename.as_deref().unwrap_or("<unnamed>");
            tracing::warn!(file = name, "upload is not valid UTF-8");
            (StatusCode::BAD_REQUEST, format!("{name} is not valid UTF-8 text"))
        })?;
        documents.push(DocumentDescriptor { filename, content: Some(content) });
    }
    if documents.is_empty() {
        return Err((StatusCode::UNPROCESSABLE_ENTITY, format!("at least one '{FILES_FIELD}' upload is required")));
    }

    let top_n = state.top_n(&params);
    let num_docs = documents.len();
    let output = state.engine.process_documents(DocumentInput::Batch(documents), top_n);
    tracing::info!(num_docs, top_n, "processed uploaded files");
    Ok(Json(output))
}

/// JSON body: one document object or an array of them.
pub async fn process_json_handler(
    State(state): State<AppState>,
    Query(params): Query<ProcessParams>,
    Json(body): Json<Value>,
) -> Result<Json<ProcessOutput>, (StatusCode, String)> {
    let top_n = state.top_n(&params);
    match state.engine.process_json(body, top_n) {
        Ok(output) => Ok(Json(output)),
        Err(e @ TfidfError::InputShape(_)) => Err((StatusCode::BAD_REQUEST, e.to_string())),
        Err(e) => Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
    }
}
