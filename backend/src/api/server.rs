//! HTTP server for the site directory.
//!
//! Stateless per request: each call loads the tab, so a data change in the
//! sheet shows up on the next request.
//!
//! # API Endpoints
//!
//! | Method | Path           | Description                                  |
//! |--------|----------------|----------------------------------------------|
//! | GET    | `/health`      | Health check                                 |
//! | GET    | `/api/sites`   | Sites of a tab, filtered by `q`              |
//! | GET    | `/api/export`  | Contact CSV download of a tab (unfiltered)   |
//! | GET    | `/api/logs`    | SSE stream for real-time logs                |

use axum::{
    extract::{Query, State},
    http::{header, Method, StatusCode},
    response::{sse::Event, IntoResponse, Json, Sse},
    routing::get,
    Router,
};
use futures::stream::Stream;
use serde_json::{json, Value};
use std::{convert::Infallible, net::SocketAddr, sync::Arc, time::Duration};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;
use tower_http::cors::CorsLayer;

use super::logs::{log_error, LOG_BROADCASTER};
use super::types::{error_response, SitesParams, SitesResponse};
use crate::config::EXPORT_FILE_NAME;
use crate::error::AppResult;
use crate::export::{export_csv, CSV_CONTENT_TYPE};
use crate::loader::DatasetLoader;
use crate::models::Language;
use crate::search::filter;

type ApiError = (StatusCode, Json<Value>);

/// Build the router around a shared loader.
pub fn router(loader: DatasetLoader) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE, header::CONTENT_DISPOSITION]);

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/api/sites", get(list_sites))
        .route("/api/export", get(export_sites))
        .route("/api/logs", get(sse_logs))
        .layer(cors)
        .with_state(Arc::new(loader))
}

/// Start the HTTP server
pub async fn start_server(loader: DatasetLoader, port: u16) -> AppResult<()> {
    let app = router(loader);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    eprintln!("🚀 Infosheet server running on http://localhost:{}", port);
    eprintln!("   GET  /api/sites  - Sites (?lang=&tab=&q=)");
    eprintln!("   GET  /api/export - Contact CSV (?lang=&tab=)");
    eprintln!("   GET  /api/logs   - SSE log stream");
    eprintln!("   GET  /health     - Health check");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "infosheet",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Language and tab from the query string, with page defaults.
fn resolve_params(params: &SitesParams) -> Result<(Language, String), ApiError> {
    let language = match params.lang.as_deref() {
        Some(raw) if !raw.trim().is_empty() => raw
            .parse::<Language>()
            .map_err(|e| (StatusCode::BAD_REQUEST, Json(error_response(&e))))?,
        _ => Language::default(),
    };

    let tab = match params.tab.as_deref().map(str::trim) {
        Some(tab) if !tab.is_empty() => tab.to_string(),
        _ => language.default_tab().to_string(),
    };

    Ok((language, tab))
}

/// Sites of one tab, filtered by the query
async fn list_sites(
    State(loader): State<Arc<DatasetLoader>>,
    Query(params): Query<SitesParams>,
) -> Result<Json<SitesResponse>, ApiError> {
    let (language, tab) = resolve_params(&params)?;

    let records = loader.load(&tab, language).await;
    let query = params.q.unwrap_or_default();
    let sites = filter(&records, &query).into_iter().cloned().collect();

    Ok(Json(SitesResponse::new(language, tab, records.len(), sites)))
}

/// Contact CSV of one tab, as a download
async fn export_sites(
    State(loader): State<Arc<DatasetLoader>>,
    Query(params): Query<SitesParams>,
) -> Result<impl IntoResponse, ApiError> {
    let (language, tab) = resolve_params(&params)?;

    let records = loader.load(&tab, language).await;
    let bytes = export_csv(&records).map_err(|e| {
        log_error(format!("Export failed: {}", e));
        (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response(&e.to_string())))
    })?;

    let headers = [
        (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
        ),
    ];

    Ok((headers, bytes))
}

/// SSE endpoint for real-time log streaming
async fn sse_logs() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = LOG_BROADCASTER.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(entry) => {
            let json = serde_json::to_string(&entry).ok()?;
            Some(Ok(Event::default().data(json)))
        }
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}
