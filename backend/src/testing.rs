//! In-process stand-in for the Sheets values endpoint, for async tests.

use axum::{extract::Path, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::SheetConfig;

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Stub that answers every tab in `tabs` with `{"values": grid}` and 404s otherwise.
pub async fn sheet_stub(tabs: Vec<(&str, Value)>) -> String {
    let tabs: Arc<HashMap<String, Value>> =
        Arc::new(tabs.into_iter().map(|(k, v)| (k.to_string(), v)).collect());

    let router = Router::new().route(
        "/v4/spreadsheets/{sheet}/values/{tab}",
        get(move |Path((_sheet, tab)): Path<(String, String)>| {
            let tabs = Arc::clone(&tabs);
            async move {
                match tabs.get(&tab) {
                    Some(body) => (StatusCode::OK, Json(body.clone())).into_response(),
                    None => (
                        StatusCode::NOT_FOUND,
                        Json(json!({
                            "error": {
                                "code": 404,
                                "message": format!("Unable to parse range: {}", tab),
                                "status": "NOT_FOUND"
                            }
                        })),
                    )
                        .into_response(),
                }
            }
        }),
    );

    serve(router).await
}

/// Config pointed at a stub base URL.
pub fn stub_config(base_url: &str) -> SheetConfig {
    SheetConfig::new("sheet123", "test-key")
        .with_base_url(base_url)
        .unwrap()
}

/// The header-plus-one-row grid used across tests.
pub fn acme_grid() -> Value {
    json!({
        "range": "Report!A1:H3",
        "majorDimension": "ROWS",
        "values": [
            ["Industry information sites"],
            ["Site", "Category", "Service", "Website", "Coverage", "Contact", "Remarks", "Tools"],
            ["Acme", "Tech", "Consulting", "acme.com", "Global", "Contact: x - Contact: y", "", "tool1, tool2"]
        ]
    })
}
