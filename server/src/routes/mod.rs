pub mod todos;
pub mod users;

use axum::{
    extract::OriginalUri,
    http::{Method, StatusCode},
    Json,
};
use serde_json::{json, Value};

pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Bienvenue sur mon API !" }))
}

/// Plain-text 404 for paths no route matches.
pub async fn unknown_route(method: Method, OriginalUri(uri): OriginalUri) -> (StatusCode, String) {
    (
        StatusCode::NOT_FOUND,
        format!("Cannot {method} {}", uri.path()),
    )
}
