//! HTTP rendering of failures.
//!
//! # Design
//! Store errors map onto 404 and 400 bodies directly. Anything else is an
//! internal error: the client gets a generic 500 whose `error` field is `{}`
//! unless the service runs in development. `ApiError::into_response` has no
//! access to the configuration, so it attaches the detail as a response
//! extension and `expose_error_detail` decides whether to show it. Panics
//! take the same route through `panic_response`.

use std::any::Any;

use axum::{
    extract::{rejection::PathRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crud_core::{StoreError, ValidationErrors};
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::Environment;

pub const INTERNAL_MESSAGE: &str = "Une erreur est survenue !";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("Erreur de validation")]
    Validation(ValidationErrors),

    /// Uncaught failure; the string is only shown in development.
    #[error("{0}")]
    Internal(String),
}

/// Internal failure detail riding on a 500 response.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        if e.is_not_found() {
            return ApiError::NotFound(e.to_string());
        }
        match e {
            StoreError::Validation(errors) => ApiError::Validation(errors),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self {
        ApiError::Internal(e.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ApiError::NotFound(_) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": errors, "message": message })),
            )
                .into_response(),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "request failed");
                let mut response = internal_error_response(None);
                response.extensions_mut().insert(ErrorDetail(detail));
                response
            }
        }
    }
}

/// The generic 500 body, with `detail` or `{}` as its `error` field.
pub fn internal_error_response(detail: Option<&str>) -> Response {
    let error = match detail {
        Some(detail) => Value::String(detail.to_string()),
        None => json!({}),
    };
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": INTERNAL_MESSAGE, "error": error })),
    )
        .into_response()
}

/// Response-mapping middleware: in development, rewrite 500 bodies to carry
/// the failure detail left by `ApiError::Internal`.
pub async fn expose_error_detail(
    State(environment): State<Environment>,
    mut response: Response,
) -> Response {
    let detail = response.extensions_mut().remove::<ErrorDetail>();
    match detail {
        Some(ErrorDetail(detail)) if environment.is_development() => {
            internal_error_response(Some(&detail))
        }
        _ => response,
    }
}

/// Turn a caught handler panic into the generic 500.
pub fn panic_response(environment: &Environment, panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    tracing::error!(error = %detail, "handler panicked");
    internal_error_response(environment.is_development().then_some(detail.as_str()))
}

#[cfg(test)]
mod tests {
    use crud_core::{FieldError, Resource};
    use http_body_util::BodyExt;

    use super::*;

    async fn body(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_renders_message() {
        let response = ApiError::from(StoreError::Empty(Resource::User)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body(response).await, json!({"message": "Aucun utilisateur trouvé"}));
    }

    #[tokio::test]
    async fn missing_record_maps_to_not_found() {
        let response = ApiError::from(StoreError::NotFound(Resource::Todo)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body(response).await, json!({"message": "Tâche non trouvée"}));
    }

    #[tokio::test]
    async fn validation_renders_errors_and_message() {
        let mut errors = ValidationErrors::new();
        errors.add(FieldError::new("title", Some("")));
        let response = ApiError::from(StoreError::Validation(errors)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body(response).await;
        assert_eq!(json["message"], "Erreur de validation");
        assert_eq!(json["errors"][0]["path"], "title");
        assert_eq!(json["errors"][0]["msg"], "Invalid value");
    }

    #[tokio::test]
    async fn internal_hides_detail_until_mapped() {
        let response = ApiError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let hidden = expose_error_detail(State(Environment::Production), response).await;
        assert_eq!(
            body(hidden).await,
            json!({"message": INTERNAL_MESSAGE, "error": {}})
        );

        let response = ApiError::Internal("boom".to_string()).into_response();
        let shown = expose_error_detail(State(Environment::Development), response).await;
        assert_eq!(
            body(shown).await,
            json!({"message": INTERNAL_MESSAGE, "error": "boom"})
        );
    }

    #[tokio::test]
    async fn panic_payloads_are_reported() {
        let response = panic_response(&Environment::Development, Box::new("index out of range"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body(response).await["error"], "index out of range");

        let response = panic_response(&Environment::Production, Box::new(String::from("secret")));
        assert_eq!(body(response).await["error"], json!({}));
    }
}
