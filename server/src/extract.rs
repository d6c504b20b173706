//! Lenient request parsing for path ids and JSON bodies.
//!
//! # Design
//! An id segment is read like a leading integer: surrounding whitespace and
//! trailing garbage are ignored (`"12abc"` is 12), and a segment with no
//! leading digits names no record at all, so it answers 404 rather than 400.
//!
//! A segment that does not percent-decode to UTF-8 is an internal error, like
//! any other failure to read the request.
//!
//! Bodies are only decoded when the content type is `application/json`.
//! Without it, with an empty body, or with a top-level array, every input
//! field is absent and validation decides what happens. Any other JSON that
//! does not decode is an internal error.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts, HeaderMap},
};
use crud_core::{RecordId, Resource, StoreError};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Leading-integer parse of a path segment. Negative numbers match nothing.
pub fn parse_id(raw: &str) -> Option<RecordId> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 || negative {
        return None;
    }
    digits[..end].parse().ok()
}

/// Resolve a path segment to an id of `resource`, or its not-found error.
pub fn record_id(raw: &str, resource: Resource) -> Result<RecordId, ApiError> {
    parse_id(raw).ok_or_else(|| {
        tracing::info!(id = raw, "{}", resource.missing_message());
        StoreError::NotFound(resource).into()
    })
}

/// The raw `{id}` segment of a record route.
#[derive(Debug, Clone)]
pub struct IdSegment(pub String);

impl<S> FromRequestParts<S> for IdSegment
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}

/// JSON body extractor that falls back to `T::default()`.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(Self(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Internal(e.body_text()))?;
        if bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| ApiError::Internal(e.to_string()))?;
        if value.is_array() {
            return Ok(Self(T::default()));
        }
        serde_json::from_value(value)
            .map(Self)
            .map_err(|e| ApiError::Internal(e.to_string()))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json"
}
