//! Request body and query extraction
//!
//! Bodies are accepted as JSON or as URL-encoded forms. The content type
//! decides; anything that is not JSON is read as a form, and an empty body
//! is an empty form.
//!
//! Query strings may repeat a key; the values are joined with `,` in the
//! order they appear, so `?limit=1&limit=2` reads as `limit=1,2`.

use crate::error::ApiError;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::{header::CONTENT_TYPE, request::Parts},
};
use serde::de::DeserializeOwned;

/// Body extractor for form or JSON payloads
#[derive(Debug, Clone, Copy, Default)]
pub struct FormOrJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for FormOrJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_json_content_type);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        let is_blank = bytes.iter().all(u8::is_ascii_whitespace);
        let value = if is_json && !is_blank {
            serde_json::from_slice(&bytes).map_err(|e| ApiError::BadRequest(e.to_string()))?
        } else {
            serde_urlencoded::from_bytes(&bytes).map_err(|e| ApiError::BadRequest(e.to_string()))?
        };

        Ok(FormOrJson(value))
    }
}

/// Query string extractor that rejects with a JSON error body
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParams<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();
        let value = parse_query(query)?;
        Ok(QueryParams(value))
    }
}

fn parse_query<T: DeserializeOwned>(query: &str) -> Result<T, ApiError> {
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(query).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let mut merged: Vec<(String, String)> = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        match merged.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, joined)) => {
                joined.push(',');
                joined.push_str(&value);
            }
            None => merged.push((key, value)),
        }
    }

    let normalized =
        serde_urlencoded::to_string(&merged).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    serde_urlencoded::from_str(&normalized).map_err(|e| ApiError::BadRequest(e.to_string()))
}

fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}
