use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use serde::de::DeserializeOwned;

use crate::error::GatewayError;

/// JSON request body where an empty body binds as `{}`.
///
/// A non-empty body must be declared as JSON. Every rejection is reported as
/// an invalid request.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json_declared = is_json(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| GatewayError::InvalidRequest(rejection.body_text()))?;

        if bytes.is_empty() {
            return serde_json::from_slice(b"{}")
                .map(JsonBody)
                .map_err(|e| GatewayError::InvalidRequest(e.to_string()));
        }
        if !json_declared {
            return Err(GatewayError::InvalidRequest(
                "Expected request with `Content-Type: application/json`".to_string(),
            ));
        }

        Json::<T>::from_bytes(&bytes)
            .map(|Json(body)| JsonBody(body))
            .map_err(|rejection| GatewayError::InvalidRequest(rejection.body_text()))
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
