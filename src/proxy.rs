//! Single-shot GET forwarding to the upstream telemetry server.

use axum::{
    body::Body,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tracing::warn;

use crate::AppState;
use crate::error::ProxyError;

/// Forward a GET to `upstream_base + path` with the given query parameters
/// and relay the upstream response verbatim (status, body bytes,
/// content-type). Transport failures degrade to the 502 envelope and never
/// propagate; upstream 4xx/5xx are not interpreted here and pass through
/// untouched.
pub async fn forward(state: &AppState, path: &str, params: &[(String, String)]) -> Response {
    let url = format!("{}{}", state.config.upstream_base, path);

    let upstream = match state.http_client.get(&url).query(params).send().await {
        Ok(r) => r,
        Err(e) => {
            warn!("GET {url} failed: {e}");
            return ProxyError::from(e).into_response();
        }
    };

    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json")
        .to_string();

    // A failure while draining the body is still a transport failure
    let body: Bytes = match upstream.bytes().await {
        Ok(b) => b,
        Err(e) => {
            warn!("GET {url} failed mid-body: {e}");
            return ProxyError::from(e).into_response();
        }
    };

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap()
}
