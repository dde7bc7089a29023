use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("bad kind")]
    InvalidKind,

    #[error("bad limit")]
    InvalidLimit,

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match self {
            // Fixed envelopes the dashboard JS matches on byte-for-byte
            ProxyError::InvalidKind => bad_request(r#"{"ok":false,"err":"bad kind"}"#),
            ProxyError::InvalidLimit => bad_request(r#"{"ok":false,"err":"bad limit"}"#),
            ProxyError::Upstream(e) => (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "ok": false,
                    "err": "proxy_error",
                    "details": e.to_string(),
                })),
            )
                .into_response(),
        }
    }
}

fn bad_request(body: &'static str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
