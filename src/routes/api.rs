use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

use crate::AppState;
use crate::constants::{DEFAULT_KIND, DEFAULT_LIMIT, SERIES_PATH};
use crate::error::ProxyError;
use crate::proxy;
use crate::window::{Granularity, Window};

pub async fn current(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    proxy::forward(&state, "/api/current", &params).await
}

pub async fn stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    proxy::forward(&state, "/api/stats", &params).await
}

pub async fn series(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    proxy::forward(&state, SERIES_PATH, &params).await
}

#[derive(Debug, Deserialize)]
pub struct SeriesAllParams {
    kind: Option<String>,
    limit: Option<String>,
}

/// Full-range series: the browser names a granularity and the window resolver
/// supplies `from`/`to`, replacing whatever else was in the query string.
pub async fn series_all(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SeriesAllParams>,
) -> Response {
    let kind = match params
        .kind
        .as_deref()
        .unwrap_or(DEFAULT_KIND)
        .parse::<Granularity>()
    {
        Ok(kind) => kind,
        Err(err) => return err.into_response(),
    };

    // A malformed limit is a client error, not a handler crash
    let limit = match params.limit.as_deref().map(str::parse::<u32>) {
        None => DEFAULT_LIMIT,
        Some(Ok(limit)) => limit,
        Some(Err(_)) => return ProxyError::InvalidLimit.into_response(),
    };

    let window = Window::resolve(kind, limit, Utc::now());
    proxy::forward(&state, SERIES_PATH, &window.query_params()).await
}
