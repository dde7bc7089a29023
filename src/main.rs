mod config;
mod constants;
mod error;
mod proxy;
mod routes;
mod window;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, ServiceExt, routing::get};
use clap::Parser;
use config::Config;
use reqwest::Client;
use tower_http::normalize_path::NormalizePath;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_HASH: &str = env!("GIT_HASH");
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub struct AppState {
    pub config: Config,
    pub http_client: Client,
}

#[derive(Parser)]
#[command(name = "temp-dash")]
#[command(about = "Dashboard front-end for the temp telemetry server")]
struct Args {
    /// Host to bind to
    #[arg(short = 'H', long, env = "TEMP_DASH_HOST")]
    host: Option<String>,

    /// Port to bind to
    #[arg(short, long, env = "TEMP_DASH_PORT")]
    port: Option<u16>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/current", get(routes::api::current))
        .route("/api/stats", get(routes::api::stats))
        .route("/api/series", get(routes::api::series))
        .route("/api/series_all", get(routes::api::series_all))
        .route("/health", get(routes::health::health))
        .route("/version", get(routes::health::version))
        .merge(routes::dashboard::static_routes())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if config.debug { "debug" } else { "info" })
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    Url::parse(&config.upstream_base).expect("TEMP_SERVER_BASE must be a valid URL");

    let host = args.host.unwrap_or_else(|| config.host.clone());
    let port = args.port.unwrap_or(config.port);

    // Shared client; the configured timeout bounds every forwarded call
    let http_client = Client::builder()
        .timeout(config.timeout)
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to create HTTP client");

    info!("Upstream temp_server: {}", config.upstream_base);

    let state = Arc::new(AppState {
        config,
        http_client,
    });

    let app = NormalizePath::trim_trailing_slash(router(state));

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Invalid address");
    info!(
        "Starting temp-dash v{}-{} (built {})",
        VERSION, GIT_HASH, BUILD_TIME
    );
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(
        listener,
        ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
    .await
    .unwrap();
}
