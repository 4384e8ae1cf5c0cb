use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, header};
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers;
use crate::config::ServerConfig;
use crate::{Quoteline, ServerError};

/// CORS policy for a single allowed origin with credentials.
///
/// Methods and headers are mirrored from the preflight request since
/// wildcards cannot be combined with credentials.
#[must_use]
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .expose_headers([header::CONTENT_TYPE])
}

/// Build the application router.
pub fn router(ql: Arc<Quoteline>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/stock/:symbol", get(handlers::stock_series))
        .route("/api/stock/:symbol/", get(handlers::stock_series))
        .route(
            "/api/stock/:symbol/current-price",
            get(handlers::current_price),
        )
        .with_state(ql)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until `shutdown` resolves.
///
/// # Errors
/// Returns an error if the configuration is invalid, the listener cannot be
/// bound, or the server loop fails.
pub async fn serve<F>(
    ql: Arc<Quoteline>,
    cfg: &ServerConfig,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr = cfg.socket_addr()?;
    let app = router(ql, cors_layer(cfg.cors_origin_header()?));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, origin = %cfg.cors_origin, "quoteline listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("quoteline stopped");
    Ok(())
}
