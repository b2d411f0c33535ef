//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router with every engine route
//! - Wire up middleware (request ID, tracing, CORS, limits, timeout, metrics)
//! - Serve on a bound listener until shutdown

use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{CorsConfig, EngineConfig};
use crate::http::handlers;
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::shutdown_signal;
use crate::observability::metrics;

/// HTTP server for the engine.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            router: build_router(&config),
        }
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns after a shutdown trigger or OS signal once in-flight requests
    /// have drained. Dropping every `Shutdown` handle also stops the server.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the axum router with all middleware layers.
pub fn build_router(config: &EngineConfig) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/ai/generate-campaign", post(handlers::generate_campaign))
        .route("/ai/revenue-forecast", get(handlers::revenue_forecast))
        .route("/ai/score-lead", post(handlers::score_lead))
        .route("/ai/optimize", get(handlers::optimize));

    with_middleware(routes, config)
}

/// Wrap a route table with the fallbacks and the middleware stack.
///
/// Metrics sit outside the limit and timeout layers so 408 and 413
/// responses are counted too.
#[allow(deprecated)]
fn with_middleware(routes: Router, config: &EngineConfig) -> Router {
    let mut router = routes
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(middleware::from_fn(metrics::track_metrics));

    if config.security.enable_headers {
        router = router.layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ));
    }

    if config.cors.enabled {
        router = router.layer(cors_layer(&config.cors));
    }

    router
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(set_request_id_layer())
}

/// CORS policy from configuration.
///
/// A wildcard origin combined with credentials mirrors the caller's origin,
/// since browsers reject `*` on credentialed responses.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(config.allow_credentials);

    if config.allows_any_origin() {
        if config.allow_credentials {
            layer.allow_origin(AllowOrigin::mirror_request())
        } else {
            layer.allow_origin(Any)
        }
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| HeaderValue::from_str(o).ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
