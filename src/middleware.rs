//! # Middleware Components
//!
//! Cross-cutting layers applied to every route: the cross-origin policy,
//! request id generation and propagation, and request tracing.

use axum::{Router, body::Body, http::Request};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, info_span, warn};

use crate::config::{AllowedOrigins, AppConfig};

/// Builds the CORS layer for the configured origins.
///
/// Browsers refuse a literal `*` when credentials are allowed, so
/// [`AllowedOrigins::Any`] echoes back the request's origin, method and
/// headers instead. With an explicit list, origins outside it receive no
/// `Access-Control-Allow-Origin` header.
pub fn cors_layer(origins: &AllowedOrigins, allow_credentials: bool) -> CorsLayer {
    let allow_origin = match origins {
        AllowedOrigins::Any => {
            warn!("CORS allows any origin; restrict the allowed origins in production");
            AllowOrigin::mirror_request()
        }
        AllowedOrigins::List(list) => AllowOrigin::list(list.iter().cloned()),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(allow_credentials)
}

/// Wraps `router` with CORS, request id and tracing layers.
///
/// The request id is set before the trace span is created so every log line
/// of a request carries it.
pub fn apply_middleware_stack<S>(router: Router<S>, config: &AppConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(cors_layer(&config.allowed_origins, config.allow_credentials))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestId>()
                        .and_then(|id| id.header_value().to_str().ok())
                        .unwrap_or("-");
                    info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
