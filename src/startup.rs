use crate::{config::ApplicationSettings, error::StartupError, routes};
use axum::{
    body::Body,
    http::Request,
    routing::{get, IntoMakeService},
    Router, Server,
};
use hyper::server::conn::AddrIncoming;
use std::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::MakeRequestUuid,
    trace::{DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// The server future returned by [`run`]. It resolves only if the accept loop fails.
pub type StubServer = Server<AddrIncoming, IntoMakeService<Router>>;

/// Builds the route table. Paths other than `/` and `/health` fall through to axum's default
/// `404`, and non-GET methods on those two paths get a `405` with an `Allow` header.
///
/// Every request span records the `x-request-id` the caller sent (or the one generated for it).
/// With `debug` set, request and response headers are recorded as well.
pub fn router(debug: bool) -> Router {
    // The id is set before `TraceLayer` sees the request, so the span always has one. See:
    // https://docs.rs/tower-http/latest/tower_http/request_id/index.html#using-trace
    let trace_layer = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        // Log requests and responses.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(move |request: &Request<Body>| request_span(request, debug))
                .on_response(DefaultOnResponse::new().include_headers(debug)),
        )
        // Propagate the header to the response before the response reaches `TraceLayer`.
        .propagate_x_request_id();

    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .layer(trace_layer)
}

fn request_span(request: &Request<Body>, debug: bool) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if debug {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
            request_id,
            headers = ?request.headers(),
        )
    } else {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
            request_id,
        )
    }
}

/// Binds the configured address. The error names the port so the diagnostic printed by `main` is
/// actionable.
pub fn bind(settings: &ApplicationSettings) -> Result<TcpListener, StartupError> {
    let address = settings.address();
    TcpListener::bind(&address).map_err(|source| StartupError::Bind {
        address,
        port: settings.port,
        source,
    })
}

/// Serves [`router`] on an already bound listener. The returned future must be awaited (or
/// spawned) for requests to be answered.
pub fn run(listener: TcpListener, debug: bool) -> Result<StubServer, StartupError> {
    let app = router(debug);

    // Run it with hyper on the given TcpListener.
    Ok(axum::Server::from_tcp(listener)?.serve(app.into_make_service()))
}
