//! HTTP API server for the cart service.
//!
//! Exposes cart creation, retrieval, and line item management over REST,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use cart_store::CartStore;
use domain::{CartItemService, CartService};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::catch_panic::CatchPanicLayer;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use routes::carts::AppState;

/// The application service: the router behind trailing-slash normalization.
pub type App = NormalizePath<Router>;

/// Creates the Axum application router with all routes and shared state.
///
/// Leading and trailing slashes are trimmed before routing, so `/carts/` is
/// `/carts`. Interior empty segments (`/carts//items`) are kept and rejected.
///
/// Dropping a request's future (client gone, or `request_timeout` elapsed)
/// drops the in-flight store call with it.
pub fn create_app<S: CartStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
    request_timeout: Duration,
) -> App {
    use routes::{carts, fallback, system};

    let metrics_router = Router::new()
        .route("/metrics", get(system::metrics))
        .with_state(metrics_handle);

    let router = Router::new()
        .route("/health", get(system::health))
        .route("/carts", post(carts::create::<S>))
        .route("/carts/{cart_id}", get(carts::view::<S>))
        .route("/carts/{cart_id}/items", post(carts::add_item::<S>))
        .route(
            "/carts/{cart_id}/items/{item_id}",
            delete(carts::remove_item::<S>),
        )
        .route("/carts//items", post(carts::add_item_missing_cart_id))
        .route(
            "/carts//items/{item_id}",
            delete(carts::remove_item_missing_cart_id),
        )
        .with_state(state)
        .merge(metrics_router)
        .fallback(fallback::route_not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(CatchPanicLayer::custom(fallback::handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Creates the application state, sharing one store between both services.
pub fn create_default_state<S: CartStore + Clone + 'static>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState {
        cart_service: CartService::new(store.clone()),
        cart_item_service: CartItemService::new(store),
    })
}
