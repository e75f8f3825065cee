//! Responses for requests that do not reach a cart handler.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use domain::CartError;

use crate::error::ApiError;

/// Any path outside the route table.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// A known path requested with a method it does not serve.
pub async fn method_not_allowed() -> ApiError {
    ApiError::Cart(CartError::InvalidRequestMethod)
}

/// Renders a handler panic as a 500 response.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(format!("handler panicked: {details}")).into_response()
}
