//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::CartError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// A cart operation failed.
    Cart(CartError),
    /// No route matches the request path.
    RouteNotFound,
    /// Internal server error.
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Cart(err) => cart_error_status(err),
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Cart(err) => err.code(),
            ApiError::RouteNotFound => "ROUTE_NOT_FOUND",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = match self {
            ApiError::Cart(err) => {
                if err.is_persistence_failure() {
                    tracing::warn!(code, "request failed in the cart store");
                } else {
                    tracing::debug!(code, "request rejected");
                }
                err.to_string()
            }
            ApiError::RouteNotFound => "route not found".to_string(),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                "internal server error".to_string()
            }
        };

        metrics::counter!("cart_errors_total", "kind" => code).increment(1);

        let body = serde_json::json!({ "error": message, "code": code });
        (status, axum::Json(body)).into_response()
    }
}

fn cart_error_status(err: &CartError) -> StatusCode {
    match err {
        CartError::InvalidRequestMethod => StatusCode::METHOD_NOT_ALLOWED,
        CartError::InvalidRequestBody
        | CartError::InvalidQuery
        | CartError::CartIdRequired
        | CartError::ItemIdRequired => StatusCode::BAD_REQUEST,
        CartError::CartNotFound
        | CartError::RetrieveCartFailed
        | CartError::RetrieveItemsFailed => StatusCode::NOT_FOUND,
        CartError::PersistenceOperationFailed => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        ApiError::Cart(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_errors_map_to_fixed_statuses() {
        let cases = [
            (CartError::InvalidRequestMethod, StatusCode::METHOD_NOT_ALLOWED),
            (CartError::InvalidRequestBody, StatusCode::BAD_REQUEST),
            (CartError::InvalidQuery, StatusCode::BAD_REQUEST),
            (CartError::CartIdRequired, StatusCode::BAD_REQUEST),
            (CartError::ItemIdRequired, StatusCode::BAD_REQUEST),
            (CartError::CartNotFound, StatusCode::NOT_FOUND),
            (CartError::RetrieveCartFailed, StatusCode::NOT_FOUND),
            (CartError::RetrieveItemsFailed, StatusCode::NOT_FOUND),
            (
                CartError::PersistenceOperationFailed,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status, "{err:?}");
        }
    }

    #[test]
    fn internal_errors_hide_details() {
        let response = ApiError::Internal("pool exhausted".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn view_failures_keep_distinct_codes() {
        let cart = ApiError::from(CartError::RetrieveCartFailed);
        let items = ApiError::from(CartError::RetrieveItemsFailed);
        assert_eq!(cart.status(), items.status());
        assert_eq!(cart.code(), "RETRIEVE_CART_FAILED");
        assert_eq!(items.code(), "RETRIEVE_ITEMS_FAILED");
    }

    #[test]
    fn route_not_found_code() {
        assert_eq!(ApiError::RouteNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::RouteNotFound.code(), "ROUTE_NOT_FOUND");
    }
}
