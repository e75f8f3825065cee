//! Domain error types.

use cart_store::StoreError;
use thiserror::Error;

/// Every failure a cart operation can report.
///
/// Messages are stable and safe to show to clients. Storage errors never
/// appear here directly; they are logged and replaced by one of the
/// persistence kinds at the service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartError {
    /// The HTTP method is not allowed for the matched route.
    #[error("invalid request method")]
    InvalidRequestMethod,

    /// The request body does not decode into the expected shape.
    #[error("invalid request body")]
    InvalidRequestBody,

    /// A required path segment is missing.
    #[error("invalid query")]
    InvalidQuery,

    #[error("cartID is required")]
    CartIdRequired,

    #[error("itemID is required")]
    ItemIdRequired,

    /// No cart exists with the given ID.
    #[error("cart doesn't exist")]
    CartNotFound,

    /// Reading the cart record failed.
    #[error("failed to retrieve cart")]
    RetrieveCartFailed,

    /// Reading the cart's items failed.
    #[error("failed to retrieve cart items")]
    RetrieveItemsFailed,

    /// A write against the store failed.
    #[error("failed to make a query to the database")]
    PersistenceOperationFailed,
}

impl CartError {
    /// Machine-readable code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            CartError::InvalidRequestMethod => "INVALID_REQUEST_METHOD",
            CartError::InvalidRequestBody => "INVALID_REQUEST_BODY",
            CartError::InvalidQuery => "INVALID_QUERY",
            CartError::CartIdRequired => "CART_ID_REQUIRED",
            CartError::ItemIdRequired => "ITEM_ID_REQUIRED",
            CartError::CartNotFound => "CART_NOT_FOUND",
            CartError::RetrieveCartFailed => "RETRIEVE_CART_FAILED",
            CartError::RetrieveItemsFailed => "RETRIEVE_ITEMS_FAILED",
            CartError::PersistenceOperationFailed => "PERSISTENCE_OPERATION_FAILED",
        }
    }

    /// True for the kinds caused by a failing store rather than by the caller.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            CartError::RetrieveCartFailed
                | CartError::RetrieveItemsFailed
                | CartError::PersistenceOperationFailed
        )
    }
}

/// Returns a mapper that logs a store error and replaces it with `kind`.
pub(crate) fn store_failure(
    kind: CartError,
    operation: &'static str,
) -> impl FnOnce(StoreError) -> CartError {
    move |err| {
        tracing::error!(error = %err, operation, code = kind.code(), "cart store operation failed");
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(CartError::CartNotFound.to_string(), "cart doesn't exist");
        assert_eq!(CartError::CartIdRequired.to_string(), "cartID is required");
        assert_eq!(CartError::ItemIdRequired.to_string(), "itemID is required");
        assert_eq!(
            CartError::InvalidRequestBody.to_string(),
            "invalid request body"
        );
    }

    #[test]
    fn persistence_kinds_are_flagged() {
        assert!(CartError::RetrieveCartFailed.is_persistence_failure());
        assert!(CartError::RetrieveItemsFailed.is_persistence_failure());
        assert!(CartError::PersistenceOperationFailed.is_persistence_failure());
        assert!(!CartError::CartNotFound.is_persistence_failure());
        assert!(!CartError::InvalidQuery.is_persistence_failure());
    }

    #[test]
    fn store_failure_replaces_error_with_kind() {
        let map = store_failure(CartError::RetrieveItemsFailed, "get_items");
        let err = map(StoreError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(err, CartError::RetrieveItemsFailed);
        assert_eq!(err.code(), "RETRIEVE_ITEMS_FAILED");
    }
}
