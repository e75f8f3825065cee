//! Cart service providing creation and retrieval of carts.

use cart_store::CartStore;
use common::{Cart, CartId};

use crate::error::{CartError, store_failure};

/// Service for creating and viewing carts.
pub struct CartService<S: CartStore> {
    store: S,
}

impl<S: CartStore> CartService<S> {
    /// Creates a new cart service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a new, empty cart.
    #[tracing::instrument(skip(self))]
    pub async fn create_cart(&self) -> Result<Cart, CartError> {
        let cart = self
            .store
            .create_cart()
            .await
            .map_err(store_failure(CartError::PersistenceOperationFailed, "create_cart"))?;

        metrics::counter!("carts_created_total").increment(1);
        tracing::debug!(cart_id = %cart.id, "cart created");
        Ok(cart)
    }

    /// Loads a cart together with all of its items.
    ///
    /// Items are re-read on every call; nothing is cached between views.
    #[tracing::instrument(skip(self))]
    pub async fn view_cart(&self, cart_id: &CartId) -> Result<Cart, CartError> {
        let mut cart = self
            .store
            .get_cart(cart_id)
            .await
            .map_err(store_failure(CartError::RetrieveCartFailed, "get_cart"))?
            .ok_or(CartError::CartNotFound)?;

        cart.items = self
            .store
            .get_items(cart_id)
            .await
            .map_err(store_failure(CartError::RetrieveItemsFailed, "get_items"))?;

        Ok(cart)
    }
}
