//! Cart item service: adding and removing line items.

use cart_store::CartStore;
use common::{CartId, CartItem, CartItemId, NewCartItem};

use crate::error::{CartError, store_failure};

/// Service for adding items to and removing items from carts.
///
/// Adding is a single insert and does not check that the cart exists.
/// Removing checks existence first and only then deletes, scoped to the cart.
pub struct CartItemService<S: CartStore> {
    store: S,
}

impl<S: CartStore> CartItemService<S> {
    /// Creates a new cart item service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stores a new item and returns it with its assigned ID.
    #[tracing::instrument(skip(self), fields(cart_id = %item.cart_id))]
    pub async fn add_item(&self, item: NewCartItem) -> Result<CartItem, CartError> {
        let item = self
            .store
            .create_item(item)
            .await
            .map_err(store_failure(CartError::PersistenceOperationFailed, "create_item"))?;

        metrics::counter!("cart_items_added_total").increment(1);
        tracing::debug!(item_id = %item.id, "item added to cart");
        Ok(item)
    }

    /// Removes an item from a cart.
    ///
    /// Fails with [`CartError::CartNotFound`] without touching any items when
    /// the cart does not exist. Removing an item that is already gone succeeds.
    #[tracing::instrument(skip(self))]
    pub async fn remove_item(
        &self,
        cart_id: &CartId,
        item_id: &CartItemId,
    ) -> Result<(), CartError> {
        let exists = self
            .store
            .cart_exists(cart_id)
            .await
            .map_err(store_failure(CartError::PersistenceOperationFailed, "cart_exists"))?;

        if !exists {
            return Err(CartError::CartNotFound);
        }

        let removed = self
            .store
            .delete_item(cart_id, item_id)
            .await
            .map_err(store_failure(CartError::PersistenceOperationFailed, "delete_item"))?;

        if removed == 0 {
            tracing::debug!("item already absent, nothing removed");
        } else {
            metrics::counter!("cart_items_removed_total").increment(removed);
        }

        Ok(())
    }
}
