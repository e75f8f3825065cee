use async_trait::async_trait;

use crate::{Cart, CartId, CartItem, CartItemId, NewCartItem, Result};

/// Core trait for cart persistence.
///
/// Carts and items are independent records joined by `cart_id`. Nothing here
/// checks that an item's cart exists; callers that need the guarantee ask
/// [`CartStore::cart_exists`] first.
///
/// Dropping a returned future abandons the underlying storage operation, so
/// request cancellation propagates without an explicit context argument.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Allocates a new cart record and returns it with no items.
    async fn create_cart(&self) -> Result<Cart>;

    /// Fetches the cart record by ID, without its items.
    ///
    /// Returns None if no such cart exists.
    async fn get_cart(&self, cart_id: &CartId) -> Result<Option<Cart>>;

    /// Retrieves every item whose `cart_id` matches, in insertion order.
    async fn get_items(&self, cart_id: &CartId) -> Result<Vec<CartItem>>;

    /// Stores a new item, assigning its ID.
    async fn create_item(&self, item: NewCartItem) -> Result<CartItem>;

    /// Checks whether a cart with the given ID exists.
    async fn cart_exists(&self, cart_id: &CartId) -> Result<bool>;

    /// Deletes the item matching both `item_id` and `cart_id`.
    ///
    /// Returns the number of rows removed; zero is not an error.
    async fn delete_item(&self, cart_id: &CartId, item_id: &CartItemId) -> Result<u64>;
}
