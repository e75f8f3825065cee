use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Cart, CartId, CartItem, CartItemId, NewCartItem, Result, store::CartStore};

/// In-memory cart store implementation for testing.
///
/// This implementation keeps carts and items in memory and provides
/// the same interface as the PostgreSQL implementation.
#[derive(Clone, Default)]
pub struct InMemoryCartStore {
    carts: Arc<RwLock<HashSet<CartId>>>,
    items: Arc<RwLock<Vec<CartItem>>>,
}

impl InMemoryCartStore {
    /// Creates a new empty in-memory cart store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of carts stored.
    pub async fn cart_count(&self) -> usize {
        self.carts.read().await.len()
    }

    /// Returns the total number of items stored across all carts.
    pub async fn item_count(&self) -> usize {
        self.items.read().await.len()
    }

    /// Clears all carts and items.
    pub async fn clear(&self) {
        self.carts.write().await.clear();
        self.items.write().await.clear();
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn create_cart(&self) -> Result<Cart> {
        let id = CartId::generate();
        self.carts.write().await.insert(id.clone());
        Ok(Cart::empty(id))
    }

    async fn get_cart(&self, cart_id: &CartId) -> Result<Option<Cart>> {
        let carts = self.carts.read().await;
        Ok(carts.get(cart_id).cloned().map(Cart::empty))
    }

    async fn get_items(&self, cart_id: &CartId) -> Result<Vec<CartItem>> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|item| &item.cart_id == cart_id)
            .cloned()
            .collect())
    }

    async fn create_item(&self, item: NewCartItem) -> Result<CartItem> {
        let item = item.with_id(CartItemId::generate());
        self.items.write().await.push(item.clone());
        Ok(item)
    }

    async fn cart_exists(&self, cart_id: &CartId) -> Result<bool> {
        Ok(self.carts.read().await.contains(cart_id))
    }

    async fn delete_item(&self, cart_id: &CartId, item_id: &CartItemId) -> Result<u64> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| !(&item.id == item_id && &item.cart_id == cart_id));
        Ok((before - items.len()) as u64)
    }
}
