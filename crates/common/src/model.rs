//! Cart aggregate and line item records.

use serde::{Deserialize, Serialize};

use crate::{CartId, CartItemId};

/// A shopping cart with the items currently attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub id: CartId,
    /// Items in insertion order.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a cart with no items.
    pub fn empty(id: CartId) -> Self {
        Self {
            id,
            items: Vec::new(),
        }
    }

    /// Returns true if the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A single product line attached to a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub cart_id: CartId,
    pub product: String,
    pub quantity: i32,
}

/// An item that has not been stored yet. The store assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub cart_id: CartId,
    pub product: String,
    pub quantity: i32,
}

impl NewCartItem {
    pub fn new(cart_id: CartId, product: impl Into<String>, quantity: i32) -> Self {
        Self {
            cart_id,
            product: product.into(),
            quantity,
        }
    }

    /// Attaches a store-assigned ID, producing the persisted record.
    pub fn with_id(self, id: CartItemId) -> CartItem {
        CartItem {
            id,
            cart_id: self.cart_id,
            product: self.product,
            quantity: self.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cart_serializes_with_empty_items_array() {
        let cart = Cart::empty(CartId::new("c1"));
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "c1", "items": [] }));
    }

    #[test]
    fn cart_item_wire_shape() {
        let item = NewCartItem::new(CartId::new("c1"), "Apple", 2).with_id(CartItemId::new("i1"));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "i1",
                "cart_id": "c1",
                "product": "Apple",
                "quantity": 2
            })
        );
    }
}
