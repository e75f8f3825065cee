//! Domain layer for the cart service.
//!
//! This crate provides:
//! - `CartError`, the error taxonomy shared by the service and HTTP layers
//! - `CartService` for creating and viewing carts
//! - `CartItemService` for adding and removing line items

pub mod cart;
pub mod error;

pub use cart::{CartItemService, CartService};
pub use common::{Cart, CartId, CartItem, CartItemId, NewCartItem};
pub use error::CartError;
