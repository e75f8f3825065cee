//! Identifiers and data model shared by every layer of the cart service.

pub mod model;
pub mod types;

pub use model::{Cart, CartItem, NewCartItem};
pub use types::{CartId, CartItemId};
