//! Cart aggregate services.

mod item_service;
mod service;

pub use item_service::CartItemService;
pub use service::CartService;
