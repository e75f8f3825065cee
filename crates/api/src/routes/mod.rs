//! HTTP handlers.

pub mod carts;
pub mod fallback;
pub mod system;
