//! Persistence for carts and cart items.
//!
//! [`CartStore`] is the storage-facing contract the domain layer depends on.
//! Two adapters implement it: [`InMemoryCartStore`] for tests and local runs,
//! and [`PostgresCartStore`], which also acts as the storage provider by
//! connecting and migrating the database in [`PostgresCartStore::open`].

pub mod config;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use common::{Cart, CartId, CartItem, CartItemId, NewCartItem};
pub use config::DatabaseConfig;
pub use error::{Result, StoreError};
pub use memory::InMemoryCartStore;
pub use postgres::PostgresCartStore;
pub use store::CartStore;
