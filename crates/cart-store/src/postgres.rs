use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgPoolOptions, postgres::PgRow};

use crate::{
    Cart, CartId, CartItem, CartItemId, DatabaseConfig, NewCartItem, Result, store::CartStore,
};

/// PostgreSQL-backed cart store implementation.
#[derive(Clone)]
pub struct PostgresCartStore {
    pool: PgPool,
}

impl PostgresCartStore {
    /// Creates a new PostgreSQL cart store over an existing pool.
    ///
    /// The schema is assumed to be migrated already; use [`Self::open`]
    /// when that is not the case.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the database described by `config` and applies pending
    /// migrations before handing back a ready-to-use store.
    #[tracing::instrument(skip_all, fields(host = %config.host, db = %config.name))]
    pub async fn open(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(config.connect_options())
            .await?;

        let store = Self::new(pool);
        store.run_migrations().await?;
        tracing::info!("database connected and migrations applied");

        Ok(store)
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    fn row_to_item(row: PgRow) -> Result<CartItem> {
        Ok(CartItem {
            id: CartItemId::new(row.try_get::<String, _>("id")?),
            cart_id: CartId::new(row.try_get::<String, _>("cart_id")?),
            product: row.try_get("product")?,
            quantity: row.try_get("quantity")?,
        })
    }
}

#[async_trait]
impl CartStore for PostgresCartStore {
    async fn create_cart(&self) -> Result<Cart> {
        let id = CartId::generate();

        sqlx::query("INSERT INTO carts (id) VALUES ($1)")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(Cart::empty(id))
    }

    async fn get_cart(&self, cart_id: &CartId) -> Result<Option<Cart>> {
        let row: Option<PgRow> = sqlx::query("SELECT id FROM carts WHERE id = $1")
            .bind(cart_id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Cart::empty(CartId::new(
                row.try_get::<String, _>("id")?,
            )))),
            None => Ok(None),
        }
    }

    async fn get_items(&self, cart_id: &CartId) -> Result<Vec<CartItem>> {
        let rows = sqlx::query(
            r#"
            SELECT id, cart_id, product, quantity
            FROM cart_items
            WHERE cart_id = $1
            ORDER BY seq ASC
            "#,
        )
        .bind(cart_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_item).collect()
    }

    async fn create_item(&self, item: NewCartItem) -> Result<CartItem> {
        let item = item.with_id(CartItemId::generate());

        sqlx::query(
            r#"
            INSERT INTO cart_items (id, cart_id, product, quantity)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(item.id.as_str())
        .bind(item.cart_id.as_str())
        .bind(&item.product)
        .bind(item.quantity)
        .execute(&self.pool)
        .await?;

        Ok(item)
    }

    async fn cart_exists(&self, cart_id: &CartId) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM carts WHERE id = $1)")
            .bind(cart_id.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn delete_item(&self, cart_id: &CartId, item_id: &CartItemId) -> Result<u64> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = $1 AND cart_id = $2")
            .bind(item_id.as_str())
            .bind(cart_id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
