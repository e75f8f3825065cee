//! Cart and cart item endpoints.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use cart_store::CartStore;
use common::{Cart, CartId, CartItem, CartItemId, NewCartItem};
use domain::{CartError, CartItemService, CartService};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: CartStore> {
    pub cart_service: CartService<S>,
    pub cart_item_service: CartItemService<S>,
}

// -- Path parameters --

#[derive(Debug, Deserialize)]
pub struct CartPath {
    pub cart_id: String,
}

#[derive(Debug, Deserialize)]
pub struct CartItemPath {
    pub cart_id: String,
    pub item_id: String,
}

impl CartPath {
    /// Validates the cart segment, reporting `missing` when it is empty.
    fn cart_id(self, missing: CartError) -> Result<CartId, CartError> {
        non_empty(self.cart_id, missing).map(CartId::from)
    }
}

impl CartItemPath {
    fn ids(self) -> Result<(CartId, CartItemId), CartError> {
        let cart_id = non_empty(self.cart_id, CartError::CartIdRequired)?;
        let item_id = non_empty(self.item_id, CartError::ItemIdRequired)?;
        Ok((CartId::from(cart_id), CartItemId::from(item_id)))
    }
}

fn non_empty(segment: String, missing: CartError) -> Result<String, CartError> {
    if segment.is_empty() {
        Err(missing)
    } else {
        Ok(segment)
    }
}

fn path_params<T>(path: Result<Path<T>, PathRejection>) -> Result<T, ApiError> {
    path.map(|Path(params)| params).map_err(|rejection| {
        tracing::debug!(error = %rejection, "path parameters rejected");
        ApiError::Cart(CartError::InvalidQuery)
    })
}

// -- Request types --

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product: String,
    pub quantity: i32,
}

// -- Response types --

#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub id: String,
    pub items: Vec<CartItemResponse>,
}

#[derive(Debug, Serialize)]
pub struct CartItemResponse {
    pub id: String,
    pub cart_id: String,
    pub product: String,
    pub quantity: i32,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id.to_string(),
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
        }
    }
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id.to_string(),
            cart_id: item.cart_id.to_string(),
            product: item.product,
            quantity: item.quantity,
        }
    }
}

// -- Handlers --

/// POST /carts — create a new, empty cart.
#[tracing::instrument(skip(state))]
pub async fn create<S: CartStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<(StatusCode, Json<CartResponse>), ApiError> {
    let cart = state.cart_service.create_cart().await?;
    Ok((StatusCode::CREATED, Json(cart.into())))
}

/// GET /carts/{cart_id} — load a cart with all of its items.
#[tracing::instrument(skip(state))]
pub async fn view<S: CartStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    path: Result<Path<CartPath>, PathRejection>,
) -> Result<Json<CartResponse>, ApiError> {
    let cart_id = path_params(path)?.cart_id(CartError::CartIdRequired)?;
    let cart = state.cart_service.view_cart(&cart_id).await?;
    Ok(Json(cart.into()))
}

/// POST /carts/{cart_id}/items — add a line item to a cart.
///
/// The body is decoded as JSON whatever its declared content type.
#[tracing::instrument(skip(state, body))]
pub async fn add_item<S: CartStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    path: Result<Path<CartPath>, PathRejection>,
    body: Bytes,
) -> Result<Json<CartItemResponse>, ApiError> {
    let cart_id = path_params(path)?.cart_id(CartError::InvalidQuery)?;

    let req: AddItemRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "item body rejected");
        CartError::InvalidRequestBody
    })?;

    let item = state
        .cart_item_service
        .add_item(NewCartItem::new(cart_id, req.product, req.quantity))
        .await?;

    Ok(Json(item.into()))
}

/// DELETE /carts/{cart_id}/items/{item_id} — remove a line item from a cart.
#[tracing::instrument(skip(state))]
pub async fn remove_item<S: CartStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    path: Result<Path<CartItemPath>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let (cart_id, item_id) = path_params(path)?.ids()?;
    state
        .cart_item_service
        .remove_item(&cart_id, &item_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// -- Empty path segments --
//
// `{cart_id}` never matches an empty segment, so these paths are listed in the
// route table explicitly and rejected before any service call.

/// POST /carts//items
pub async fn add_item_missing_cart_id() -> ApiError {
    CartError::InvalidQuery.into()
}

/// DELETE /carts//items/{item_id}
pub async fn remove_item_missing_cart_id() -> ApiError {
    CartError::CartIdRequired.into()
}
