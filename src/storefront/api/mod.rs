//! rest api the storefront talks to

pub(crate) mod error;
pub(crate) mod http;
#[cfg(test)]
pub(crate) mod mock;

use crate::storefront::api::error::ApiError;
use crate::storefront::model::book::{Book, BookId, NewBook};
use crate::storefront::model::cart::{AddCartItemRequest, CartItem, CartItemId, UpdateCartItemRequest};
use crate::storefront::model::order::{Order, OrderId, OrderRequest};

/// Endpoints consumed under the `/api` base path.
///
/// Mutations only report success or failure, their response bodies are never
/// read; the caller reloads whatever it displays.
pub(crate) trait BookstoreApi {
    /// `GET /books`
    async fn list_books(&self) -> Result<Vec<Book>, ApiError>;
    /// `GET /books/search?query=`
    async fn search_books(&self, query: &str) -> Result<Vec<Book>, ApiError>;
    /// `GET /books/{id}`
    async fn get_book(&self, id: BookId) -> Result<Book, ApiError>;
    /// `POST /books`
    async fn create_book(&self, book: &NewBook) -> Result<(), ApiError>;
    /// `GET /cart`
    async fn list_cart_items(&self) -> Result<Vec<CartItem>, ApiError>;
    /// `POST /cart`
    async fn add_cart_item(&self, req: &AddCartItemRequest) -> Result<(), ApiError>;
    /// `PUT /cart/{id}`
    async fn update_cart_item(&self, id: CartItemId, req: &UpdateCartItemRequest) -> Result<(), ApiError>;
    /// `DELETE /cart/{id}`
    async fn remove_cart_item(&self, id: CartItemId) -> Result<(), ApiError>;
    /// `GET /cart/total`
    async fn cart_total(&self) -> Result<f64, ApiError>;
    /// `POST /orders`
    async fn place_order(&self, req: &OrderRequest) -> Result<Order, ApiError>;
    /// `GET /orders/{id}`
    async fn get_order(&self, id: OrderId) -> Result<Order, ApiError>;
    /// `GET /orders/customer/{email}`
    async fn list_customer_orders(&self, email: &str) -> Result<Vec<Order>, ApiError>;
}
