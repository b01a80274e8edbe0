use futures::future::join_all;
use log::{debug, error};
use crate::storefront::api::BookstoreApi;
use crate::storefront::controller::ViewController;
use crate::storefront::model::book::BookId;
use crate::storefront::model::cart::{AddCartItemRequest, CartItemId, UpdateCartItemRequest};

const ADD_TO_CART_FAILED_MSG: &str = "Failed to add book to cart";
const LOAD_CART_FAILED_MSG: &str = "Failed to load cart items";
const UPDATE_QUANTITY_FAILED_MSG: &str = "Failed to update quantity";
const REMOVE_ITEM_FAILED_MSG: &str = "Failed to remove item";

impl<A: BookstoreApi> ViewController<A> {
    /// Put one copy of a book in the cart
    pub async fn add_to_cart(&mut self, book_id: BookId) {
        let req = AddCartItemRequest { book_id, quantity: 1 };
        match self.api.add_cart_item(&req).await {
            Ok(()) => {
                self.show_success("Book added to cart");
                self.load_cart_items().await; // the cache is stale now
            }
            Err(e) => {
                self.show_error(ADD_TO_CART_FAILED_MSG);
                error!("Error adding book={} to cart: {}", book_id, e);
            }
        }
    }

    /// Refetch the cart, then redraw the lines, the total and the count
    pub async fn load_cart_items(&mut self) {
        match self.api.list_cart_items().await {
            Ok(items) => {
                debug!("cart holds {} items", items.len());
                self.state.replace_cart(items);
                self.display_cart_items().await;
                self.update_cart_total().await;
                self.update_cart_count();
            }
            Err(e) => {
                self.show_error(LOAD_CART_FAILED_MSG);
                error!("Error loading cart: {}", e);
            }
        }
    }

    pub async fn update_cart_item_quantity(&mut self, item_id: CartItemId, quantity: i32) {
        let req = UpdateCartItemRequest { quantity };
        match self.api.update_cart_item(item_id, &req).await {
            Ok(()) => self.load_cart_items().await,
            Err(e) => {
                self.show_error(UPDATE_QUANTITY_FAILED_MSG);
                error!("Error updating quantity of cart item={}: {}", item_id, e);
            }
        }
    }

    pub async fn remove_cart_item(&mut self, item_id: CartItemId) {
        match self.api.remove_cart_item(item_id).await {
            Ok(()) => {
                self.load_cart_items().await;
                self.show_success("Item removed from cart");
            }
            Err(e) => {
                self.show_error(REMOVE_ITEM_FAILED_MSG);
                error!("Error removing cart item={}: {}", item_id, e);
            }
        }
    }

    /// Only logs on failure, the previous total stays on screen.
    pub async fn update_cart_total(&mut self) {
        match self.api.cart_total().await {
            Ok(total) => self.document.cart_total = format!("{:.2}", total),
            Err(e) => error!("Error updating cart total: {}", e),
        }
    }

    /// Sum of quantities over the cached cart, no request involved
    pub fn update_cart_count(&mut self) {
        self.document.cart_count = self.state.cart_count().to_string();
    }

    /// Lines whose book cannot be fetched are dropped from the markup.
    pub(super) async fn display_cart_items(&mut self) {
        let api = &self.api;
        let items = self.state.cart_items();
        let lookups = join_all(items.iter().map(|item| async move {
            (item, api.get_book(item.book_id).await)
        }))
            .await;
        let lines = lookups.into_iter()
            .filter_map(|(item, found)| match found {
                Ok(book) => Some((item, book)),
                Err(e) => {
                    error!("Error loading book={} for cart item={}: {}", item.book_id, item.id, e);
                    None
                }
            })
            .collect::<Vec<_>>();
        let rendered = self.renderer.cart_items(items.is_empty(), &lines);
        Self::paint(&mut self.document.cart_items, rendered);
    }
}
