use crate::storefront::model::book::Book;
use crate::storefront::model::cart::{total_quantity, CartItem};

/// What the storefront last fetched. Both caches are replaced wholesale by
/// every successful fetch, never merged.
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    current_books: Vec<Book>,
    cart_items: Vec<CartItem>,
}

impl StoreState {
    pub fn current_books(&self) -> &[Book] {
        &self.current_books
    }

    pub fn cart_items(&self) -> &[CartItem] {
        &self.cart_items
    }

    pub fn replace_books(&mut self, books: Vec<Book>) {
        self.current_books = books;
    }

    pub fn replace_cart(&mut self, items: Vec<CartItem>) {
        self.cart_items = items;
    }

    pub fn clear_cart(&mut self) {
        self.cart_items.clear();
    }

    pub fn cart_count(&self) -> i64 {
        total_quantity(&self.cart_items)
    }
}
