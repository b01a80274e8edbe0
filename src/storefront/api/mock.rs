use std::cell::{Cell, RefCell};
use crate::storefront::api::BookstoreApi;
use crate::storefront::api::error::ApiError;
use crate::storefront::model::book::{Book, BookId, NewBook};
use crate::storefront::model::cart::{AddCartItemRequest, CartItem, CartItemId, UpdateCartItemRequest};
use crate::storefront::model::order::{Order, OrderId, OrderRequest};

/// for test
///
/// Keeps one shopper's catalogue and cart in memory. Endpoints named in
/// `failing` answer with a 500 instead.
#[derive(Default)]
pub(crate) struct MockApi {
    pub books: RefCell<Vec<Book>>,
    pub cart: RefCell<Vec<CartItem>>,
    pub orders: RefCell<Vec<Order>>,
    pub calls: RefCell<Vec<String>>,
    failing: RefCell<Vec<&'static str>>,
    next_id: Cell<i64>,
}

impl MockApi {
    pub fn with_books(books: Vec<Book>) -> Self {
        let api = Self::default();
        api.next_id.set(1000);
        *api.books.borrow_mut() = books;
        api
    }

    pub fn fail(&self, endpoint: &'static str) {
        self.failing.borrow_mut().push(endpoint);
    }

    pub fn put_in_cart(&self, book_id: BookId, quantity: i32) -> CartItemId {
        let id = self.next_id();
        self.cart.borrow_mut().push(CartItem { id, book_id, quantity });
        id
    }

    fn next_id(&self) -> i64 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn priced_cart(&self) -> f64 {
        let books = self.books.borrow();
        self.cart.borrow()
            .iter()
            .filter_map(|i| books.iter().find(|b| b.id == i.book_id).map(|b| b.price * f64::from(i.quantity)))
            .sum()
    }

    fn call(&self, endpoint: &'static str) -> Result<(), ApiError> {
        println!("{} mock api", endpoint);
        self.calls.borrow_mut().push(endpoint.to_string());
        if self.failing.borrow().contains(&endpoint) {
            return Err(ApiError::Status { status: 500 });
        }
        Ok(())
    }
}

impl BookstoreApi for MockApi {
    async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        self.call("GET /books")?;
        Ok(self.books.borrow().clone())
    }

    async fn search_books(&self, query: &str) -> Result<Vec<Book>, ApiError> {
        self.call("GET /books/search")?;
        let needle = query.to_lowercase();
        Ok(self.books.borrow()
            .iter()
            .filter(|b| b.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn get_book(&self, id: BookId) -> Result<Book, ApiError> {
        self.call("GET /books/{id}")?;
        self.books.borrow()
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(ApiError::Status { status: 404 })
    }

    async fn create_book(&self, book: &NewBook) -> Result<(), ApiError> {
        self.call("POST /books")?;
        let id = self.next_id();
        self.books.borrow_mut().push(book.clone().into_book(id));
        Ok(())
    }

    async fn list_cart_items(&self) -> Result<Vec<CartItem>, ApiError> {
        self.call("GET /cart")?;
        Ok(self.cart.borrow().clone())
    }

    async fn add_cart_item(&self, req: &AddCartItemRequest) -> Result<(), ApiError> {
        self.call("POST /cart")?;
        self.put_in_cart(req.book_id, req.quantity);
        Ok(())
    }

    async fn update_cart_item(&self, id: CartItemId, req: &UpdateCartItemRequest) -> Result<(), ApiError> {
        self.call("PUT /cart/{id}")?;
        match self.cart.borrow_mut().iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.quantity = req.quantity;
                Ok(())
            }
            None => Err(ApiError::Status { status: 404 }),
        }
    }

    async fn remove_cart_item(&self, id: CartItemId) -> Result<(), ApiError> {
        self.call("DELETE /cart/{id}")?;
        self.cart.borrow_mut().retain(|i| i.id != id);
        Ok(())
    }

    async fn cart_total(&self) -> Result<f64, ApiError> {
        self.call("GET /cart/total")?;
        Ok(self.priced_cart())
    }

    async fn place_order(&self, req: &OrderRequest) -> Result<Order, ApiError> {
        self.call("POST /orders")?;
        if self.cart.borrow().is_empty() {
            return Err(ApiError::Status { status: 400 });
        }
        let order = Order {
            id: self.next_id(),
            customer_name: req.customer_name.clone(),
            customer_email: req.customer_email.clone(),
            customer_address: req.customer_address.clone(),
            order_date: None,
            total_amount: Some(self.priced_cart()),
            status: Some("PENDING".to_string()),
        };
        self.cart.borrow_mut().clear();
        self.orders.borrow_mut().push(order.clone());
        Ok(order)
    }

    async fn get_order(&self, id: OrderId) -> Result<Order, ApiError> {
        self.call("GET /orders/{id}")?;
        self.orders.borrow()
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(ApiError::Status { status: 404 })
    }

    async fn list_customer_orders(&self, email: &str) -> Result<Vec<Order>, ApiError> {
        self.call("GET /orders/customer/{email}")?;
        Ok(self.orders.borrow()
            .iter()
            .filter(|o| o.customer_email == email)
            .cloned()
            .collect())
    }
}
