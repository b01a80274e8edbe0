use chrono::TimeDelta;
use derive_more::Display;
use crate::storefront::view::binding::{Action, Binding, Event};
use crate::storefront::view::toast::ToastQueue;

/// Page sections, exactly one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub(crate) enum PageId {
    #[display("home")]
    Home,
    #[display("cart")]
    Cart,
    #[display("checkout")]
    Checkout,
    #[display("admin")]
    Admin,
    #[display("details")]
    Details,
    #[display("order-history")]
    Orders,
}

impl PageId {
    /// id of the section element
    pub fn element_id(&self) -> String {
        format!("{}-page", self)
    }
}

/// A block of the page whose markup is replaced wholesale on render, together
/// with the bindings of the elements inside it.
#[derive(Debug)]
pub(crate) struct Container {
    id: &'static str,
    html: String,
    bindings: Vec<Binding>,
}

impl Container {
    fn new(id: &'static str) -> Self {
        Self { id, html: String::new(), bindings: Vec::new() }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// swap in freshly rendered markup; bindings of the old markup go with it
    pub fn replace(&mut self, html: String, bindings: Vec<Binding>) {
        self.html = html;
        self.bindings = bindings;
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct CheckoutForm {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_address: String,
}

impl CheckoutForm {
    pub const ID: &'static str = "checkout-form";

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Raw input of the admin form; numbers are parsed on submit.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct AddBookForm {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: String,
    pub description: String,
    pub stock: String,
}

impl AddBookForm {
    pub const ID: &'static str = "add-book-form";

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The page the storefront draws into. Every element the controller touches
/// is a field, so none can be missing.
#[derive(Debug)]
pub(crate) struct Document {
    pub books_grid: Container,
    pub cart_items: Container,
    pub book_details: Container,
    pub order_history: Container,
    pub order_details: Container,
    pub cart_count: String,
    pub cart_total: String,
    pub search_input: String,
    /// email typed into the order lookup
    pub order_email: String,
    pub checkout_form: CheckoutForm,
    pub add_book_form: AddBookForm,
    pub toasts: ToastQueue,
    active_page: PageId,
}

impl Document {
    pub fn new(toast_lifetime: TimeDelta) -> Self {
        Self {
            books_grid: Container::new("books-grid"),
            cart_items: Container::new("cart-items"),
            book_details: Container::new("book-details"),
            order_history: Container::new("order-history"),
            order_details: Container::new("order-details"),
            cart_count: "0".to_string(),
            cart_total: "0.00".to_string(),
            search_input: String::new(),
            order_email: String::new(),
            checkout_form: CheckoutForm::default(),
            add_book_form: AddBookForm::default(),
            toasts: ToastQueue::new(toast_lifetime),
            active_page: PageId::Home,
        }
    }

    pub fn active_page(&self) -> PageId {
        self.active_page
    }

    pub fn show_page(&mut self, page: PageId) {
        self.active_page = page;
    }

    /// containers laid out on `page`
    fn containers_of(&self, page: PageId) -> Vec<&Container> {
        match page {
            PageId::Home => vec![&self.books_grid],
            PageId::Cart => vec![&self.cart_items],
            PageId::Details => vec![&self.book_details],
            PageId::Orders => vec![&self.order_history, &self.order_details],
            PageId::Checkout | PageId::Admin => Vec::new(),
        }
    }

    /// Action bound to `target` for this kind of event, if any. Elements of
    /// hidden pages cannot fire.
    pub fn resolve(&self, target: &str, event: &Event) -> Option<Action> {
        let kind = event.kind();
        self.containers_of(self.active_page)
            .into_iter()
            .flat_map(|c| c.bindings.iter())
            .find(|b| b.matches(target, kind))
            .map(|b| b.action)
    }
}
