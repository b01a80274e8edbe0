use rust_embed::RustEmbed;
use serde::Serialize;
use tera::{Context, Tera};
use crate::storefront::model::book::Book;
use crate::storefront::model::cart::CartItem;
use crate::storefront::model::order::Order;
use crate::storefront::view::binding::{
    add_to_cart_target, details_target, order_target, quantity_target, remove_target, Action, Binding,
};

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Asset;

const BOOKS_GRID: &str = "books_grid.html";
const CART_ITEMS: &str = "cart_items.html";
const BOOK_DETAILS: &str = "book_details.html";
const LOADING: &str = "loading.html";
const ORDER_HISTORY: &str = "order_history.html";
const ORDER_DETAILS: &str = "order_details.html";

const NO_DESCRIPTION: &str = "No description available";

/// Markup for one container and the bindings to attach once it is in place.
#[derive(Debug, Default)]
pub(crate) struct Rendered {
    pub html: String,
    pub bindings: Vec<Binding>,
}

#[derive(Debug, Serialize)]
struct BookCard<'a> {
    title: &'a str,
    author: &'a str,
    isbn: Option<&'a str>,
    price: String,
    description: &'a str,
    stock_quantity: i32,
    in_stock: bool,
    details_target: String,
    cart_target: String,
}

impl<'a> From<&'a Book> for BookCard<'a> {
    fn from(book: &'a Book) -> Self {
        Self {
            title: &book.title,
            author: &book.author,
            isbn: book.isbn.as_deref().filter(|isbn| !isbn.is_empty()),
            price: format!("{:.2}", book.price),
            description: book.description
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(NO_DESCRIPTION),
            stock_quantity: book.stock_quantity,
            in_stock: book.in_stock(),
            details_target: details_target(book.id),
            cart_target: add_to_cart_target(book.id),
        }
    }
}

#[derive(Debug, Serialize)]
struct CartLine<'a> {
    title: &'a str,
    author: &'a str,
    price: String,
    quantity: i32,
    quantity_target: String,
    remove_target: String,
}

#[derive(Debug, Serialize)]
struct OrderRow<'a> {
    id: i64,
    date: String,
    status: &'a str,
    total: String,
    customer_name: &'a str,
    customer_email: &'a str,
    customer_address: &'a str,
    details_target: String,
}

impl<'a> From<&'a Order> for OrderRow<'a> {
    fn from(order: &'a Order) -> Self {
        Self {
            id: order.id,
            date: order.order_date
                .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "Unknown date".to_string()),
            status: order.status.as_deref().unwrap_or("PENDING"),
            total: order.total_amount
                .map(|t| format!("${:.2}", t))
                .unwrap_or_else(|| "-".to_string()),
            customer_name: &order.customer_name,
            customer_email: &order.customer_email,
            customer_address: &order.customer_address,
            details_target: order_target(order.id),
        }
    }
}

/// Templating for every container the controller fills. Interpolated values
/// are html-escaped.
pub(crate) struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        for name in [BOOKS_GRID, CART_ITEMS, BOOK_DETAILS, LOADING, ORDER_HISTORY, ORDER_DETAILS] {
            let file = Asset::get(name)
                .ok_or_else(|| tera::Error::msg(format!("template {} is not embedded", name)))?;
            let source = std::str::from_utf8(file.data.as_ref())
                .map_err(|e| tera::Error::msg(format!("template {} is not utf-8, {}", name, e)))?;
            tera.add_raw_template(name, source)?;
        }
        Ok(Self { tera })
    }

    pub fn loading(&self) -> Result<Rendered, tera::Error> {
        Ok(Rendered {
            html: self.tera.render(LOADING, &Context::new())?,
            bindings: Vec::new(),
        })
    }

    pub fn books_grid(&self, books: &[Book]) -> Result<Rendered, tera::Error> {
        let cards = books.iter().map(BookCard::from).collect::<Vec<_>>();
        let mut context = Context::new();
        context.insert("books", &cards);

        let mut bindings = Vec::with_capacity(books.len() * 2);
        for book in books {
            bindings.push(Binding::click(details_target(book.id), Action::ShowDetails { book_id: book.id }));
            if book.in_stock() { // disabled buttons get nothing
                bindings.push(Binding::click(add_to_cart_target(book.id), Action::AddToCart { book_id: book.id }));
            }
        }
        Ok(Rendered {
            html: self.tera.render(BOOKS_GRID, &context)?,
            bindings,
        })
    }

    /// `lines` holds the cart items whose book could be looked up; the
    /// others are left out of the markup.
    pub fn cart_items(&self, cart_is_empty: bool, lines: &[(&CartItem, Book)]) -> Result<Rendered, tera::Error> {
        let views = lines.iter()
            .map(|(item, book)| CartLine {
                title: &book.title,
                author: &book.author,
                price: format!("{:.2}", book.price),
                quantity: item.quantity,
                quantity_target: quantity_target(item.id),
                remove_target: remove_target(item.id),
            })
            .collect::<Vec<_>>();
        let mut context = Context::new();
        context.insert("cart_is_empty", &cart_is_empty);
        context.insert("lines", &views);

        let bindings = lines.iter()
            .flat_map(|(item, _)| [
                Binding::change(quantity_target(item.id), Action::ChangeQuantity { item_id: item.id }),
                Binding::click(remove_target(item.id), Action::RemoveItem { item_id: item.id }),
            ])
            .collect();
        Ok(Rendered {
            html: self.tera.render(CART_ITEMS, &context)?,
            bindings,
        })
    }

    pub fn book_details(&self, book: &Book) -> Result<Rendered, tera::Error> {
        let mut context = Context::new();
        context.insert("book", &BookCard::from(book));
        let bindings = if book.in_stock() {
            vec![Binding::click(add_to_cart_target(book.id), Action::AddToCart { book_id: book.id })]
        } else {
            Vec::new()
        };
        Ok(Rendered {
            html: self.tera.render(BOOK_DETAILS, &context)?,
            bindings,
        })
    }

    pub fn order_history(&self, orders: &[Order]) -> Result<Rendered, tera::Error> {
        let rows = orders.iter().map(OrderRow::from).collect::<Vec<_>>();
        let mut context = Context::new();
        context.insert("orders", &rows);
        let bindings = orders.iter()
            .map(|o| Binding::click(order_target(o.id), Action::ShowOrder { order_id: o.id }))
            .collect();
        Ok(Rendered {
            html: self.tera.render(ORDER_HISTORY, &context)?,
            bindings,
        })
    }

    pub fn order_details(&self, order: &Order) -> Result<Rendered, tera::Error> {
        let mut context = Context::new();
        context.insert("order", &OrderRow::from(order));
        Ok(Rendered {
            html: self.tera.render(ORDER_DETAILS, &context)?,
            bindings: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::view::binding::EventKind;

    fn book(id: i64, title: &str, stock_quantity: i32) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: "Ursula K. Le Guin".to_string(),
            isbn: None,
            price: 12.5,
            description: None,
            stock_quantity,
        }
    }

    #[test]
    fn empty_catalogue_renders_empty_state() {
        let rendered = Renderer::new().unwrap().books_grid(&[]).unwrap();
        assert!(rendered.html.contains("No books found"));
        assert!(rendered.html.contains("Try adjusting your search criteria."));
        assert!(rendered.bindings.is_empty());
    }

    #[test]
    fn out_of_stock_book_gets_a_disabled_button() {
        let renderer = Renderer::new().unwrap();
        let rendered = renderer.books_grid(&[book(1, "Earthsea", 0), book(2, "The Dispossessed", 3)]).unwrap();

        assert!(rendered.html.contains(r#"id="add-to-cart-1" disabled>"#));
        assert!(rendered.html.contains("Out of Stock"));
        assert!(rendered.html.contains(r#"id="add-to-cart-2">"#));
        assert!(rendered.html.contains("Add to Cart"));
        assert!(rendered.html.contains("$12.50"));
        assert!(rendered.html.contains(NO_DESCRIPTION));

        let cart_bindings = rendered.bindings.iter()
            .filter(|b| matches!(b.action, Action::AddToCart { .. }))
            .collect::<Vec<_>>();
        assert_eq!(cart_bindings.len(), 1);
        assert_eq!(cart_bindings[0].target, "add-to-cart-2");
        assert_eq!(cart_bindings[0].kind, EventKind::Click);
    }

    #[test]
    fn interpolated_text_is_escaped() {
        let rendered = Renderer::new().unwrap()
            .books_grid(&[book(1, "<script>alert(1)</script>", 1)])
            .unwrap();
        assert!(!rendered.html.contains("<script>"));
        assert!(rendered.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn cart_lines_bind_quantity_and_remove() {
        let renderer = Renderer::new().unwrap();
        let item = CartItem { id: 9, book_id: 1, quantity: 2 };
        let rendered = renderer.cart_items(false, &[(&item, book(1, "Earthsea", 3))]).unwrap();

        assert!(rendered.html.contains(r#"id="quantity-9" value="2""#));
        assert!(rendered.html.contains("$12.50 each"));
        assert_eq!(rendered.bindings, vec![
            Binding::change("quantity-9".to_string(), Action::ChangeQuantity { item_id: 9 }),
            Binding::click("remove-9".to_string(), Action::RemoveItem { item_id: 9 }),
        ]);

        let empty = renderer.cart_items(true, &[]).unwrap();
        assert!(empty.html.contains("Your cart is empty"));
    }

    #[test]
    fn order_rows_fall_back_when_fields_are_missing() {
        let renderer = Renderer::new().unwrap();
        let empty = renderer.order_history(&[]).unwrap();
        assert!(empty.html.contains("No orders found"));
        assert!(empty.bindings.is_empty());

        let order = Order {
            id: 31,
            customer_name: "Ann & Co".to_string(),
            total_amount: Some(25.0),
            ..Order::default()
        };
        let rendered = renderer.order_history(std::slice::from_ref(&order)).unwrap();
        assert!(rendered.html.contains("Order #31"));
        assert!(rendered.html.contains("Unknown date"));
        assert!(rendered.html.contains("PENDING"));
        assert!(rendered.html.contains("$25.00"));
        assert_eq!(rendered.bindings, vec![
            Binding::click("view-order-31".to_string(), Action::ShowOrder { order_id: 31 }),
        ]);

        let details = renderer.order_details(&order).unwrap();
        assert!(details.html.contains("Ann &amp; Co"));
    }

    #[test]
    fn details_show_isbn_when_known() {
        let mut dune = book(4, "Dune", 2);
        dune.isbn = Some("9780441013593".to_string());
        let rendered = Renderer::new().unwrap().book_details(&dune).unwrap();
        assert!(rendered.html.contains("ISBN: 9780441013593"));
        assert_eq!(rendered.bindings.len(), 1);
    }
}
