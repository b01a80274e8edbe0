//! the view controller: every operation is one round trip to the api
//! followed by a redraw of the containers it owns

mod admin;
mod books;
mod cart;
mod checkout;
pub(crate) mod error;
mod orders;

use log::{debug, error, warn};
use crate::storefront::api::BookstoreApi;
use crate::storefront::controller::error::parse_quantity;
use crate::storefront::model::config::ClientConfig;
use crate::storefront::state::StoreState;
use crate::storefront::view::binding::{Action, Event};
use crate::storefront::view::document::{Container, Document, PageId};
use crate::storefront::view::render::{Rendered, Renderer};
use crate::storefront::view::toast::ToastKind;

const INVALID_QUANTITY_MSG: &str = "Invalid quantity";

/// Owns the application state and the page. Failures never escape an
/// operation: they end up as a toast and a log line.
pub(crate) struct ViewController<A: BookstoreApi> {
    api: A,
    renderer: Renderer,
    state: StoreState,
    document: Document,
}

impl<A: BookstoreApi> ViewController<A> {
    pub fn new(api: A, config: &ClientConfig) -> Result<Self, tera::Error> {
        Ok(Self {
            api,
            renderer: Renderer::new()?,
            state: StoreState::default(),
            document: Document::new(config.toast_lifetime),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// first paint
    pub async fn initialize(&mut self) {
        self.load_books().await;
        self.load_cart_items().await;
    }

    pub async fn show_page(&mut self, page: PageId) {
        self.document.show_page(page);
        match page {
            PageId::Cart => self.load_cart_items().await,
            PageId::Orders if !self.document.order_email.trim().is_empty() => self.load_order_history().await,
            _ => {}
        }
    }

    /// Run whatever is bound to `target` for this event. Returns false when
    /// nothing is bound.
    pub async fn dispatch(&mut self, target: &str, event: Event) -> bool {
        let Some(action) = self.document.resolve(target, &event) else {
            debug!("nothing bound to {} on {}", event.kind(), target);
            return false;
        };
        match action {
            Action::AddToCart { book_id } => self.add_to_cart(book_id).await,
            Action::ShowDetails { book_id } => self.show_book_details(book_id).await,
            Action::RemoveItem { item_id } => self.remove_cart_item(item_id).await,
            Action::ShowOrder { order_id } => self.show_order(order_id).await,
            Action::ChangeQuantity { item_id } => {
                let Event::Change(value) = event else {
                    return false;
                };
                match parse_quantity(&value) {
                    Ok(quantity) => self.update_cart_item_quantity(item_id, quantity).await,
                    Err(e) => {
                        warn!("rejected quantity for cart item={}, {}", item_id, e);
                        self.show_error(INVALID_QUANTITY_MSG);
                    }
                }
            }
        }
        true
    }

    fn show_loading(&mut self) {
        let rendered = self.renderer.loading();
        Self::paint(&mut self.document.books_grid, rendered);
    }

    fn paint(container: &mut Container, rendered: Result<Rendered, tera::Error>) {
        match rendered {
            Ok(Rendered { html, bindings }) => container.replace(html, bindings),
            Err(e) => {
                error!("failed to render {}, {}", container.id(), e);
                container.replace(String::new(), Vec::new());
            }
        }
    }

    fn show_success(&mut self, message: impl Into<String>) {
        self.document.toasts.push(ToastKind::Success, message);
    }

    fn show_error(&mut self, message: impl Into<String>) {
        self.document.toasts.push(ToastKind::Error, message);
    }
}
