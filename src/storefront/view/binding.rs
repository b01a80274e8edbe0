use derive_more::Display;
use crate::storefront::model::book::BookId;
use crate::storefront::model::cart::CartItemId;
use crate::storefront::model::order::OrderId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub(crate) enum EventKind {
    #[display("click")]
    Click,
    #[display("change")]
    Change,
}

/// An event raised on a rendered element. A change carries the new value of
/// the input, as typed.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Event {
    Click,
    Change(String),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Click => EventKind::Click,
            Event::Change(_) => EventKind::Change,
        }
    }
}

/// What the controller does when a bound element fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    AddToCart { book_id: BookId },
    ShowDetails { book_id: BookId },
    ChangeQuantity { item_id: CartItemId },
    RemoveItem { item_id: CartItemId },
    ShowOrder { order_id: OrderId },
}

/// Attached to a container after it is rendered, in place of inline handlers
/// in the markup.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Binding {
    pub target: String,
    pub kind: EventKind,
    pub action: Action,
}

impl Binding {
    pub fn click(target: String, action: Action) -> Self {
        Self { target, kind: EventKind::Click, action }
    }

    pub fn change(target: String, action: Action) -> Self {
        Self { target, kind: EventKind::Change, action }
    }

    pub fn matches(&self, target: &str, kind: EventKind) -> bool {
        self.kind == kind && self.target == target
    }
}

pub(crate) fn add_to_cart_target(book_id: BookId) -> String {
    format!("add-to-cart-{}", book_id)
}

pub(crate) fn details_target(book_id: BookId) -> String {
    format!("book-{}", book_id)
}

pub(crate) fn quantity_target(item_id: CartItemId) -> String {
    format!("quantity-{}", item_id)
}

pub(crate) fn remove_target(item_id: CartItemId) -> String {
    format!("remove-{}", item_id)
}

pub(crate) fn order_target(order_id: OrderId) -> String {
    format!("view-order-{}", order_id)
}
