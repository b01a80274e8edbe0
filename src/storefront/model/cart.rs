use serde::{Deserialize, Serialize};
use crate::storefront::model::book::BookId;

pub(crate) type CartItemId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItem {
    pub id: CartItemId,
    pub book_id: BookId,
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddCartItemRequest {
    pub book_id: BookId,
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct UpdateCartItemRequest {
    pub quantity: i32,
}

/// number shown next to the cart link
pub(crate) fn total_quantity(items: &[CartItem]) -> i64 {
    items.iter().map(|item| i64::from(item.quantity)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_quantity_sums_every_line() {
        let items = vec![
            CartItem { id: 1, book_id: 10, quantity: 2 },
            CartItem { id: 2, book_id: 11, quantity: 5 },
        ];
        assert_eq!(total_quantity(&items), 7);
        assert_eq!(total_quantity(&[]), 0);
    }

    #[test]
    fn add_request_uses_book_id_key() {
        let json = serde_json::to_string(&AddCartItemRequest { book_id: 4, quantity: 1 }).unwrap();
        assert_eq!(json, r#"{"bookId":4,"quantity":1}"#);
    }
}
