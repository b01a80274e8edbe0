use serde::{Deserialize, Serialize};

pub(crate) type BookId = i64;

/// A book as served by the catalogue endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub isbn: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stock_quantity: i32,
}

impl Book {
    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}

/// Body of `POST /books`, the server assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewBook {
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub stock_quantity: i32,
}

#[cfg(test)]
impl NewBook {
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            price: self.price,
            description: self.description,
            stock_quantity: self.stock_quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_reads_camel_case_and_tolerates_missing_optionals() {
        let book: Book = serde_json::from_str(
            r#"{"id":7,"title":"Dune","author":"Frank Herbert","price":9.5,"stockQuantity":0}"#,
        )
        .unwrap();
        assert_eq!(book.id, 7);
        assert_eq!(book.description, None);
        assert!(!book.in_stock());
    }

    #[test]
    fn new_book_omits_empty_optionals() {
        let book = NewBook {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            isbn: None,
            price: 9.5,
            description: None,
            stock_quantity: 3,
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["stockQuantity"], 3);
        assert!(json.get("isbn").is_none());
        assert!(json.get("id").is_none());
    }
}
