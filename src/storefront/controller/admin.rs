use log::{error, warn};
use crate::storefront::api::BookstoreApi;
use crate::storefront::controller::error::FormError;
use crate::storefront::controller::ViewController;
use crate::storefront::model::book::NewBook;
use crate::storefront::view::document::AddBookForm;

const ADD_BOOK_FAILED_MSG: &str = "Failed to add book";

impl TryFrom<&AddBookForm> for NewBook {
    type Error = FormError;

    fn try_from(form: &AddBookForm) -> Result<Self, Self::Error> {
        let required = |field: &'static str, value: &str| match value.trim() {
            "" => Err(FormError::Missing { field }),
            v => Ok(v.to_string()),
        };
        let optional = |value: &str| Some(value.trim().to_string()).filter(|v| !v.is_empty());

        let price = form.price.trim().parse::<f64>().map_err(|_| FormError::NotANumber {
            field: "price",
            value: form.price.clone(),
        })?;
        let stock_quantity = form.stock.trim().parse::<i32>().map_err(|_| FormError::NotANumber {
            field: "stock",
            value: form.stock.clone(),
        })?;
        Ok(NewBook {
            title: required("title", &form.title)?,
            author: required("author", &form.author)?,
            isbn: optional(&form.isbn),
            price,
            description: optional(&form.description),
            stock_quantity,
        })
    }
}

impl<A: BookstoreApi> ViewController<A> {
    /// Submit the admin form, then reload the catalogue
    pub async fn add_book(&mut self) {
        let book = match NewBook::try_from(&self.document.add_book_form) {
            Ok(book) => book,
            Err(e) => {
                warn!("add book form rejected, {}", e);
                self.show_error(ADD_BOOK_FAILED_MSG);
                return;
            }
        };
        match self.api.create_book(&book).await {
            Ok(()) => {
                self.show_success("Book added successfully");
                self.document.add_book_form.reset();
                self.load_books().await;
            }
            Err(e) => {
                self.show_error(ADD_BOOK_FAILED_MSG);
                error!("Error adding book: {}", e);
            }
        }
    }
}
