use log::{debug, error};
use crate::storefront::api::BookstoreApi;
use crate::storefront::controller::ViewController;
use crate::storefront::model::book::BookId;
use crate::storefront::view::document::PageId;

const LOAD_BOOKS_FAILED_MSG: &str = "Failed to load books";
const SEARCH_BOOKS_FAILED_MSG: &str = "Failed to search books";
const LOAD_DETAILS_FAILED_MSG: &str = "Failed to load book details";

impl<A: BookstoreApi> ViewController<A> {
    /// Fill the grid with the whole catalogue
    pub async fn load_books(&mut self) {
        self.show_loading();
        match self.api.list_books().await {
            Ok(books) => {
                debug!("loaded {} books", books.len());
                self.state.replace_books(books);
                self.display_books();
            }
            Err(e) => {
                self.show_error(LOAD_BOOKS_FAILED_MSG);
                error!("Error loading books: {}", e);
            }
        }
    }

    /// Fill the grid with what matches the search input; a blank input lists
    /// everything.
    pub async fn search_books(&mut self) {
        let query = self.document.search_input.trim().to_string();
        self.show_loading();
        let result = match query.is_empty() {
            true => self.api.list_books().await,
            false => self.api.search_books(&query).await,
        };
        match result {
            Ok(books) => {
                debug!("search for {:?} found {} books", query, books.len());
                self.state.replace_books(books);
                self.display_books();
            }
            Err(e) => {
                self.show_error(SEARCH_BOOKS_FAILED_MSG);
                error!("Error searching books: {}", e);
            }
        }
    }

    pub async fn show_book_details(&mut self, id: BookId) {
        match self.api.get_book(id).await {
            Ok(book) => {
                let rendered = self.renderer.book_details(&book);
                Self::paint(&mut self.document.book_details, rendered);
                self.document.show_page(PageId::Details);
            }
            Err(e) => {
                self.show_error(LOAD_DETAILS_FAILED_MSG);
                error!("Error loading book={}: {}", id, e);
            }
        }
    }

    fn display_books(&mut self) {
        let rendered = self.renderer.books_grid(self.state.current_books());
        Self::paint(&mut self.document.books_grid, rendered);
    }
}
