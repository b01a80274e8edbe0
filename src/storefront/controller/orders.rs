use log::{debug, error};
use crate::storefront::api::BookstoreApi;
use crate::storefront::controller::ViewController;
use crate::storefront::model::order::OrderId;
use crate::storefront::view::document::PageId;

const BLANK_EMAIL_MSG: &str = "Enter an email to look up orders";
const LOAD_ORDERS_FAILED_MSG: &str = "Failed to load orders";
const LOAD_ORDER_FAILED_MSG: &str = "Failed to load order";

impl<A: BookstoreApi> ViewController<A> {
    /// List the orders placed with the email in the lookup input
    pub async fn load_order_history(&mut self) {
        let email = self.document.order_email.trim().to_string();
        if email.is_empty() {
            self.show_error(BLANK_EMAIL_MSG);
            return;
        }
        match self.api.list_customer_orders(&email).await {
            Ok(orders) => {
                debug!("found {} orders for {}", orders.len(), email);
                let rendered = self.renderer.order_history(&orders);
                Self::paint(&mut self.document.order_history, rendered);
                self.document.order_details.replace(String::new(), Vec::new());
                self.document.show_page(PageId::Orders);
            }
            Err(e) => {
                self.show_error(LOAD_ORDERS_FAILED_MSG);
                error!("Error loading orders of {}: {}", email, e);
            }
        }
    }

    pub async fn show_order(&mut self, id: OrderId) {
        match self.api.get_order(id).await {
            Ok(order) => {
                let rendered = self.renderer.order_details(&order);
                Self::paint(&mut self.document.order_details, rendered);
                self.document.show_page(PageId::Orders);
            }
            Err(e) => {
                self.show_error(LOAD_ORDER_FAILED_MSG);
                error!("Error loading order={}: {}", id, e);
            }
        }
    }
}
