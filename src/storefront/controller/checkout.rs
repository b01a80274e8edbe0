use log::{error, info};
use crate::storefront::api::BookstoreApi;
use crate::storefront::controller::ViewController;
use crate::storefront::model::order::OrderRequest;
use crate::storefront::view::document::PageId;

const EMPTY_CART_MSG: &str = "Your cart is empty";
const PLACE_ORDER_FAILED_MSG: &str = "Failed to place order";

impl<A: BookstoreApi> ViewController<A> {
    /// Open the checkout page, refused while the cached cart is empty
    pub fn show_checkout(&mut self) {
        if self.state.cart_items().is_empty() {
            self.show_error(EMPTY_CART_MSG);
            return;
        }
        self.document.show_page(PageId::Checkout);
    }

    /// Submit the checkout form
    pub async fn place_order(&mut self) {
        let form = &self.document.checkout_form;
        let req = OrderRequest {
            customer_name: form.customer_name.clone(),
            customer_email: form.customer_email.clone(),
            customer_address: form.customer_address.clone(),
        };
        match self.api.place_order(&req).await {
            Ok(order) => {
                info!("order={} placed, total={:?}, status={:?}", order.id, order.total_amount, order.status);
                self.show_success(format!("Order placed successfully! Order ID: {}", order.id));
                self.document.order_email = req.customer_email;
                self.document.checkout_form.reset();
                self.state.clear_cart();
                self.display_cart_items().await;
                self.document.cart_total = "0.00".to_string();
                self.update_cart_count();
                self.document.show_page(PageId::Home);
            }
            Err(e) => {
                self.show_error(PLACE_ORDER_FAILED_MSG);
                error!("Error placing order: {}", e);
            }
        }
    }
}
