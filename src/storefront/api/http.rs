use log::debug;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use crate::storefront::api::BookstoreApi;
use crate::storefront::api::error::ApiError;
use crate::storefront::model::book::{Book, BookId, NewBook};
use crate::storefront::model::cart::{AddCartItemRequest, CartItem, CartItemId, UpdateCartItemRequest};
use crate::storefront::model::config::ClientConfig;
use crate::storefront::model::order::{Order, OrderId, OrderRequest};

/// [`BookstoreApi`] over http.
///
/// The backend keys the cart by its session cookie, so one `HttpApi` is one
/// shopper: the cookie store lives as long as the client does.
pub(crate) struct HttpApi {
    client: Client,
    base: String,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(config.http_timeout)
            .build()?;
        Ok(Self {
            client,
            base: config.api_base.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    /// `path` followed by `segment`, percent-encoded as a single segment
    fn url_with_segment(&self, path: &str, segment: &str) -> Result<Url, ApiError> {
        let invalid = |reason: String| ApiError::Transport { reason };
        let mut url = Url::parse(&self.url(path)).map_err(|e| invalid(format!("invalid api base {}, {}", self.base, e)))?;
        url.path_segments_mut()
            .map_err(|_| invalid(format!("api base {} cannot take a path", self.base)))?
            .push(segment);
        Ok(url)
    }
}

fn expect_success(res: Response) -> Result<Response, ApiError> {
    match res.status() {
        status if status.is_success() => Ok(res),
        unexpected => {
            debug!("{} answered with {}", res.url(), unexpected);
            Err(ApiError::Status { status: unexpected.as_u16() })
        }
    }
}

async fn read_json<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    Ok(expect_success(res)?.json::<T>().await?)
}

impl BookstoreApi for HttpApi {
    async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let res = self.client.get(self.url("books")).send().await?;
        read_json(res).await
    }

    async fn search_books(&self, query: &str) -> Result<Vec<Book>, ApiError> {
        let res = self.client
            .get(self.url("books/search"))
            .query(&[("query", query)])
            .send()
            .await?;
        read_json(res).await
    }

    async fn get_book(&self, id: BookId) -> Result<Book, ApiError> {
        let res = self.client.get(self.url(&format!("books/{}", id))).send().await?;
        read_json(res).await
    }

    async fn create_book(&self, book: &NewBook) -> Result<(), ApiError> {
        let res = self.client.post(self.url("books")).json(book).send().await?;
        expect_success(res).map(|_| ())
    }

    async fn list_cart_items(&self) -> Result<Vec<CartItem>, ApiError> {
        let res = self.client.get(self.url("cart")).send().await?;
        read_json(res).await
    }

    async fn add_cart_item(&self, req: &AddCartItemRequest) -> Result<(), ApiError> {
        let res = self.client.post(self.url("cart")).json(req).send().await?;
        expect_success(res).map(|_| ())
    }

    async fn update_cart_item(&self, id: CartItemId, req: &UpdateCartItemRequest) -> Result<(), ApiError> {
        let res = self.client
            .put(self.url(&format!("cart/{}", id)))
            .json(req)
            .send()
            .await?;
        expect_success(res).map(|_| ())
    }

    async fn remove_cart_item(&self, id: CartItemId) -> Result<(), ApiError> {
        let res = self.client.delete(self.url(&format!("cart/{}", id))).send().await?;
        expect_success(res).map(|_| ())
    }

    async fn cart_total(&self) -> Result<f64, ApiError> {
        let res = self.client.get(self.url("cart/total")).send().await?;
        read_json(res).await
    }

    async fn place_order(&self, req: &OrderRequest) -> Result<Order, ApiError> {
        let res = self.client.post(self.url("orders")).json(req).send().await?;
        read_json(res).await
    }

    async fn get_order(&self, id: OrderId) -> Result<Order, ApiError> {
        let res = self.client.get(self.url(&format!("orders/{}", id))).send().await?;
        read_json(res).await
    }

    async fn list_customer_orders(&self, email: &str) -> Result<Vec<Order>, ApiError> {
        let url = self.url_with_segment("orders/customer", email)?;
        let res = self.client.get(url).send().await?;
        read_json(res).await
    }
}
