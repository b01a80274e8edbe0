//! main module of the storefront client

pub(crate) mod api;
pub(crate) mod controller;
pub(crate) mod model;
mod state;
mod util;
pub(crate) mod view;

use anyhow::Context;
use crate::storefront::api::http::HttpApi;
use crate::storefront::controller::ViewController;
use crate::storefront::model::config::ClientConfig;

/// Build a controller talking to the configured backend. Nothing is fetched
/// yet.
pub(crate) fn connect(config: &ClientConfig) -> anyhow::Result<ViewController<HttpApi>> {
    let api = HttpApi::new(config).context("failed to build http client")?;
    ViewController::new(api, config).context("failed to load page templates")
}
