pub(crate) mod book;
pub(crate) mod cart;
pub(crate) mod config;
pub(crate) mod order;
