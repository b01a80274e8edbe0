//! the page the storefront draws into, and how it is drawn

pub(crate) mod binding;
pub(crate) mod document;
pub(crate) mod render;
pub(crate) mod toast;
