pub mod config;
pub mod logging;

pub mod checker;
pub mod fetch_page;
pub mod page_meta;
pub mod registry;
pub mod store;
pub mod url_model;
