//! Lister Lambda: returns every stored record to the browser client

pub mod handler;

pub use handler::{ListerContext, handler, list_records, listing_response};

pub const LIST_ERROR_MESSAGE: &str = "Error listing images";
