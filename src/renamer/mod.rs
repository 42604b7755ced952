//! Renamer Lambda: copies staged uploads into the image bucket under a fresh key

pub mod handler;

pub use handler::{RenamerContext, handler, rename_image};

pub const RENAMED_MESSAGE: &str = "Successfully renamed object";
