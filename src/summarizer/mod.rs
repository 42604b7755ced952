//! Summarizer Lambda: asks the model to catalog a renamed image and stores the result

pub mod handler;
pub mod summarize;

pub use handler::{SummarizerContext, handler};
pub use summarize::{LoadedImage, SummarizeOutcome, load_image, summarize_image};

pub const STORED_MESSAGE: &str = "Summary stored in DynamoDB";
pub const IMAGE_ERROR_MESSAGE: &str = "Error getting image";
pub const STORE_ERROR_MESSAGE: &str = "Error storing summary";
