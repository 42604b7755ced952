//! Photo catalog - event-driven Lambdas that describe uploaded images with a
//! hosted vision-language model.
//!
//! The crate backs three independent Lambda functions:
//! 1. A Renamer that copies each staged upload into the image bucket under a UUID key
//! 2. A Summarizer that sends the renamed image to Bedrock and stores the
//!    returned summary and category in DynamoDB
//! 3. A Lister that returns every stored record as JSON for the browser client
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution, triggered by S3 object-created events
//! - S3 for staged and renamed images
//! - DynamoDB for catalog records
//! - Bedrock `InvokeModel` with an Anthropic model for image cataloging
//! - Tokio for async runtime
//!
//! Handlers are generic over the [`clients::ObjectStore`], [`clients::RecordStore`]
//! and [`clients::VisionModel`] traits so each step can run against in-memory fakes.
//!
//! # Example
//!
//! ```no_run
//! use photo_catalog::core::config::AppConfig;
//! use photo_catalog::core::events::S3Event;
//! use photo_catalog::clients::S3ObjectStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     photo_catalog::setup_logging();
//!
//!     let config = AppConfig {
//!         image_table: "image-table".to_string(),
//!         image_bucket: "images".to_string(),
//!         incoming_bucket: "incoming".to_string(),
//!         model_id: photo_catalog::core::config::DEFAULT_MODEL_ID.to_string(),
//!     };
//!
//!     let shared = aws_config::from_env().load().await;
//!     let objects = S3ObjectStore::new(aws_sdk_s3::Client::new(&shared));
//!
//!     let event = S3Event::from_value(serde_json::json!({
//!         "Records": [{"s3": {"bucket": {"name": "incoming"}, "object": {"key": "photo.jpg"}}}]
//!     }))?;
//!     let outcome = photo_catalog::renamer::rename_image(&objects, &config, &event).await?;
//!     println!("{} -> {}", outcome.source_key, outcome.new_key);
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod clients;
pub mod core;
pub mod errors;
pub mod lister;
pub mod prompt;
pub mod renamer;
pub mod response;
pub mod summarizer;
pub mod utils;

pub use errors::CatalogError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. The level defaults to `info` and can be
/// overridden with `RUST_LOG`. It should be called once at the start of each
/// Lambda binary.
///
/// # Example
///
/// ```
/// photo_catalog::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Loads the config at cold start and logs which variable is missing.
///
/// # Errors
///
/// Returns the configuration error so `main` exits before serving any event.
pub fn load_config() -> Result<crate::core::config::AppConfig, lambda_runtime::Error> {
    crate::core::config::AppConfig::from_env().map_err(|e| {
        tracing::error!("Config error: {}", e);
        lambda_runtime::Error::from(e)
    })
}
