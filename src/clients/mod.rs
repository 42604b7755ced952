//! Seams to the managed services the handlers talk to.
//!
//! Handlers are written against these traits; the `*_client` modules hold the
//! AWS SDK implementations used by the Lambda binaries.

use async_trait::async_trait;

use crate::core::models::StoredRecord;
use crate::errors::CatalogError;

pub mod dynamo_client;
pub mod llm_client;
pub mod s3_client;

pub use dynamo_client::DynamoRecordStore;
pub use llm_client::LlmClient;
pub use s3_client::S3ObjectStore;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Declared content type of the object, `None` if the object has none.
    async fn content_type(&self, bucket: &str, key: &str) -> Result<Option<String>, CatalogError>;

    async fn get_bytes(&self, bucket: &str, key: &str) -> Result<Vec<u8>, CatalogError>;

    async fn copy(
        &self,
        source_bucket: &str,
        source_key: &str,
        dest_bucket: &str,
        dest_key: &str,
    ) -> Result<(), CatalogError>;
}

/// One page of a table scan. `next` is the id to resume after, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPage {
    pub records: Vec<StoredRecord>,
    pub next: Option<String>,
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Unconditional upsert keyed by `record.id`.
    async fn put_record(&self, table: &str, record: &StoredRecord) -> Result<(), CatalogError>;

    async fn scan_page(
        &self,
        table: &str,
        start_after: Option<String>,
    ) -> Result<RecordPage, CatalogError>;
}

#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Sends one base64 image under `system_prompt` and returns the assistant text.
    async fn describe_image(
        &self,
        system_prompt: &str,
        image_base64: &str,
        media_type: &str,
    ) -> Result<String, CatalogError>;
}
