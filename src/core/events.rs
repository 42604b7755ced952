//! S3 object-created notifications as delivered to the Lambda handlers.

use serde::Deserialize;
use tracing::warn;

use crate::errors::CatalogError;

#[derive(Debug, Deserialize)]
pub struct S3Event {
    #[serde(rename = "Records", default)]
    pub records: Vec<S3EventRecord>,
}

#[derive(Debug, Deserialize)]
pub struct S3EventRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct S3Object {
    pub key: String,
    pub size: Option<u64>,
}

impl S3Event {
    pub fn from_value(payload: serde_json::Value) -> Result<Self, CatalogError> {
        serde_json::from_value(payload)
            .map_err(|e| CatalogError::EventError(format!("not an S3 notification: {e}")))
    }

    /// Decoded key of the first record. Further records are not processed.
    pub fn first_object_key(&self) -> Result<String, CatalogError> {
        let record = self
            .records
            .first()
            .ok_or_else(|| CatalogError::EventError("event has no Records".to_string()))?;

        if self.records.len() > 1 {
            warn!(
                record_count = self.records.len(),
                "Event carries multiple records; only the first is processed"
            );
        }

        decode_object_name(&record.s3.object.key)
    }
}

/// Reverses the form-style encoding S3 applies to keys in notifications.
pub fn decode_object_name(object_name: &str) -> Result<String, CatalogError> {
    let spaced = object_name.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| CatalogError::EventError(format!("invalid object key {object_name:?}: {e}")))
}
