//! S3-backed object store

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use tracing::{error, info};

use super::ObjectStore;
use crate::errors::CatalogError;

#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// `CopySource` value for a bucket/key pair; the key must be URL-encoded.
#[must_use]
pub fn copy_source(bucket: &str, key: &str) -> String {
    format!("{bucket}/{}", urlencoding::encode(key))
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn content_type(&self, bucket: &str, key: &str) -> Result<Option<String>, CatalogError> {
        let head = self
            .client
            .head_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                error!(bucket, key, "head_object failed: {}", DisplayErrorContext(&e));
                CatalogError::StorageError(format!("head_object {bucket}/{key}: {e}"))
            })?;

        let content_type = head.content_type().map(ToString::to_string);
        info!(bucket, key, content_type = ?content_type, "Fetched object metadata");
        Ok(content_type)
    }

    async fn get_bytes(&self, bucket: &str, key: &str) -> Result<Vec<u8>, CatalogError> {
        let object = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                error!(bucket, key, "get_object failed: {}", DisplayErrorContext(&e));
                CatalogError::StorageError(format!("get_object {bucket}/{key}: {e}"))
            })?;

        let data = object.body.collect().await.map_err(|e| {
            error!(bucket, key, "Failed to read object body: {}", e);
            CatalogError::StorageError(format!("read body {bucket}/{key}: {e}"))
        })?;

        Ok(data.into_bytes().to_vec())
    }

    async fn copy(
        &self,
        source_bucket: &str,
        source_key: &str,
        dest_bucket: &str,
        dest_key: &str,
    ) -> Result<(), CatalogError> {
        self.client
            .copy_object()
            .copy_source(copy_source(source_bucket, source_key))
            .bucket(dest_bucket)
            .key(dest_key)
            .send()
            .await
            .map_err(|e| {
                error!(
                    source_bucket,
                    source_key,
                    dest_bucket,
                    dest_key,
                    "copy_object failed: {}",
                    DisplayErrorContext(&e)
                );
                CatalogError::StorageError(format!(
                    "copy_object {source_bucket}/{source_key} -> {dest_bucket}/{dest_key}: {e}"
                ))
            })?;
        Ok(())
    }
}
