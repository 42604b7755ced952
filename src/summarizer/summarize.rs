use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{error, info};

use crate::clients::{ObjectStore, RecordStore, VisionModel};
use crate::core::config::AppConfig;
use crate::core::models::StoredRecord;
use crate::errors::CatalogError;
use crate::prompt::{CATALOG_SYSTEM_PROMPT, parse_image_summary};
use crate::utils::mime::{canonicalize_mime, is_supported_image_mime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub media_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarizeOutcome {
    Stored(StoredRecord),
    /// Metadata or content could not be read; the model was not called.
    ImageUnavailable,
    /// The model answered but the record could not be written.
    StoreFailed,
}

/// Reads the declared content type, then the bytes, of `bucket/key`.
///
/// # Errors
///
/// Fails if either read fails, the object has no content type, or the type is
/// not an image the model accepts.
pub async fn load_image(
    objects: &impl ObjectStore,
    bucket: &str,
    key: &str,
) -> Result<LoadedImage, CatalogError> {
    let declared = objects
        .content_type(bucket, key)
        .await?
        .ok_or_else(|| CatalogError::StorageError(format!("{bucket}/{key} has no content type")))?;

    if !is_supported_image_mime(&declared) {
        return Err(CatalogError::StorageError(format!(
            "{bucket}/{key} has unsupported content type {declared}"
        )));
    }

    let bytes = objects.get_bytes(bucket, key).await?;
    Ok(LoadedImage {
        media_type: canonicalize_mime(&declared),
        bytes,
    })
}

/// Catalogs `key` from the image bucket and upserts the record.
///
/// Storage failures come back as outcomes; model and response-format errors
/// are returned as `Err` and nothing is written.
///
/// # Errors
///
/// Returns an error if the model call fails or its response cannot be parsed.
pub async fn summarize_image(
    objects: &impl ObjectStore,
    records: &impl RecordStore,
    model: &impl VisionModel,
    config: &AppConfig,
    key: &str,
) -> Result<SummarizeOutcome, CatalogError> {
    let image = match load_image(objects, &config.image_bucket, key).await {
        Ok(image) => image,
        Err(e) => {
            error!(key, "Failed to load image: {}", e);
            return Ok(SummarizeOutcome::ImageUnavailable);
        }
    };

    info!(
        key,
        media_type = %image.media_type,
        size = image.bytes.len(),
        "Loaded image"
    );

    let encoded = STANDARD.encode(&image.bytes);
    let response_text = model
        .describe_image(CATALOG_SYSTEM_PROMPT, &encoded, &image.media_type)
        .await?;

    info!(key, response_len = response_text.len(), "Model responded");

    let record = parse_image_summary(&response_text)?.into_record(key.to_string());

    if let Err(e) = records.put_record(&config.image_table, &record).await {
        error!(key, table = %config.image_table, "Failed to store summary: {}", e);
        return Ok(SummarizeOutcome::StoreFailed);
    }

    info!(id = %record.id, category = %record.category, "Stored summary");
    Ok(SummarizeOutcome::Stored(record))
}
