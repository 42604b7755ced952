use std::env;

use crate::errors::CatalogError;

pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-sonnet-20240229-v1:0";

/// Table name used when running under `sam local` without an explicit `IMAGE_TABLE`.
pub const LOCAL_IMAGE_TABLE: &str = "dbla-ml-photo-album-image-table";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub image_table: String,
    pub image_bucket: String,
    pub incoming_bucket: String,
    pub model_id: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, CatalogError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CatalogError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| {
            get(key).ok_or_else(|| CatalogError::ConfigError(format!("{key} is not set")))
        };

        let image_table = match get("IMAGE_TABLE") {
            Some(table) => table,
            None if get("AWS_SAM_LOCAL").is_some() => LOCAL_IMAGE_TABLE.to_string(),
            None => return Err(CatalogError::ConfigError("IMAGE_TABLE is not set".into())),
        };

        Ok(Self {
            image_table,
            image_bucket: require("IMAGE_BUCKET")?,
            incoming_bucket: require("INCOMING_BUCKET")?,
            model_id: get("MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
        })
    }
}
