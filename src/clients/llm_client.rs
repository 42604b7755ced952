//! LLM (Bedrock) client module
//!
//! Encapsulates the model invocation used to catalog an image. Requests use the
//! Anthropic Messages body accepted by Bedrock `InvokeModel`.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use serde_json::{Value, json};
use tracing::{error, info};

use super::VisionModel;
use crate::errors::CatalogError;

pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// LLM API client for cataloging images
pub struct LlmClient {
    client: Client,
    model_id: String,
    max_tokens: u32,
}

impl LlmClient {
    #[must_use]
    pub fn new(client: Client, model_id: String, max_tokens: u32) -> Self {
        Self {
            client,
            model_id,
            max_tokens,
        }
    }
}

#[must_use]
pub fn build_request_body(
    system_prompt: &str,
    image_base64: &str,
    media_type: &str,
    max_tokens: u32,
) -> Value {
    json!({
        "anthropic_version": ANTHROPIC_VERSION,
        "max_tokens": max_tokens,
        "system": system_prompt,
        "messages": [
            {
                "role": "user",
                "content": [
                    {
                        "type": "image",
                        "source": {
                            "type": "base64",
                            "media_type": media_type,
                            "data": image_base64
                        }
                    }
                ]
            }
        ]
    })
}

/// First text block of an Anthropic Messages response.
pub fn extract_text_content(response: &Value) -> Result<String, CatalogError> {
    response
        .get("content")
        .and_then(Value::as_array)
        .and_then(|blocks| {
            blocks
                .iter()
                .find(|b| b.get("type").and_then(Value::as_str) == Some("text"))
        })
        .and_then(|b| b.get("text"))
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .ok_or_else(|| CatalogError::ModelError("model response has no text content".to_string()))
}

#[async_trait]
impl VisionModel for LlmClient {
    async fn describe_image(
        &self,
        system_prompt: &str,
        image_base64: &str,
        media_type: &str,
    ) -> Result<String, CatalogError> {
        let body = build_request_body(system_prompt, image_base64, media_type, self.max_tokens);
        let payload = serde_json::to_vec(&body)
            .map_err(|e| CatalogError::ModelError(format!("Failed to encode request: {e}")))?;

        info!(
            model_id = %self.model_id,
            media_type,
            image_base64_len = image_base64.len(),
            "Invoking model"
        );

        let output = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(payload))
            .send()
            .await
            .map_err(|e| {
                error!("invoke_model failed: {}", DisplayErrorContext(&e));
                CatalogError::ModelError(format!("invoke_model {}: {e}", self.model_id))
            })?;

        let response: Value = serde_json::from_slice(output.body().as_ref())
            .map_err(|e| CatalogError::ModelError(format!("Undecodable model response: {e}")))?;

        #[cfg(feature = "debug-logs")]
        info!("Model response:\n{}", response);

        extract_text_content(&response)
    }
}
