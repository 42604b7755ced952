use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use super::summarize::{SummarizeOutcome, summarize_image};
use super::{IMAGE_ERROR_MESSAGE, STORE_ERROR_MESSAGE, STORED_MESSAGE};
use crate::clients::{ObjectStore, RecordStore, VisionModel};
use crate::core::config::AppConfig;
use crate::core::events::S3Event;
use crate::response::status_response;

pub struct SummarizerContext<O, R, M> {
    pub config: AppConfig,
    pub objects: O,
    pub records: R,
    pub model: M,
}

#[must_use]
pub fn outcome_response(outcome: &SummarizeOutcome) -> Value {
    match outcome {
        SummarizeOutcome::Stored(_) => status_response(200, STORED_MESSAGE),
        SummarizeOutcome::ImageUnavailable => status_response(500, IMAGE_ERROR_MESSAGE),
        SummarizeOutcome::StoreFailed => status_response(500, STORE_ERROR_MESSAGE),
    }
}

/// Lambda handler for the Summarizer entrypoint.
///
/// # Errors
///
/// Returns an error if the event is malformed, the model call fails, or the
/// model response does not contain a usable `<json>` block.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler<O, R, M>(
    ctx: &SummarizerContext<O, R, M>,
    event: LambdaEvent<Value>,
) -> Result<Value, Error>
where
    O: ObjectStore,
    R: RecordStore,
    M: VisionModel,
{
    info!("Summarizer received event: {}", event.payload);

    let key = S3Event::from_value(event.payload)?.first_object_key()?;
    info!(key = %key, "Decoded object key");

    let outcome = summarize_image(&ctx.objects, &ctx.records, &ctx.model, &ctx.config, &key).await?;
    Ok(outcome_response(&outcome))
}

pub use self::function_handler as handler;
