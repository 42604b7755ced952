use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use super::RENAMED_MESSAGE;
use crate::clients::ObjectStore;
use crate::core::config::AppConfig;
use crate::core::events::S3Event;
use crate::core::models::RenameOutcome;
use crate::errors::CatalogError;
use crate::response::status_response;

pub struct RenamerContext<O> {
    pub config: AppConfig,
    pub objects: O,
}

/// Copies the first object in `event` from the incoming bucket to the image
/// bucket under a new UUID key. The source object is left in place.
///
/// # Errors
///
/// Returns an error if the event carries no decodable key or the copy fails.
pub async fn rename_image(
    objects: &impl ObjectStore,
    config: &AppConfig,
    event: &S3Event,
) -> Result<RenameOutcome, CatalogError> {
    let source_key = event.first_object_key()?;
    let new_key = Uuid::new_v4().to_string();

    objects
        .copy(
            &config.incoming_bucket,
            &source_key,
            &config.image_bucket,
            &new_key,
        )
        .await?;

    info!(
        new_key = %new_key,
        old_key = %source_key,
        incoming_bucket = %config.incoming_bucket,
        image_bucket = %config.image_bucket,
        "Copied object to image bucket"
    );

    Ok(RenameOutcome {
        source_key,
        new_key,
    })
}

/// Lambda handler for the Renamer entrypoint.
///
/// # Errors
///
/// Copy failures are propagated so the platform records a failed invocation.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler<O: ObjectStore>(
    ctx: &RenamerContext<O>,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    info!("Renamer received event: {}", event.payload);

    let s3_event = S3Event::from_value(event.payload)?;
    let outcome = rename_image(&ctx.objects, &ctx.config, &s3_event).await?;

    info!("Successfully renamed object: {}", outcome.new_key);
    Ok(status_response(200, RENAMED_MESSAGE))
}

pub use self::function_handler as handler;
