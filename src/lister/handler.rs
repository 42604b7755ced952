use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::LIST_ERROR_MESSAGE;
use crate::clients::RecordStore;
use crate::core::config::AppConfig;
use crate::core::models::StoredRecord;
use crate::errors::CatalogError;
use crate::response::{cors_error_response, cors_json_response};

pub struct ListerContext<R> {
    pub config: AppConfig,
    pub records: R,
}

/// Scans `table` page by page until the store reports no continuation.
///
/// # Errors
///
/// Returns the first scan error; records from earlier pages are discarded.
pub async fn list_records(
    records: &impl RecordStore,
    table: &str,
) -> Result<Vec<StoredRecord>, CatalogError> {
    let mut all = Vec::new();
    let mut cursor = None;
    let mut pages = 0usize;

    loop {
        let page = records.scan_page(table, cursor.take()).await?;
        pages += 1;
        all.extend(page.records);
        match page.next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    info!(table, pages, count = all.len(), "Listed records");
    Ok(all)
}

/// Builds the full listing response. Every path returns an explicit status.
pub async fn listing_response(records: &impl RecordStore, table: &str) -> Value {
    let listed = match list_records(records, table).await {
        Ok(listed) => listed,
        Err(e) => {
            error!(table, "Failed to list records: {}", e);
            return cors_error_response(500, LIST_ERROR_MESSAGE);
        }
    };

    match serde_json::to_string(&listed) {
        Ok(body) => cors_json_response(200, body),
        Err(e) => {
            error!("Failed to serialize records: {}", e);
            cors_error_response(500, LIST_ERROR_MESSAGE)
        }
    }
}

/// Lambda handler for the Lister entrypoint. The request payload is ignored.
///
/// # Errors
///
/// Never fails; store errors are reported as a 500 response.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler<R: RecordStore>(
    ctx: &ListerContext<R>,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    info!(table = %ctx.config.image_table, "Lister invoked");
    Ok(listing_response(&ctx.records, &ctx.config.image_table).await)
}

pub use self::function_handler as handler;
