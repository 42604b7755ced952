//! DynamoDB-backed record store

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::{error, info, warn};

use super::{RecordPage, RecordStore};
use crate::core::models::StoredRecord;
use crate::errors::CatalogError;

type Item = HashMap<String, AttributeValue>;

#[derive(Clone)]
pub struct DynamoRecordStore {
    client: Client,
}

impl DynamoRecordStore {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn record_to_item(record: &StoredRecord) -> Item {
    HashMap::from([
        ("id".to_string(), AttributeValue::S(record.id.clone())),
        ("summary".to_string(), AttributeValue::S(record.summary.clone())),
        ("category".to_string(), AttributeValue::S(record.category.clone())),
    ])
}

fn string_attr(item: &Item, name: &str) -> Option<String> {
    item.get(name).and_then(|v| v.as_s().ok()).cloned()
}

fn item_to_record(item: &Item) -> Option<StoredRecord> {
    Some(StoredRecord {
        id: string_attr(item, "id")?,
        summary: string_attr(item, "summary")?,
        category: string_attr(item, "category")?,
    })
}

fn start_key(id: String) -> Item {
    HashMap::from([("id".to_string(), AttributeValue::S(id))])
}

#[async_trait]
impl RecordStore for DynamoRecordStore {
    async fn put_record(&self, table: &str, record: &StoredRecord) -> Result<(), CatalogError> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(record_to_item(record)))
            .send()
            .await
            .map_err(|e| {
                error!(table, id = %record.id, "put_item failed: {}", DisplayErrorContext(&e));
                CatalogError::RecordStoreError(format!("put_item {table}: {e}"))
            })?;
        Ok(())
    }

    async fn scan_page(
        &self,
        table: &str,
        start_after: Option<String>,
    ) -> Result<RecordPage, CatalogError> {
        let output = self
            .client
            .scan()
            .table_name(table)
            .set_exclusive_start_key(start_after.map(start_key))
            .send()
            .await
            .map_err(|e| {
                error!(table, "scan failed: {}", DisplayErrorContext(&e));
                CatalogError::RecordStoreError(format!("scan {table}: {e}"))
            })?;

        let mut records = Vec::with_capacity(output.items().len());
        for item in output.items() {
            match item_to_record(item) {
                Some(record) => records.push(record),
                None => warn!(table, "Skipping item without string id/summary/category"),
            }
        }

        let next = output
            .last_evaluated_key()
            .and_then(|key| string_attr(key, "id"));

        info!(table, count = records.len(), has_more = next.is_some(), "Scanned page");
        Ok(RecordPage { records, next })
    }
}
