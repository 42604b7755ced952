#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use photo_catalog::clients::{ObjectStore, RecordPage, RecordStore, VisionModel};
use photo_catalog::core::config::AppConfig;
use photo_catalog::core::models::StoredRecord;
use photo_catalog::errors::CatalogError;

pub const INCOMING: &str = "incoming-bucket";
pub const IMAGES: &str = "image-bucket";
pub const TABLE: &str = "image-table";

pub fn test_config() -> AppConfig {
    AppConfig {
        image_table: TABLE.to_string(),
        image_bucket: IMAGES.to_string(),
        incoming_bucket: INCOMING.to_string(),
        model_id: "test-model".to_string(),
    }
}

pub fn s3_event(key: &str) -> serde_json::Value {
    serde_json::json!({
        "Records": [
            {
                "eventSource": "aws:s3",
                "eventName": "ObjectCreated:Put",
                "s3": {
                    "bucket": { "name": INCOMING },
                    "object": { "key": key, "size": 1024 }
                }
            }
        ]
    })
}

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

#[derive(Default)]
pub struct MemoryObjectStore {
    pub objects: Mutex<HashMap<(String, String), StoredObject>>,
    pub fail_head: bool,
    pub get_calls: AtomicUsize,
}

impl MemoryObjectStore {
    pub fn with_object(bucket: &str, key: &str, bytes: &[u8], content_type: Option<&str>) -> Self {
        let store = Self::default();
        store.insert(bucket, key, bytes, content_type);
        store
    }

    pub fn insert(&self, bucket: &str, key: &str, bytes: &[u8], content_type: Option<&str>) {
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                bytes: bytes.to_vec(),
                content_type: content_type.map(ToString::to_string),
            },
        );
    }

    pub fn get(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub fn keys_in(&self, bucket: &str) -> Vec<String> {
        let mut keys: Vec<String> = self
            .objects
            .lock()
            .unwrap()
            .keys()
            .filter(|(b, _)| b == bucket)
            .map(|(_, k)| k.clone())
            .collect();
        keys.sort();
        keys
    }

    fn missing(bucket: &str, key: &str) -> CatalogError {
        CatalogError::StorageError(format!("NoSuchKey: {bucket}/{key}"))
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn content_type(&self, bucket: &str, key: &str) -> Result<Option<String>, CatalogError> {
        if self.fail_head {
            return Err(CatalogError::StorageError("AccessDenied".to_string()));
        }
        self.get(bucket, key)
            .map(|o| o.content_type)
            .ok_or_else(|| Self::missing(bucket, key))
    }

    async fn get_bytes(&self, bucket: &str, key: &str) -> Result<Vec<u8>, CatalogError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.get(bucket, key)
            .map(|o| o.bytes)
            .ok_or_else(|| Self::missing(bucket, key))
    }

    async fn copy(
        &self,
        source_bucket: &str,
        source_key: &str,
        dest_bucket: &str,
        dest_key: &str,
    ) -> Result<(), CatalogError> {
        let object = self
            .get(source_bucket, source_key)
            .ok_or_else(|| Self::missing(source_bucket, source_key))?;
        self.objects
            .lock()
            .unwrap()
            .insert((dest_bucket.to_string(), dest_key.to_string()), object);
        Ok(())
    }
}

/// Ordered by id; pages resume after the `next` id like DynamoDB's last evaluated key.
pub struct MemoryRecordStore {
    pub records: Mutex<BTreeMap<String, StoredRecord>>,
    pub page_size: usize,
    pub fail_put: bool,
    pub fail_scan_after_pages: Option<usize>,
    pub scan_calls: AtomicUsize,
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
            page_size: 100,
            fail_put: false,
            fail_scan_after_pages: None,
            scan_calls: AtomicUsize::new(0),
        }
    }
}

impl MemoryRecordStore {
    pub fn seeded(count: usize, page_size: usize) -> Self {
        let store = Self {
            page_size,
            ..Self::default()
        };
        for i in 0..count {
            let record = StoredRecord {
                id: format!("id-{i:03}"),
                summary: format!("summary {i}"),
                category: "Nature".to_string(),
            };
            store.records.lock().unwrap().insert(record.id.clone(), record);
        }
        store
    }

    pub fn all(&self) -> Vec<StoredRecord> {
        self.records.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn put_record(&self, _table: &str, record: &StoredRecord) -> Result<(), CatalogError> {
        if self.fail_put {
            return Err(CatalogError::RecordStoreError("ProvisionedThroughputExceeded".into()));
        }
        self.records
            .lock()
            .unwrap()
            .insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn scan_page(
        &self,
        _table: &str,
        start_after: Option<String>,
    ) -> Result<RecordPage, CatalogError> {
        let served = self.scan_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_scan_after_pages.is_some_and(|limit| served >= limit) {
            return Err(CatalogError::RecordStoreError("ResourceNotFoundException".into()));
        }

        let records = self.records.lock().unwrap();
        let remaining: Vec<StoredRecord> = records
            .values()
            .filter(|r| start_after.as_ref().is_none_or(|after| &r.id > after))
            .cloned()
            .collect();

        let more = remaining.len() > self.page_size;
        let page: Vec<StoredRecord> = remaining.into_iter().take(self.page_size).collect();
        let next = if more {
            page.last().map(|r| r.id.clone())
        } else {
            None
        };
        Ok(RecordPage {
            records: page,
            next,
        })
    }
}

pub struct StubModel {
    response: Result<String, String>,
    pub calls: AtomicUsize,
    pub last_request: Mutex<Option<(String, String, String)>>,
}

impl StubModel {
    pub fn answering(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VisionModel for StubModel {
    async fn describe_image(
        &self,
        system_prompt: &str,
        image_base64: &str,
        media_type: &str,
    ) -> Result<String, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some((
            system_prompt.to_string(),
            image_base64.to_string(),
            media_type.to_string(),
        ));
        self.response
            .clone()
            .map_err(CatalogError::ModelError)
    }
}
