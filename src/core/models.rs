use serde::{Deserialize, Serialize};

/// One cataloged image, keyed by its object key in the image bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: String,
    pub summary: String,
    pub category: String,
}

/// The structured block the model is asked to emit inside `<json>` tags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageSummary {
    pub image_summary: String,
    pub image_category: String,
}

impl ImageSummary {
    #[must_use]
    pub fn into_record(self, id: String) -> StoredRecord {
        StoredRecord {
            id,
            summary: self.image_summary,
            category: self.image_category,
        }
    }
}

/// Outcome of a successful copy into the image bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameOutcome {
    pub source_key: String,
    pub new_key: String,
}
