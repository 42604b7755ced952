use std::error::Error;
use photo_catalog::errors::CatalogError;

#[test]
fn test_catalog_error_implements_error_trait() {
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = CatalogError::EventError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_catalog_error_display() {
    let error = CatalogError::ConfigError("IMAGE_TABLE is not set".to_string());
    assert_eq!(
        format!("{error}"),
        "Missing required configuration: IMAGE_TABLE is not set"
    );

    let error = CatalogError::StorageError("NoSuchKey".to_string());
    assert_eq!(format!("{error}"), "Failed to access object storage: NoSuchKey");

    let error = CatalogError::ModelError("throttled".to_string());
    assert_eq!(format!("{error}"), "Failed to invoke model: throttled");
}

#[test]
fn test_serde_error_maps_to_response_format() {
    let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let catalog_err: CatalogError = err.into();

    assert!(matches!(catalog_err, CatalogError::ResponseFormatError(_)));
}

#[test]
fn test_catalog_error_boxes_into_lambda_error() {
    let boxed: lambda_runtime::Error = CatalogError::RecordStoreError("scan".into()).into();
    assert_eq!(boxed.to_string(), "Failed to access record store: scan");
}
