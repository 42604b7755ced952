//! Response payloads returned to the Lambda platform.

use serde_json::{Value, json};

/// Returns `{statusCode, body}` where `body` is the JSON-encoded message string.
#[must_use]
pub fn status_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": Value::String(message.to_string()).to_string()
    })
}

/// Headers allowing any origin, header and method.
#[must_use]
pub fn cors_headers() -> Value {
    json!({
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Headers": "*",
        "Access-Control-Allow-Methods": "*"
    })
}

/// Returns a response with CORS headers and an already-serialized body.
#[must_use]
pub fn cors_json_response(status_code: u16, body: String) -> Value {
    json!({
        "headers": cors_headers(),
        "statusCode": status_code,
        "body": body
    })
}

/// Returns a CORS response whose body is `{"error": message}`.
#[must_use]
pub fn cors_error_response(status_code: u16, message: &str) -> Value {
    cors_json_response(status_code, json!({ "error": message }).to_string())
}
