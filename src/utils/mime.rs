//! MIME utilities for declared object content types

/// Media types the hosted model accepts as image input.
pub const ALLOWED_IMAGE_MIME: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

#[must_use]
pub fn canonicalize_mime(mime: &str) -> String {
    let main = mime
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    match main.as_str() {
        "image/jpg" => "image/jpeg".to_string(),
        other => other.to_string(),
    }
}

/// Returns whether a given MIME type can be sent to the model as an image.
#[must_use]
pub fn is_supported_image_mime(mime: &str) -> bool {
    ALLOWED_IMAGE_MIME.contains(&canonicalize_mime(mime).as_str())
}
