use crate::core::models::ImageSummary;
use crate::errors::CatalogError;

/// Output token budget for a single cataloging call.
pub const MAX_OUTPUT_TOKENS: u32 = 1000;

pub const JSON_OPEN_TAG: &str = "<json>";
pub const JSON_CLOSE_TAG: &str = "</json>";

/// Category vocabulary offered to the model. Not enforced on the way back.
pub const SUGGESTED_CATEGORIES: [&str; 15] = [
    "Animals",
    "Nature",
    "People",
    "Travel",
    "Food",
    "Technology",
    "Business",
    "Education",
    "Health",
    "Sports",
    "Arts",
    "Fashion",
    "Backgrounds",
    "Concepts",
    "Holidays",
];

pub const CATALOG_SYSTEM_PROMPT: &str = "Your purpose is to catalog images based upon common categories.
Create a structured set of data in json providing a summary of the image and a very short, generalised, image category. Do not return any narrative language.
Before you provide any output, show your working in <scratchpad> XML tags.
JSON fields must be labelled image_summary and image_category.

Example json structure is:

<json>
{
    \"image_summary\": SUMMARY OF THE IMAGE,
    \"image_category\": SHORT CATEGORY OF THE IMAGE
}
</json>

Examples of categories are:

Animals
Nature
People
Travel
Food
Technology
Business
Education
Health
Sports
Arts
Fashion
Backgrounds
Concepts
Holidays

Output the json structure as a string in <json> XML tags. Do not return any narrative language.

Look at the images in detail, looking for people, animals, landmarks or features and where possible try to identify them.
";

/// Returns the text between the last `start` marker and the first `end` marker
/// after it, or an empty string if either marker is missing.
#[must_use]
pub fn extract_substring<'a>(text: &'a str, start: &str, end: &str) -> &'a str {
    let Some(start_idx) = text.rfind(start) else {
        return "";
    };
    let body_idx = start_idx + start.len();
    match text[body_idx..].find(end) {
        Some(len) => &text[body_idx..body_idx + len],
        None => "",
    }
}

/// Pulls the `<json>` block out of a model completion and reads the two required fields.
pub fn parse_image_summary(response_text: &str) -> Result<ImageSummary, CatalogError> {
    let block = extract_substring(response_text, JSON_OPEN_TAG, JSON_CLOSE_TAG);
    if block.trim().is_empty() {
        return Err(CatalogError::ResponseFormatError(
            "no <json> block in model response".to_string(),
        ));
    }

    let summary: ImageSummary = serde_json::from_str(block.trim())?;
    Ok(summary)
}
