//! Input validation for untrusted data.
//!
//! All user-supplied input MUST be validated before it reaches the store.

use editor_core::GenerationRequest;
use thiserror::Error;

/// Maximum length for the product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
/// Maximum number of key features in a generation request.
pub const MAX_KEY_FEATURES: usize = 32;
/// Maximum length of a single key feature.
pub const MAX_KEY_FEATURE_LEN: usize = 200;
/// Maximum length for free-text fields (category, audience, instructions).
pub const MAX_FREE_TEXT_LEN: usize = 2_000;
/// Maximum elements per document.
pub const MAX_ELEMENTS_PER_DOCUMENT: usize = 10_000;

/// Validation error types.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Product name is empty after trimming.
    #[error("product name must not be empty")]
    ProductNameEmpty,
    /// Product name exceeds maximum length.
    #[error("product name too long (max {MAX_PRODUCT_NAME_LEN} chars)")]
    ProductNameTooLong,
    /// Too many key features.
    #[error("too many key features (max {MAX_KEY_FEATURES})")]
    TooManyKeyFeatures,
    /// A key feature exceeds maximum length.
    #[error("key feature too long (max {MAX_KEY_FEATURE_LEN} chars)")]
    KeyFeatureTooLong,
    /// A free-text field exceeds maximum length.
    #[error("{0} too long (max {MAX_FREE_TEXT_LEN} chars)")]
    FreeTextTooLong(&'static str),
    /// Document exceeds the element cap.
    #[error("too many elements (max {MAX_ELEMENTS_PER_DOCUMENT})")]
    TooManyElements,
}

/// Validate a generation request before any state mutation.
///
/// # Errors
///
/// Returns the first limit the request violates.
pub fn validate_generation_request(request: &GenerationRequest) -> Result<(), ValidationError> {
    let name = request.product_name.trim();
    if name.is_empty() {
        return Err(ValidationError::ProductNameEmpty);
    }
    if name.len() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::ProductNameTooLong);
    }
    if request.key_features.len() > MAX_KEY_FEATURES {
        return Err(ValidationError::TooManyKeyFeatures);
    }
    if request
        .key_features
        .iter()
        .any(|f| f.len() > MAX_KEY_FEATURE_LEN)
    {
        return Err(ValidationError::KeyFeatureTooLong);
    }
    for (label, value) in [
        ("product category", &request.product_category),
        ("target audience", &request.target_audience),
        ("additional instructions", &request.additional_instructions),
    ] {
        if value.as_ref().is_some_and(|v| v.len() > MAX_FREE_TEXT_LEN) {
            return Err(ValidationError::FreeTextTooLong(label));
        }
    }
    Ok(())
}

/// Validate an incoming element count against the document cap.
///
/// # Errors
///
/// Returns [`ValidationError::TooManyElements`] above the cap.
pub fn validate_element_count(count: usize) -> Result<(), ValidationError> {
    if count > MAX_ELEMENTS_PER_DOCUMENT {
        return Err(ValidationError::TooManyElements);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use editor_core::{StylePreset, Tone};

    fn request(name: &str) -> GenerationRequest {
        GenerationRequest {
            product_name: name.to_string(),
            product_category: None,
            target_audience: None,
            key_features: Vec::new(),
            tone: Tone::Casual,
            style: StylePreset::Modern,
            additional_instructions: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_generation_request(&request("Desk Lamp")).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = validate_generation_request(&request("  "));
        assert!(matches!(result, Err(ValidationError::ProductNameEmpty)));
    }

    #[test]
    fn test_oversized_name_rejected() {
        let result = validate_generation_request(&request(&"x".repeat(MAX_PRODUCT_NAME_LEN + 1)));
        assert!(matches!(result, Err(ValidationError::ProductNameTooLong)));
    }

    #[test]
    fn test_too_many_features_rejected() {
        let mut req = request("Lamp");
        req.key_features = vec!["f".to_string(); MAX_KEY_FEATURES + 1];
        assert!(matches!(
            validate_generation_request(&req),
            Err(ValidationError::TooManyKeyFeatures)
        ));
    }

    #[test]
    fn test_oversized_free_text_rejected() {
        let mut req = request("Lamp");
        req.additional_instructions = Some("x".repeat(MAX_FREE_TEXT_LEN + 1));
        assert!(matches!(
            validate_generation_request(&req),
            Err(ValidationError::FreeTextTooLong(_))
        ));
    }

    #[test]
    fn test_element_count_cap() {
        assert!(validate_element_count(MAX_ELEMENTS_PER_DOCUMENT).is_ok());
        assert!(validate_element_count(MAX_ELEMENTS_PER_DOCUMENT + 1).is_err());
    }
}
