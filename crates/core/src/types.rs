use serde::{Deserialize, Serialize};

use crate::diff::{validate_diff, InputError};

/// Body of a `POST /generate` request.
///
/// `diff` is kept as a raw JSON value so that a missing key, a `null`, a
/// non-string and an empty string can all be reported the same way by
/// [`validate_diff`] instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub diff: Option<serde_json::Value>,
}

impl GenerationRequest {
    pub fn new(diff: impl Into<String>) -> Self {
        Self {
            diff: Some(serde_json::Value::String(diff.into())),
        }
    }

    /// The validated diff text.
    pub fn diff(&self) -> Result<&str, InputError> {
        validate_diff(self.diff.as_ref())
    }
}

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub message: String,
}

/// Error response body, used for every non-2xx JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub const MISSING_DIFF: &'static str = "Missing diff data.";
    pub const GENERATION_FAILED: &'static str = "Failed to generate commit message.";
    pub const INVALID_BODY: &'static str = "Invalid request body.";
    pub const BODY_TOO_LARGE: &'static str = "Request body too large.";

    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_has_no_diff() {
        let request: GenerationRequest = serde_json::from_str("{}").unwrap();
        assert!(request.diff.is_none());
        assert_eq!(request.diff(), Err(InputError::Missing));
    }

    #[test]
    fn test_diff_is_read_from_body() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"diff": "+console.log('hi')"}"#).unwrap();
        assert_eq!(request.diff(), Ok("+console.log('hi')"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"diff": "+a", "branch": "main"}"#).unwrap();
        assert_eq!(request.diff(), Ok("+a"));
    }

    #[test]
    fn test_result_serialization() {
        let result = GenerationResult {
            message: "Add log statement".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"message":"Add log statement"}"#
        );
    }

    #[test]
    fn test_error_body_serialization() {
        let body = ErrorBody::new(ErrorBody::MISSING_DIFF);
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"error":"Missing diff data."}"#
        );
    }
}
