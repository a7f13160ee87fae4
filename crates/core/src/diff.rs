//! Validation of the diff payload.
//!
//! The relay accepts anything JSON can carry in the `diff` slot; only a
//! string with visible content is forwarded upstream.

/// Reasons a diff payload is rejected before any upstream call is made.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("diff is missing")]
    Missing,

    #[error("diff must be a string")]
    NotText,

    #[error("diff is empty")]
    Empty,
}

/// Validate the `diff` field of a request body.
///
/// Returns the diff text unchanged (no trimming) so it can be embedded in
/// the prompt verbatim.
pub fn validate_diff(diff: Option<&serde_json::Value>) -> Result<&str, InputError> {
    match diff {
        None | Some(serde_json::Value::Null) => Err(InputError::Missing),
        Some(serde_json::Value::String(text)) if text.trim().is_empty() => Err(InputError::Empty),
        Some(serde_json::Value::String(text)) => Ok(text.as_str()),
        Some(_) => Err(InputError::NotText),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_diff() {
        assert_eq!(validate_diff(None), Err(InputError::Missing));
        assert_eq!(validate_diff(Some(&json!(null))), Err(InputError::Missing));
    }

    #[test]
    fn test_empty_diff() {
        assert_eq!(validate_diff(Some(&json!(""))), Err(InputError::Empty));
        assert_eq!(validate_diff(Some(&json!("  \n\t"))), Err(InputError::Empty));
    }

    #[test]
    fn test_non_string_diff() {
        assert_eq!(validate_diff(Some(&json!(42))), Err(InputError::NotText));
        assert_eq!(validate_diff(Some(&json!(["+a"]))), Err(InputError::NotText));
        assert_eq!(
            validate_diff(Some(&json!({"diff": "+a"}))),
            Err(InputError::NotText)
        );
    }

    #[test]
    fn test_diff_is_returned_verbatim() {
        let value = json!("\n+fn main() {}\n");
        assert_eq!(validate_diff(Some(&value)), Ok("\n+fn main() {}\n"));
    }
}
