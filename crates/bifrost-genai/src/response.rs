//! Response contract: the service must return the same three snippet strings
//! the deterministic generator produces.

use serde::Deserialize;

use crate::error::ServiceError;

/// The three snippets as returned by the external service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSnippets {
    pub tailwind_css: String,
    pub css: String,
    pub rgb: String,
}

/// Validate a raw service reply against the contracted shape.
///
/// All three fields must be present and strings; unknown extra fields are
/// tolerated (the service may annotate its reply). Anything else is a
/// [`ServiceError::BadResponse`].
pub fn parse_snippets(raw: &str) -> Result<GeneratedSnippets, ServiceError> {
    serde_json::from_str(raw).map_err(|e| ServiceError::BadResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_reply_parses() {
        let raw = r#"{"tailwindCss": "bg-x", "css": ".gradient {}", "rgb": ".gradient {}"}"#;
        let snippets = parse_snippets(raw).unwrap();
        assert_eq!(snippets.tailwind_css, "bg-x");
    }

    #[test]
    fn extra_fields_are_tolerated() {
        let raw = r#"{"tailwindCss": "a", "css": "b", "rgb": "c", "model": "whatever-v2"}"#;
        assert!(parse_snippets(raw).is_ok());
    }

    #[test]
    fn missing_field_is_bad_response() {
        let raw = r#"{"tailwindCss": "a", "css": "b"}"#;
        assert!(matches!(parse_snippets(raw), Err(ServiceError::BadResponse(_))));
    }

    #[test]
    fn wrong_type_is_bad_response() {
        let raw = r#"{"tailwindCss": "a", "css": "b", "rgb": 42}"#;
        assert!(matches!(parse_snippets(raw), Err(ServiceError::BadResponse(_))));
    }

    #[test]
    fn non_json_is_bad_response() {
        assert!(matches!(parse_snippets("Tailwind CSS:\nbg-x"), Err(ServiceError::BadResponse(_))));
    }
}
