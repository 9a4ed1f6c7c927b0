//! Error taxonomy for backend calls.
//!
//! Read failures degrade to an empty-state view plus an inline error; write
//! failures leave prior local state untouched and surface a retryable inline
//! error. Nothing is retried automatically and no failure is fatal to the
//! application.

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Transport failure or timeout; no finer distinction is made.
    #[error("could not reach the server: {0}")]
    Network(String),

    /// Non-2xx response; `message` is extracted from an `{"error": ..}` or
    /// field-error body when the backend sent one.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response from the server: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Handles both `{"error": "..."}` and DRF field-error maps like
/// `{"phone": ["A user with this phone number already exists."]}`.
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    if let Some(msg) = value.get("error").and_then(|v| v.as_str()) {
        return Some(msg.to_string());
    }
    if let Some(map) = value.as_object() {
        for (field, errors) in map {
            if let Some(first) = errors
                .as_array()
                .and_then(|a| a.first())
                .and_then(|v| v.as_str())
            {
                return Some(format!("{field}: {first}"));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_error_key() {
        assert_eq!(
            extract_error_message(r#"{"error": "Invalid credentials"}"#),
            Some("Invalid credentials".to_string())
        );
    }

    #[test]
    fn extracts_first_field_error() {
        let body = r#"{"phone": ["A user with this phone number already exists."]}"#;
        assert_eq!(
            extract_error_message(body),
            Some("phone: A user with this phone number already exists.".to_string())
        );
    }

    #[test]
    fn non_json_body_yields_none() {
        assert_eq!(extract_error_message("<html>500</html>"), None);
    }
}
