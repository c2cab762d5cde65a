//! Error taxonomy for backend calls.

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Field name to list of validation messages, as the backend shapes its
/// 422 bodies.
pub type FieldErrors = HashMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The fetch itself failed; no HTTP response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status. `errors` carries any
    /// structured validation messages and is empty otherwise.
    #[error("{message} (HTTP {status})")]
    Http {
        status: u16,
        message: String,
        errors: FieldErrors,
    },

    /// A 2xx body that could not be parsed into the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    message: Option<String>,
    #[serde(default)]
    errors: FieldErrors,
}

impl ApiError {
    /// Build the error for a non-2xx response from its status and raw
    /// body text. Unparseable bodies degrade to a generic message.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        ApiError::Http {
            status,
            message: parsed.message.unwrap_or_else(|| "API error".to_string()),
            errors: parsed.errors,
        }
    }

    /// HTTP status if the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for responses a detail view should render as "not found".
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Flattened validation messages, for toast or inline display.
    #[must_use]
    pub fn field_messages(&self) -> Vec<String> {
        match self {
            ApiError::Http { errors, .. } => {
                let mut fields: Vec<&String> = errors.keys().collect();
                fields.sort();
                fields
                    .into_iter()
                    .flat_map(|field| errors[field].iter().cloned())
                    .collect()
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_parses_validation_body() {
        let body = r#"{
            "message": "The given data was invalid.",
            "errors": {
                "email": ["The email field is required."],
                "password": ["The password must be at least 8 characters.", "mismatch"]
            }
        }"#;
        let err = ApiError::from_status(422, body);
        assert_eq!(err.status(), Some(422));
        let ApiError::Http {
            message, errors, ..
        } = &err
        else {
            panic!("expected Http variant");
        };
        assert_eq!(message, "The given data was invalid.");
        assert_eq!(errors["password"].len(), 2);
        assert_eq!(err.field_messages().len(), 3);
    }

    #[test]
    fn from_status_degrades_on_unstructured_body() {
        let err = ApiError::from_status(500, "<html>oops</html>");
        let ApiError::Http {
            status,
            message,
            errors,
        } = err
        else {
            panic!("expected Http variant");
        };
        assert_eq!(status, 500);
        assert_eq!(message, "API error");
        assert!(errors.is_empty());
    }

    #[test]
    fn not_found_is_status_driven() {
        assert!(ApiError::from_status(404, "").is_not_found());
        assert!(!ApiError::from_status(422, "").is_not_found());
        assert!(!ApiError::Network("offline".into()).is_not_found());
    }
}
