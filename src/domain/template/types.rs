//! Template types and error definitions

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Caller-supplied substitution parameters (name -> value).
///
/// No schema is applied: any key set is accepted and keys that do not
/// appear as tokens in the template are ignored.
pub type Parameters = HashMap<String, String>;

/// Domain errors surfaced by the template service
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Template ID '{0}' already exists")]
    Duplicate(String),

    #[error("Template ID '{0}' not found")]
    NotFound(String),

    #[error("Template storage unavailable: {0}")]
    Unavailable(String),
}

impl TemplateError {
    /// Stable, machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            TemplateError::InvalidInput(_) => "INVALID_INPUT",
            TemplateError::Duplicate(_) => "DUPLICATE_CREATION",
            TemplateError::NotFound(_) => "NOT_FOUND",
            TemplateError::Unavailable(_) => "UNAVAILABLE",
        }
    }
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// A stored message template
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Template {
    /// Unique, immutable template identifier
    pub id: String,

    /// Template body with `$name` placeholders
    pub text: String,
}

impl Template {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Request to create a new template.
///
/// Both fields are optional at the wire level so that missing values are
/// reported as `INVALID_INPUT` rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTemplateRequest {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub text: Option<String>,
}

impl CreateTemplateRequest {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            text: Some(text.into()),
        }
    }

    /// Validate the request and convert it into a template
    pub fn into_template(self) -> TemplateResult<Template> {
        let id = match self.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => {
                return Err(TemplateError::InvalidInput(
                    "Template ID must be a non-empty string".to_string(),
                ))
            }
        };

        let text = match self.text {
            Some(text) if !text.is_empty() => text,
            _ => {
                return Err(TemplateError::InvalidInput(
                    "Template text must be a non-empty string".to_string(),
                ))
            }
        };

        Ok(Template { id, text })
    }
}

/// A rendered message ready to be returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedMessage {
    #[serde(rename = "messageText")]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_into_template() {
        let template = CreateTemplateRequest::new("welcome", "Hello $name")
            .into_template()
            .unwrap();
        assert_eq!(template, Template::new("welcome", "Hello $name"));
    }

    #[test]
    fn test_request_rejects_missing_or_blank_id() {
        let missing = CreateTemplateRequest {
            id: None,
            text: Some("text".to_string()),
        };
        assert!(matches!(
            missing.into_template(),
            Err(TemplateError::InvalidInput(_))
        ));

        let blank = CreateTemplateRequest::new("   ", "text");
        assert!(matches!(
            blank.into_template(),
            Err(TemplateError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_request_rejects_missing_or_empty_text() {
        let missing = CreateTemplateRequest {
            id: Some("id".to_string()),
            text: None,
        };
        assert!(matches!(
            missing.into_template(),
            Err(TemplateError::InvalidInput(_))
        ));

        let empty = CreateTemplateRequest::new("id", "");
        assert!(matches!(
            empty.into_template(),
            Err(TemplateError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let codes = [
            TemplateError::InvalidInput(String::new()).code(),
            TemplateError::Duplicate(String::new()).code(),
            TemplateError::NotFound(String::new()).code(),
            TemplateError::Unavailable(String::new()).code(),
        ];
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn test_rendered_message_wire_name() {
        let json = serde_json::to_value(RenderedMessage {
            text: "Hi".to_string(),
        })
        .unwrap();
        assert_eq!(json["messageText"], "Hi");
    }
}
