use serde_json::{Value, json};

use crate::mcp::errors;
use crate::okm::OkmError;

pub mod categories;
pub mod get_metadata;
pub mod keywords;
pub mod list_directory;
pub mod property_groups;
pub mod read_file;
pub mod search_documents;

/// Tool-level failure: reported to the caller as an `isError` response,
/// never as a protocol fault.
#[derive(Debug)]
pub struct ToolError {
    pub kind: &'static str,
    pub message: String,
}

impl ToolError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: errors::VALIDATION_ERROR,
            message: message.into(),
        }
    }

    pub fn extraction(message: impl Into<String>) -> Self {
        Self {
            kind: errors::EXTRACTION_ERROR,
            message: message.into(),
        }
    }
}

impl From<OkmError> for ToolError {
    fn from(err: OkmError) -> Self {
        Self {
            kind: errors::TRANSPORT_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ToolError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            kind: errors::TRANSPORT_ERROR,
            message: err.to_string(),
        }
    }
}

pub fn error_result(
    kind: &'static str,
    message: impl Into<String>,
    source: Option<&str>,
) -> serde_json::Value {
    let message = message.into();
    let mut error = json!({
        "kind": kind,
        "message": message,
    });

    if let Some(source) = source
        && let Some(obj) = error.as_object_mut()
    {
        obj.insert("source".to_string(), json!(source));
    }

    json!({
        "content": [{"type": "text", "text": format!("Error: {message}")}],
        "structuredContent": {"error": error},
        "isError": true
    })
}

pub fn text_result(text: impl Into<String>) -> serde_json::Value {
    json!({
        "content": [{"type": "text", "text": text.into()}],
        "isError": false
    })
}

pub fn json_result(value: Value) -> serde_json::Value {
    json!({
        "content": [{"type": "json", "json": value}],
        "isError": false
    })
}

/// Required string argument; empty strings fail closed.
pub fn require_str<'a>(args: &'a Value, key: &str) -> Result<&'a str, ToolError> {
    match args.get(key) {
        Some(Value::String(value)) if !value.is_empty() => Ok(value),
        Some(Value::String(_)) => Err(ToolError::validation(format!(
            "{key} must be a non-empty string"
        ))),
        Some(_) => Err(ToolError::validation(format!("{key} must be a string"))),
        None => Err(ToolError::validation(format!("{key} is required"))),
    }
}

pub fn str_or_default<'a>(
    args: &'a Value,
    key: &str,
    default: &'a str,
) -> Result<&'a str, ToolError> {
    match args.get(key) {
        None => Ok(default),
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(ToolError::validation(format!("{key} must be a string"))),
    }
}

/// Positive integer capped at `max`, defaulting when absent.
pub fn limit_or_default(
    args: &Value,
    key: &str,
    default: u64,
    max: u64,
) -> Result<usize, ToolError> {
    let limit = match args.get(key) {
        None => default,
        Some(value) => value
            .as_u64()
            .filter(|limit| *limit >= 1)
            .ok_or_else(|| ToolError::validation(format!("{key} must be a positive integer")))?,
    };
    if limit > max {
        return Err(ToolError::validation(format!("{key} must be at most {max}")));
    }
    Ok(limit as usize)
}
