//! Error types for scribe - API failures and client setup problems

use std::collections::BTreeMap;

use miette::Diagnostic;
use smol_str::SmolStr;

/// Main error type for scribe setup operations
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum ScribeError {
    /// The configured API base is not a usable URL
    #[error("invalid API base url {url:?}: {reason}")]
    #[diagnostic(
        code(scribe::config::api_base),
        help("set SCRIBE_API_BASE to an absolute http(s) url")
    )]
    InvalidApiBase { url: String, reason: String },

    /// Serialization/deserialization error
    #[error(transparent)]
    #[diagnostic_source]
    Serde(#[from] SerDeError),
}

/// Failure of a call against the blog API.
///
/// The composer never interprets these beyond handing them to the error presenter,
/// which turns them into a sentence via [`ApiError::user_message`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Diagnostic)]
pub enum ApiError {
    /// Server answered with a non-success status
    #[error("server returned {status}{}", .message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
    #[diagnostic(code(scribe::api::status))]
    Status {
        status: u16,
        message: Option<String>,
        /// Per-field messages reported by the server, keyed by wire field name
        field_errors: BTreeMap<SmolStr, Vec<String>>,
    },

    /// Request never got a response
    #[error("network error: {0}")]
    #[diagnostic(code(scribe::api::network))]
    Network(String),

    /// Response body did not have the expected shape
    #[error("could not decode response: {0}")]
    #[diagnostic(code(scribe::api::decode))]
    Decode(String),

    /// Request could not be built (bad mime type, bad url)
    #[error("invalid request: {0}")]
    #[diagnostic(code(scribe::api::request))]
    InvalidRequest(String),
}

impl ApiError {
    /// Build a status error from a raw response body.
    ///
    /// Understands the common JSON error shapes: `{"detail": ".."}`, `{"message": ".."}`,
    /// `{"error": ".."}`, and field maps like `{"title": ["This field is required."]}`.
    /// Anything else is kept as the message verbatim when short enough to show.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let mut message = None;
        let mut field_errors = BTreeMap::new();

        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(serde_json::Value::Object(map)) => {
                for (key, value) in map {
                    match (key.as_str(), value) {
                        ("detail" | "message" | "error", serde_json::Value::String(s)) => {
                            if message.is_none() {
                                message = Some(s);
                            }
                        }
                        (field, serde_json::Value::String(s)) => {
                            field_errors.insert(SmolStr::new(field), vec![s]);
                        }
                        (field, serde_json::Value::Array(items)) => {
                            let messages: Vec<String> = items
                                .into_iter()
                                .filter_map(|item| match item {
                                    serde_json::Value::String(s) => Some(s),
                                    _ => None,
                                })
                                .collect();
                            if !messages.is_empty() {
                                field_errors.insert(SmolStr::new(field), messages);
                            }
                        }
                        _ => {}
                    }
                }
            }
            Ok(serde_json::Value::String(s)) => message = Some(s),
            _ => {
                let trimmed = body.trim();
                if !trimmed.is_empty() && trimmed.len() <= 200 && !trimmed.starts_with('<') {
                    message = Some(trimmed.to_string());
                }
            }
        }

        ApiError::Status {
            status,
            message,
            field_errors,
        }
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Sentence suitable for a toast.
    pub fn user_message(&self) -> String {
        let mut out = match self {
            ApiError::Status {
                status, message, ..
            } => match *status {
                400 | 422 => message
                    .clone()
                    .unwrap_or_else(|| "Please check the form and try again".to_string()),
                401 => "Your session has expired, please sign in again".to_string(),
                403 => "You don't have permission to create posts".to_string(),
                404 => "The post service could not be found".to_string(),
                413 => "The featured image is too large".to_string(),
                429 => "Too many requests, please wait a moment and try again".to_string(),
                500..=599 => "Something went wrong on our end, please try again later".to_string(),
                _ => message
                    .clone()
                    .unwrap_or_else(|| format!("Request failed with status {status}")),
            },
            ApiError::Network(_) => "Could not reach the server, check your connection".to_string(),
            ApiError::Decode(_) => "The server sent an unexpected response".to_string(),
            ApiError::InvalidRequest(_) => "The post could not be sent".to_string(),
        };

        if let ApiError::Status { field_errors, .. } = self {
            for (field, messages) in field_errors {
                out.push_str(&format!("\n{}: {}", field, messages.join(" ")));
            }
        }
        out
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::InvalidRequest(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Serialization/deserialization errors
#[derive(thiserror::Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum SerDeError {
    #[error(transparent)]
    #[diagnostic(code(scribe::serde::json))]
    Json(#[from] serde_json::Error),
}
