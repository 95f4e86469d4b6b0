use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::{ScribeError, SerDeError};
use crate::post::ApiId;

/// The signed-in user, as the auth layer hands it to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: ApiId,
    #[serde(default, alias = "username")]
    pub name: Option<SmolStr>,
    /// Bearer token for API calls, when the backend uses one
    #[serde(default, alias = "access_token", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl CurrentUser {
    pub fn new(id: impl Into<ApiId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            token: None,
        }
    }

    /// Parse the JSON blob the login flow leaves in storage.
    pub fn from_json(json: &str) -> Result<Self, ScribeError> {
        serde_json::from_str(json).map_err(|e| ScribeError::Serde(SerDeError::Json(e)))
    }

    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.to_string(),
            None => format!("user {}", self.id),
        }
    }
}
