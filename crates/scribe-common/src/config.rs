use serde::{Deserialize, Serialize};

use crate::error::ScribeError;

/// Where the blog API lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API, e.g. `https://blog.example.com/api`.
    pub endpoint: String,
    /// Path of the create-post endpoint, relative to `endpoint`.
    pub posts_path: String,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn with_posts_path(mut self, path: impl Into<String>) -> Self {
        self.posts_path = path.into();
        self
    }

    /// Full URL of the create-post endpoint.
    ///
    /// Joins by string so a base with its own path prefix (`/api`) keeps it,
    /// which `Url::join` would drop for an absolute `posts_path`.
    pub fn posts_url(&self) -> Result<reqwest::Url, ScribeError> {
        let base = self.endpoint.trim_end_matches('/');
        let path = self.posts_path.trim_start_matches('/');
        let joined = format!("{base}/{path}");
        let url = reqwest::Url::parse(&joined).map_err(|e| ScribeError::InvalidApiBase {
            url: self.endpoint.clone(),
            reason: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ScribeError::InvalidApiBase {
                url: self.endpoint.clone(),
                reason: format!("unsupported scheme {other}"),
            }),
        }
    }
}

impl Default for ClientConfig {
    /// Creates a new default configuration.
    ///
    /// Points at a local development API on port 8000.
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000/api".to_owned(),
            posts_path: "/posts/".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_url_keeps_base_path() {
        let config = ClientConfig::new("https://blog.example.com/api/");
        assert_eq!(
            config.posts_url().unwrap().as_str(),
            "https://blog.example.com/api/posts/"
        );
    }

    #[test]
    fn test_posts_url_custom_path() {
        let config = ClientConfig::new("http://127.0.0.1:9000").with_posts_path("v2/articles");
        assert_eq!(
            config.posts_url().unwrap().as_str(),
            "http://127.0.0.1:9000/v2/articles"
        );
    }

    #[test]
    fn test_posts_url_rejects_bad_base() {
        assert!(matches!(
            ClientConfig::new("not a url").posts_url(),
            Err(ScribeError::InvalidApiBase { .. })
        ));
        assert!(matches!(
            ClientConfig::new("ftp://example.com").posts_url(),
            Err(ScribeError::InvalidApiBase { .. })
        ));
    }
}
