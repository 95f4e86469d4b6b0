use scribe_common::{ClientConfig, CurrentUser, HttpPostApi, ScribeError};

/// Shared HTTP plumbing, provided once through context.
///
/// One `reqwest::Client` for the whole app; per-call APIs pick up the
/// signed-in user's token.
#[derive(Clone, Debug)]
pub struct Fetcher {
    client: reqwest::Client,
    config: ClientConfig,
}

impl Fetcher {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn post_api(&self, user: Option<&CurrentUser>) -> Result<HttpPostApi, ScribeError> {
        Ok(HttpPostApi::new(&self.config)?
            .with_client(self.client.clone())
            .with_bearer(user.and_then(|u| u.token.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_api_uses_configured_url() {
        let fetcher = Fetcher::new(ClientConfig::new("https://blog.example.com/api"));
        let mut user = CurrentUser::new(1u64);
        user.token = Some("t0k".into());
        let api = fetcher.post_api(Some(&user)).unwrap();
        assert_eq!(api.url().as_str(), "https://blog.example.com/api/posts/");
    }

    #[test]
    fn test_post_api_rejects_bad_base() {
        let fetcher = Fetcher::new(ClientConfig::new("ftp://blog.example.com"));
        assert!(fetcher.post_api(None).is_err());
    }
}
