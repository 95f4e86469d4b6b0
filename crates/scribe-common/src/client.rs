use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};

use crate::config::ClientConfig;
use crate::error::{ApiError, ScribeError};
use crate::post::{CreatedPost, NewPost, PartValue};

/// The create-post mutation.
///
/// Kept as a trait so the composer can run against a fake in tests and against
/// [`HttpPostApi`] in the browser. Futures are not `Send`: on wasm the fetch
/// promise lives on the single UI thread.
pub trait PostApi {
    /// Create a post and return what the server made of it.
    fn create_post(
        &self,
        post: NewPost,
    ) -> impl Future<Output = Result<CreatedPost, ApiError>>;
}

/// [`PostApi`] over HTTP, sending the post as `multipart/form-data`.
#[derive(Debug, Clone)]
pub struct HttpPostApi {
    client: reqwest::Client,
    url: reqwest::Url,
    bearer: Option<String>,
}

impl HttpPostApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ScribeError> {
        Ok(Self {
            client: reqwest::Client::new(),
            url: config.posts_url()?,
            bearer: None,
        })
    }

    /// Reuse an existing client (connection pool, default headers).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Attach the signed-in user's token as `Authorization: Bearer`.
    pub fn with_bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token.filter(|t| !t.is_empty());
        self
    }

    pub fn url(&self) -> &reqwest::Url {
        &self.url
    }

    /// Encode a post as multipart form fields.
    pub fn form(post: &NewPost) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for (name, value) in post.parts() {
            form = match value {
                PartValue::Text(text) => form.text(name, text),
                PartValue::File(image) => {
                    let part = Part::bytes(image.data.to_vec())
                        .file_name(image.name.to_string())
                        .mime_str(&image.mime_type)
                        .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

impl PostApi for HttpPostApi {
    async fn create_post(&self, post: NewPost) -> Result<CreatedPost, ApiError> {
        tracing::info!(
            url = %self.url,
            title_len = post.title.len(),
            content_len = post.content.len(),
            published = post.published,
            has_image = post.featured_image.is_some(),
            "creating post"
        );

        let form = Self::form(&post)?;
        let mut request = self
            .client
            .post(self.url.clone())
            .header(ACCEPT, "application/json")
            .multipart(form);
        if let Some(token) = &self.bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("create post request failed: {e}");
            ApiError::from(e)
        })?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), body_len = body.len(), "create post response");

        if status.is_success() {
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            let err = ApiError::from_response_body(status.as_u16(), &body);
            tracing::warn!("create post rejected: {err}");
            Err(err)
        }
    }
}

#[cfg(all(test, not(all(target_family = "wasm", target_os = "unknown"))))]
mod tests {
    use super::*;
    use crate::post::{ApiId, ImageFile};
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn post(image: Option<ImageFile>) -> NewPost {
        NewPost {
            title: "Hello world".into(),
            content: "<p>First <b>post</b></p>".into(),
            published: true,
            author_id: ApiId::Numeric(12),
            featured_image: image,
        }
    }

    fn api_for(server: &MockServer) -> HttpPostApi {
        HttpPostApi::new(&ClientConfig::new(format!("{}/api", server.uri()))).unwrap()
    }

    #[tokio::test]
    async fn test_create_post_sends_all_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/posts/"))
            .and(body_string_contains("name=\"title\""))
            .and(body_string_contains("Hello world"))
            .and(body_string_contains("<p>First <b>post</b></p>"))
            .and(body_string_contains("name=\"published\""))
            .and(body_string_contains("name=\"author_id\""))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"slug": "hello-world", "id": 5})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let created = api_for(&server).create_post(post(None)).await.unwrap();
        assert_eq!(created.slug, "hello-world");
    }

    #[tokio::test]
    async fn test_create_post_sends_image_and_token() {
        let server = MockServer::start().await;
        let gif = ImageFile::new("tiny.gif", b"GIF89a\x01\x00\x01\x00".to_vec(), None);
        Mock::given(method("POST"))
            .and(path("/api/posts/"))
            .and(header("authorization", "Bearer secret"))
            .and(body_string_contains(
                "name=\"featured_image\"; filename=\"tiny.gif\"",
            ))
            .and(body_string_contains("image/gif"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"slug": "with-image"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let created = api_for(&server)
            .with_bearer(Some("secret".into()))
            .create_post(post(Some(gif)))
            .await
            .unwrap();
        assert_eq!(created.slug, "with-image");
    }

    #[tokio::test]
    async fn test_create_post_maps_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"title": ["Post with this title exists."]})),
            )
            .mount(&server)
            .await;

        let err = api_for(&server).create_post(post(None)).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert!(err.user_message().contains("Post with this title exists."));
    }

    #[tokio::test]
    async fn test_create_post_bad_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_body_string("created"))
            .mount(&server)
            .await;

        let err = api_for(&server).create_post(post(None)).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_create_post_unreachable() {
        // Grab a free port, then close it so nothing answers there.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let api =
            HttpPostApi::new(&ClientConfig::new(format!("http://127.0.0.1:{port}"))).unwrap();
        let err = api.create_post(post(None)).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
