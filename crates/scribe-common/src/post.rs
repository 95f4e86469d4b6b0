//! Blog API data model: the post we send and what the server hands back.

use std::fmt;

use bytes::Bytes;
use mime_sniffer::MimeTypeSniffer;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Multipart field names understood by the posts endpoint.
pub mod fields {
    pub const TITLE: &str = "title";
    pub const CONTENT: &str = "content";
    pub const PUBLISHED: &str = "published";
    pub const AUTHOR_ID: &str = "author_id";
    pub const FEATURED_IMAGE: &str = "featured_image";
}

/// Identifier of a user or post as the API knows it.
///
/// Backends disagree on whether user ids are numbers or strings, so both deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiId {
    Numeric(u64),
    Text(SmolStr),
}

impl fmt::Display for ApiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiId::Numeric(id) => write!(f, "{id}"),
            ApiId::Text(id) => write!(f, "{id}"),
        }
    }
}

impl From<u64> for ApiId {
    fn from(id: u64) -> Self {
        ApiId::Numeric(id)
    }
}

impl From<&str> for ApiId {
    fn from(id: &str) -> Self {
        ApiId::Text(SmolStr::new(id))
    }
}

/// An image picked by the user, kept in memory until submit.
#[derive(Clone, PartialEq)]
pub struct ImageFile {
    /// Original file name, sent as the multipart filename
    pub name: SmolStr,
    /// MIME type, sniffed from the bytes where possible
    pub mime_type: SmolStr,
    pub data: Bytes,
}

impl ImageFile {
    /// Wrap freshly read file bytes.
    ///
    /// The type is sniffed from the content first; the browser-reported type is only
    /// trusted when sniffing finds nothing.
    pub fn new(name: impl Into<SmolStr>, data: impl Into<Bytes>, reported: Option<&str>) -> Self {
        let data: Bytes = data.into();
        let mime_type = SmolStr::new(
            data.sniff_mime_type()
                .or(reported.filter(|m| !m.is_empty()))
                .unwrap_or("application/octet-stream"),
        );
        Self {
            name: name.into(),
            mime_type,
            data,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

// Image bytes make derived Debug output useless.
impl fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.data.len())
            .finish()
    }
}

/// Best guess at a MIME type from a file name, for when the bytes say nothing.
pub fn mime_for_file_name(name: &str) -> Option<&'static str> {
    let (_, ext) = name.rsplit_once('.')?;
    let mime = match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        _ => return None,
    };
    Some(mime)
}

/// A post ready to be sent to the create endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    /// HTML from the rich-text editor
    pub content: String,
    pub published: bool,
    pub author_id: ApiId,
    pub featured_image: Option<ImageFile>,
}

/// One multipart field of a [`NewPost`].
#[derive(Debug, Clone, PartialEq)]
pub enum PartValue<'a> {
    Text(String),
    File(&'a ImageFile),
}

impl NewPost {
    /// Fields in the order they go on the wire.
    ///
    /// The image part is only present when an image was picked.
    pub fn parts(&self) -> Vec<(&'static str, PartValue<'_>)> {
        let mut parts = vec![
            (fields::TITLE, PartValue::Text(self.title.clone())),
            (fields::CONTENT, PartValue::Text(self.content.clone())),
            (fields::PUBLISHED, PartValue::Text(self.published.to_string())),
            (fields::AUTHOR_ID, PartValue::Text(self.author_id.to_string())),
        ];
        if let Some(image) = &self.featured_image {
            parts.push((fields::FEATURED_IMAGE, PartValue::File(image)));
        }
        parts
    }
}

/// Response of a successful create call.
///
/// Only `slug` is required; servers tend to echo back the whole post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedPost {
    pub slug: SmolStr,
    #[serde(default)]
    pub id: Option<ApiId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
}

/// Client-side route of a post page.
pub fn post_path(slug: &str) -> String {
    format!("/post/{}", urlencoding::encode(slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    #[test]
    fn test_image_file_sniffs_over_reported_type() {
        let file = ImageFile::new("cat.png", PNG_HEADER.to_vec(), Some("text/plain"));
        assert_eq!(file.mime_type, "image/png");
        assert!(file.is_image());
    }

    #[test]
    fn test_text_file_is_not_an_image() {
        let file = ImageFile::new("notes.txt", b"hello there".to_vec(), Some("text/plain"));
        assert_eq!(file.mime_type, "text/plain");
        assert!(!file.is_image());
        assert_eq!(file.len(), 11);
    }

    #[test]
    fn test_parts_order_and_optional_image() {
        let mut post = NewPost {
            title: "  Hello ".into(),
            content: "<p>Hi</p>".into(),
            published: false,
            author_id: ApiId::Numeric(7),
            featured_image: None,
        };
        insta::assert_debug_snapshot!(post.parts(), @r#"
        [
            (
                "title",
                Text(
                    "  Hello ",
                ),
            ),
            (
                "content",
                Text(
                    "<p>Hi</p>",
                ),
            ),
            (
                "published",
                Text(
                    "false",
                ),
            ),
            (
                "author_id",
                Text(
                    "7",
                ),
            ),
        ]
        "#);

        post.featured_image = Some(ImageFile::new("a.png", PNG_HEADER.to_vec(), None));
        let parts = post.parts();
        assert_eq!(parts.len(), 5);
        assert_eq!(parts[4].0, fields::FEATURED_IMAGE);
        assert!(matches!(parts[4].1, PartValue::File(f) if f.name == "a.png"));
    }

    #[test]
    fn test_author_id_deserializes_either_shape() {
        let n: ApiId = serde_json::from_str("42").unwrap();
        let s: ApiId = serde_json::from_str(r#""u-42""#).unwrap();
        assert_eq!(n, ApiId::Numeric(42));
        assert_eq!(s.to_string(), "u-42");
    }

    #[test]
    fn test_created_post_ignores_extra_fields() {
        let created: CreatedPost =
            serde_json::from_str(r#"{"slug": "hello-world", "id": 3, "views": 0}"#).unwrap();
        assert_eq!(created.slug, "hello-world");
        assert_eq!(created.id, Some(ApiId::Numeric(3)));
    }

    #[test]
    fn test_mime_for_file_name() {
        assert_eq!(mime_for_file_name("Holiday.JPG"), Some("image/jpeg"));
        assert_eq!(mime_for_file_name("logo.svg"), Some("image/svg+xml"));
        assert_eq!(mime_for_file_name("README"), None);
        assert_eq!(mime_for_file_name("archive.tar.zst"), None);
    }

    #[test]
    fn test_post_path_encodes_slug() {
        assert_eq!(post_path("hello-world"), "/post/hello-world");
        assert_eq!(post_path("a b/c"), "/post/a%20b%2Fc");
    }
}
