//! Data-URL previews for the featured image.

use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD};
use scribe_common::ImageFile;

/// `data:` URL shown next to the file input.
#[derive(Clone, PartialEq, Eq)]
pub struct PreviewImage(String);

impl PreviewImage {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Base64 payloads run to megabytes; keep logs readable.
impl fmt::Debug for PreviewImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head: String = self.0.chars().take(32).collect();
        write!(f, "PreviewImage({head}.. {} bytes)", self.0.len())
    }
}

impl fmt::Display for PreviewImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encode an image as a `data:{mime};base64,..` URL.
pub fn encode_data_url(image: &ImageFile) -> PreviewImage {
    PreviewImage(format!(
        "data:{};base64,{}",
        image.mime_type,
        STANDARD.encode(&image.data)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_data_url() {
        let gif = ImageFile::new("dot.gif", b"GIF89a".to_vec(), None);
        let preview = encode_data_url(&gif);
        assert_eq!(preview.as_str(), "data:image/gif;base64,R0lGODlh");
        assert_eq!(preview.to_string(), preview.as_str());
    }
}
