//! The in-memory draft of a post.
//!
//! `FormState` is updated copy-on-write: every change consumes the old value and
//! returns the new one, so a UI signal only ever holds complete snapshots.

use std::fmt;

use scribe_common::{ImageFile, fields};

/// A form field, in the order the page lays them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    FeaturedImage,
    Content,
    Published,
}

impl Field {
    /// Name of the field on the wire and in the DOM (`id`/`name` attributes).
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => fields::TITLE,
            Field::FeaturedImage => fields::FEATURED_IMAGE,
            Field::Content => fields::CONTENT,
            Field::Published => fields::PUBLISHED,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A change coming from a plain input (text box or checkbox).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    Title(String),
    Published(bool),
}

impl FieldChange {
    pub fn field(&self) -> Field {
        match self {
            FieldChange::Title(_) => Field::Title,
            FieldChange::Published(_) => Field::Published,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub title: String,
    /// HTML produced by the rich-text editor
    pub content: String,
    pub featured_image: Option<ImageFile>,
    pub published: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            featured_image: None,
            published: true,
        }
    }
}

impl FormState {
    pub fn with_change(self, change: FieldChange) -> Self {
        match change {
            FieldChange::Title(title) => self.with_title(title),
            FieldChange::Published(published) => self.with_published(published),
        }
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }

    pub fn with_content(self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self
        }
    }

    pub fn with_published(self, published: bool) -> Self {
        Self { published, ..self }
    }

    pub fn with_featured_image(self, featured_image: Option<ImageFile>) -> Self {
        Self {
            featured_image,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_published() {
        let form = FormState::default();
        assert!(form.published);
        assert!(form.title.is_empty());
        assert!(form.featured_image.is_none());
    }

    #[test]
    fn test_with_change_touches_one_field() {
        let form = FormState::default()
            .with_content("<p>body</p>")
            .with_change(FieldChange::Title("Draft".into()))
            .with_change(FieldChange::Published(false));
        assert_eq!(form.title, "Draft");
        assert_eq!(form.content, "<p>body</p>");
        assert!(!form.published);
    }

    #[test]
    fn test_field_names_match_wire() {
        assert_eq!(Field::Title.name(), "title");
        assert_eq!(Field::FeaturedImage.to_string(), "featured_image");
        assert_eq!(Field::Content.name(), "content");
        assert_eq!(Field::Published.name(), "published");
        assert_eq!(FieldChange::Published(true).field(), Field::Published);
    }
}
