//! Field validation for the composer form.
//!
//! Only title and content are required. Image problems are recorded here too,
//! but they come from file selection rather than from [`validate`].

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex_lite::Regex;
use smol_str::SmolStr;

use crate::form::{Field, FormState};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const CONTENT_REQUIRED: &str = "Content is required";
pub const IMAGE_NOT_AN_IMAGE: &str = "Featured image must be an image file";

/// Any markup tag, including comments.
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

/// Embedded media that counts as content even without text.
static MEDIA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(img|video|audio|iframe|embed|object)\b").unwrap());

/// Messages for the fields that are currently invalid.
///
/// A field has an entry only while it is invalid; editing the field removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, SmolStr>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<SmolStr>) {
        self.0.insert(field, message.into());
    }

    /// Drop the error for one field, leaving the others alone.
    ///
    /// Returns whether there was one.
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(SmolStr::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Check the required fields.
///
/// Pure function of the form: the caller decides what to do with the result.
pub fn validate(form: &FormState) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if form.title.trim().is_empty() {
        errors.insert(Field::Title, TITLE_REQUIRED);
    }
    if html_is_blank(&form.content) {
        errors.insert(Field::Content, CONTENT_REQUIRED);
    }
    errors
}

/// Whether editor HTML has nothing a reader would see.
///
/// An emptied contenteditable leaves markup such as `<p><br></p>` behind, so
/// tags and non-breaking spaces are stripped before the whitespace check.
/// Media elements count as content on their own.
pub fn html_is_blank(html: &str) -> bool {
    if html.trim().is_empty() {
        return true;
    }
    if MEDIA_REGEX.is_match(html) {
        return false;
    }
    let text = TAG_REGEX.replace_all(html, "");
    text.replace("&nbsp;", " ")
        .replace('\u{a0}', " ")
        .trim()
        .is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_has_both_errors() {
        let errors = validate(&FormState::default());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Title), Some(TITLE_REQUIRED));
        assert_eq!(errors.get(Field::Content), Some(CONTENT_REQUIRED));
        assert!(!errors.contains(Field::Published));
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let form = FormState::default()
            .with_title("   \t")
            .with_content("\n  ");
        let errors = validate(&form);
        assert!(errors.contains(Field::Title));
        assert!(errors.contains(Field::Content));
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let form = FormState::default()
            .with_title(" Hello ")
            .with_content("<p>World</p>");
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn test_markup_only_content_is_blank() {
        assert!(html_is_blank("<p><br></p>"));
        assert!(html_is_blank("<div><br></div><div>&nbsp;</div>"));
        assert!(html_is_blank("<p>\u{a0}</p><!-- note -->"));
        assert!(!html_is_blank("<p>x</p>"));
        assert!(!html_is_blank(r#"<p><img src="data:image/png;base64,AAAA"></p>"#));
        assert!(!html_is_blank("plain text"));
    }

    #[test]
    fn test_clear_only_touches_one_field() {
        let mut errors = validate(&FormState::default());
        assert!(errors.clear(Field::Title));
        assert!(!errors.clear(Field::Title));
        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            vec![(Field::Content, CONTENT_REQUIRED)]
        );
    }
}
