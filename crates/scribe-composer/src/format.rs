//! Formatting actions offered by the rich-text toolbar.
//!
//! The browser widget applies these through `document.execCommand`, so each
//! action maps to a command name and an optional value.

/// Formatting actions available in the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatAction {
    /// Block heading, 1-6. `Heading(0)` turns the block back into a paragraph.
    Heading(u8),
    Bold,
    Italic,
    Underline,
    Strikethrough,
    NumberedList,
    BulletList,
    Indent,
    Outdent,
    Link,
    Image,
    CodeBlock,
    /// Strip inline formatting from the selection
    Clean,
}

/// A single `execCommand` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorCommand {
    pub name: &'static str,
    pub value: Option<String>,
}

impl FormatAction {
    /// Short label for the toolbar button.
    pub fn label(self) -> &'static str {
        match self {
            FormatAction::Heading(0) => "¶",
            FormatAction::Heading(1) => "H1",
            FormatAction::Heading(2) => "H2",
            FormatAction::Heading(3) => "H3",
            FormatAction::Heading(4) => "H4",
            FormatAction::Heading(5) => "H5",
            FormatAction::Heading(_) => "H6",
            FormatAction::Bold => "B",
            FormatAction::Italic => "I",
            FormatAction::Underline => "U",
            FormatAction::Strikethrough => "S",
            FormatAction::NumberedList => "1.",
            FormatAction::BulletList => "•",
            FormatAction::Indent => "→",
            FormatAction::Outdent => "←",
            FormatAction::Link => "🔗",
            FormatAction::Image => "🖼",
            FormatAction::CodeBlock => "</>",
            FormatAction::Clean => "Tx",
        }
    }

    /// Tooltip and aria label.
    pub fn title(self) -> &'static str {
        match self {
            FormatAction::Heading(0) => "Normal text",
            FormatAction::Heading(1) => "Heading 1",
            FormatAction::Heading(2) => "Heading 2",
            FormatAction::Heading(3) => "Heading 3",
            FormatAction::Heading(4) => "Heading 4",
            FormatAction::Heading(5) => "Heading 5",
            FormatAction::Heading(_) => "Heading 6",
            FormatAction::Bold => "Bold (Ctrl+B)",
            FormatAction::Italic => "Italic (Ctrl+I)",
            FormatAction::Underline => "Underline (Ctrl+U)",
            FormatAction::Strikethrough => "Strikethrough",
            FormatAction::NumberedList => "Numbered List",
            FormatAction::BulletList => "Bullet List",
            FormatAction::Indent => "Indent",
            FormatAction::Outdent => "Outdent",
            FormatAction::Link => "Link",
            FormatAction::Image => "Image",
            FormatAction::CodeBlock => "Code Block",
            FormatAction::Clean => "Clear Formatting",
        }
    }

    /// Link and image need a URL from the user before they can run.
    pub fn needs_url(self) -> bool {
        matches!(self, FormatAction::Link | FormatAction::Image)
    }

    /// The command to run, given the URL for actions that need one.
    ///
    /// Returns `None` when a required URL is missing or unsafe.
    pub fn command(self, url: Option<&str>) -> Option<EditorCommand> {
        let (name, value) = match self {
            FormatAction::Heading(0) => ("formatBlock", Some("p".to_string())),
            FormatAction::Heading(level) => {
                ("formatBlock", Some(format!("h{}", level.min(6))))
            }
            FormatAction::Bold => ("bold", None),
            FormatAction::Italic => ("italic", None),
            FormatAction::Underline => ("underline", None),
            FormatAction::Strikethrough => ("strikeThrough", None),
            FormatAction::NumberedList => ("insertOrderedList", None),
            FormatAction::BulletList => ("insertUnorderedList", None),
            FormatAction::Indent => ("indent", None),
            FormatAction::Outdent => ("outdent", None),
            FormatAction::Link => ("createLink", Some(sanitize_url(url?)?)),
            FormatAction::Image => ("insertImage", Some(sanitize_url(url?)?)),
            FormatAction::CodeBlock => ("formatBlock", Some("pre".to_string())),
            FormatAction::Clean => ("removeFormat", None),
        };
        Some(EditorCommand { name, value })
    }
}

/// Toolbar layout: groups of buttons separated visually.
pub fn default_toolbar() -> Vec<Vec<FormatAction>> {
    use FormatAction::*;
    vec![
        vec![
            Heading(1),
            Heading(2),
            Heading(3),
            Heading(4),
            Heading(5),
            Heading(6),
            Heading(0),
        ],
        vec![Bold, Italic, Underline, Strikethrough],
        vec![NumberedList, BulletList],
        vec![Outdent, Indent],
        vec![Link, Image, CodeBlock],
        vec![Clean],
    ]
}

/// Accept only links a reader can safely follow.
///
/// Relative paths, `http(s)`, `mailto` and image `data:` URLs pass; script
/// schemes and anything else with a scheme do not. Bare hosts get `https://`.
pub fn sanitize_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    if url.starts_with('/') || url.starts_with('#') {
        return Some(url.to_string());
    }
    let lower = url.to_ascii_lowercase();
    if let Some((scheme, _)) = lower.split_once(':') {
        let is_scheme = !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if is_scheme {
            return match scheme {
                "http" | "https" | "mailto" => Some(url.to_string()),
                "data" if lower.starts_with("data:image/") => Some(url.to_string()),
                _ => None,
            };
        }
    }
    Some(format!("https://{url}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands() {
        assert_eq!(
            FormatAction::Heading(2).command(None),
            Some(EditorCommand {
                name: "formatBlock",
                value: Some("h2".into())
            })
        );
        assert_eq!(
            FormatAction::Heading(0).command(None).unwrap().value.as_deref(),
            Some("p")
        );
        assert_eq!(FormatAction::Bold.command(None).unwrap().name, "bold");
        assert_eq!(
            FormatAction::CodeBlock.command(None).unwrap().value.as_deref(),
            Some("pre")
        );
    }

    #[test]
    fn test_link_needs_safe_url() {
        assert!(FormatAction::Link.needs_url());
        assert_eq!(FormatAction::Link.command(None), None);
        assert_eq!(FormatAction::Link.command(Some("javascript:alert(1)")), None);
        assert_eq!(
            FormatAction::Link
                .command(Some("example.com/a"))
                .unwrap()
                .value
                .as_deref(),
            Some("https://example.com/a")
        );
    }

    #[test]
    fn test_sanitize_url() {
        assert_eq!(sanitize_url(" /post/x "), Some("/post/x".into()));
        assert_eq!(sanitize_url("HTTPS://a.b"), Some("HTTPS://a.b".into()));
        assert_eq!(sanitize_url("mailto:me@a.b"), Some("mailto:me@a.b".into()));
        assert_eq!(sanitize_url("data:text/html,<b>"), None);
        assert_eq!(sanitize_url("JavaScript:void(0)"), None);
        assert_eq!(sanitize_url("   "), None);
    }

    #[test]
    fn test_toolbar_covers_every_action_once() {
        let toolbar = default_toolbar();
        let flat: Vec<_> = toolbar.iter().flatten().copied().collect();
        assert_eq!(flat.len(), 19);
        for (i, a) in flat.iter().enumerate() {
            assert!(!flat[i + 1..].contains(a), "{a:?} repeated");
        }
    }
}
