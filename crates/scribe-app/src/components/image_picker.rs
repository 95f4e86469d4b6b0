//! Featured image picker with inline preview.
//!
//! Asks the page for a selection ticket before reading a file, so an oversized
//! file is never read and a slow read cannot overtake a newer pick. Whether
//! the bytes are an acceptable image is the composer's call, not the picker's.

use dioxus::prelude::*;
use scribe_common::{ImageFile, mime_for_file_name};
use scribe_composer::SelectionTicket;

use super::{Button, ButtonVariant, FieldError};

#[derive(Props, Clone, PartialEq)]
pub struct ImagePickerProps {
    /// `data:` URL of the current selection
    #[props(default)]
    pub preview: Option<String>,
    #[props(default)]
    pub error: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
    /// A file of this many bytes was chosen; `None` means do not read it
    pub on_begin: Callback<u64, Option<SelectionTicket>>,
    pub on_select: EventHandler<(SelectionTicket, ImageFile)>,
    pub on_clear: EventHandler<()>,
}

#[component]
pub fn ImagePicker(props: ImagePickerProps) -> Element {
    let on_begin = props.on_begin;
    let on_select = props.on_select;
    let on_clear = props.on_clear;

    let on_file_change = move |evt: Event<FormData>| {
        // Cancelling the dialog leaves the current selection alone.
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let Some(ticket) = on_begin.call(file.size()) else {
            return;
        };
        spawn(async move {
            let name = file.name();
            match file.read_bytes().await {
                Ok(data) => {
                    let content_type = file.content_type();
                    let reported = reported_mime(content_type.as_deref(), &name);
                    let image = ImageFile::new(name.as_str(), data, reported);
                    tracing::debug!(?image, "featured image read");
                    on_select.call((ticket, image));
                }
                Err(e) => tracing::warn!(error = ?e, "could not read {name}"),
            }
        });
    };

    rsx! {
        div { class: "form-group image-picker",
            label { r#for: "featured-image", "Featured Image" }
            input {
                id: "featured-image",
                r#type: "file",
                accept: "image/*",
                disabled: props.disabled,
                onchange: on_file_change,
            }
            if let Some(src) = props.preview {
                div { class: "image-preview",
                    img { src: "{src}", alt: "Featured image preview" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        disabled: props.disabled,
                        onclick: move |_| on_clear.call(()),
                        "Remove"
                    }
                }
            }
            FieldError { message: props.error }
        }
    }
}

/// The type the browser reported, or a guess from the file name when it had none.
fn reported_mime<'a>(content_type: Option<&'a str>, name: &str) -> Option<&'a str> {
    content_type
        .filter(|m| !m.is_empty())
        .or_else(|| mime_for_file_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_type_wins_over_name() {
        assert_eq!(reported_mime(Some("image/webp"), "photo.png"), Some("image/webp"));
        assert_eq!(reported_mime(Some(""), "photo.png"), Some("image/png"));
        assert_eq!(reported_mime(None, "photo.jpeg"), Some("image/jpeg"));
        assert_eq!(reported_mime(None, "photo"), None);
    }
}
