use dioxus::prelude::*;

/// Inline message under an invalid field.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            div { class: "error-message", role: "alert", "{message}" }
        },
        None => rsx! {},
    }
}
