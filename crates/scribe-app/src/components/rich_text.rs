//! Rich-text editor: a `contenteditable` surface plus a formatting toolbar.
//!
//! The surface owns its DOM; Dioxus only seeds it once. Every input and
//! toolbar action reads `innerHTML` back and reports it through `on_change`.

use dioxus::prelude::*;
use scribe_composer::{FormatAction, default_toolbar};

#[derive(Props, Clone, PartialEq)]
pub struct RichTextEditorProps {
    /// DOM id of the editable surface
    #[props(into)]
    pub id: String,
    #[props(into, default)]
    pub initial_html: String,
    #[props(into, default)]
    pub placeholder: String,
    #[props(default = false)]
    pub read_only: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn RichTextEditor(props: RichTextEditorProps) -> Element {
    let toolbar = use_hook(default_toolbar);
    // Seeded once; re-rendering the surface would reset the caret.
    let initial_html = use_hook(|| props.initial_html.clone());
    let on_change = props.on_change;
    let read_only = props.read_only;

    let surface_id = props.id.clone();
    let on_input = move |_: FormEvent| {
        if let Some(html) = dom::read_html(&surface_id) {
            on_change.call(html);
        }
    };

    rsx! {
        div { class: if read_only { "rich-text read-only" } else { "rich-text" },
            div { class: "editor-toolbar", role: "toolbar", aria_label: "Formatting",
                for (i, group) in toolbar.iter().enumerate() {
                    if i > 0 {
                        span { class: "toolbar-separator" }
                    }
                    for action in group.iter().copied() {
                        button {
                            r#type: "button",
                            class: "toolbar-button",
                            title: action.title(),
                            aria_label: action.title(),
                            disabled: read_only,
                            // Keep the selection in the surface.
                            onmousedown: move |evt: MouseEvent| evt.prevent_default(),
                            onclick: {
                                let surface_id = props.id.clone();
                                move |_| {
                                    if let Some(html) = apply_action(&surface_id, action) {
                                        on_change.call(html);
                                    }
                                }
                            },
                            "{action.label()}"
                        }
                    }
                }
            }
            div {
                id: "{props.id}",
                class: "rich-text-surface",
                contenteditable: if read_only { "false" } else { "true" },
                role: "textbox",
                "aria-multiline": "true",
                "data-placeholder": "{props.placeholder}",
                dangerous_inner_html: "{initial_html}",
                oninput: on_input,
            }
        }
    }
}

/// Run a toolbar action against the surface and return the new HTML.
///
/// `None` when nothing changed: the user cancelled the URL prompt, the URL
/// was rejected, or the browser refused the command.
fn apply_action(surface_id: &str, action: FormatAction) -> Option<String> {
    let url = if action.needs_url() {
        let message = match action {
            FormatAction::Image => "Image URL",
            _ => "Link URL",
        };
        Some(dom::prompt(message)?)
    } else {
        None
    };
    let Some(command) = action.command(url.as_deref()) else {
        tracing::debug!(?action, "rejected toolbar url");
        return None;
    };
    if !dom::exec(surface_id, command.name, command.value.as_deref()) {
        tracing::debug!(command = command.name, "execCommand refused");
        return None;
    }
    dom::read_html(surface_id)
}

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
mod dom {
    use wasm_bindgen::JsCast;

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    pub fn read_html(id: &str) -> Option<String> {
        Some(document()?.get_element_by_id(id)?.inner_html())
    }

    pub fn exec(id: &str, name: &str, value: Option<&str>) -> bool {
        let Some(document) = document() else {
            return false;
        };
        if let Some(surface) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = surface.focus();
        }
        let Ok(document) = document.dyn_into::<web_sys::HtmlDocument>() else {
            return false;
        };
        let result = match value {
            Some(value) => document.exec_command_with_show_ui_and_value(name, false, value),
            None => document.exec_command(name),
        };
        result.unwrap_or(false)
    }

    pub fn prompt(message: &str) -> Option<String> {
        web_sys::window()?
            .prompt_with_message(message)
            .ok()
            .flatten()
    }
}

// No DOM to edit outside the browser.
#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
mod dom {
    pub fn read_html(_id: &str) -> Option<String> {
        None
    }

    pub fn exec(_id: &str, _name: &str, _value: Option<&str>) -> bool {
        false
    }

    pub fn prompt(_message: &str) -> Option<String> {
        None
    }
}
