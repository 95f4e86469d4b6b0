//! The create-post page.
//!
//! All form logic lives in [`PostComposer`]; this page renders its state,
//! feeds it events and runs the API call it asks for.

use dioxus::prelude::*;
use scribe_composer::{
    ApiError, Field, FieldChange, ImageFile, PostComposer, SelectionTicket, SubmitOutcome,
};

use crate::auth::AuthState;
use crate::components::{Button, ButtonVariant, FieldError, ImagePicker, RichTextEditor};
use crate::effects::use_page_effects;
use crate::fetch::Fetcher;
use crate::{CONFIG, Route};

const COMPOSER_CSS: Asset = asset!("/assets/styling/composer.css");

const CONTENT_SURFACE_ID: &str = "post-content";

#[component]
pub fn CreatePost() -> Element {
    let auth_state = use_context::<Signal<AuthState>>();
    let fetcher = use_context::<Fetcher>();
    let effects = use_page_effects();
    let navigator = use_navigator();
    let mut composer = use_signal(|| PostComposer::new(CONFIG.images));

    // Late results find the composer unmounted (or gone) and are dropped.
    use_drop(move || {
        if let Ok(mut composer) = composer.try_write() {
            composer.unmount();
        }
    });

    let on_title = move |evt: FormEvent| {
        composer
            .write()
            .on_field_change(FieldChange::Title(evt.value()));
    };

    let on_published = move |evt: FormEvent| {
        composer
            .write()
            .on_field_change(FieldChange::Published(evt.checked()));
    };

    let on_content = move |html: String| composer.write().on_content_change(html);

    let on_image_chosen = move |size: u64| composer.write().begin_selection(size);

    let on_image = move |(ticket, file): (SelectionTicket, ImageFile)| {
        let request = composer.write().on_file_read(ticket, file);
        if let Some(request) = request {
            spawn(async move {
                let preview = request.encode();
                if let Ok(mut composer) = composer.try_write() {
                    if !composer.apply_preview(request.generation, preview) {
                        tracing::debug!(generation = request.generation, "stale preview dropped");
                    }
                }
            });
        }
    };

    let on_clear_image = move |_: ()| composer.write().on_clear_image();

    let on_submit = {
        let effects = effects.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let user = auth_state.read().user().cloned();
            let begun = composer.write().begin_submit(user.as_ref());
            let post = match begun {
                Ok(post) => post,
                Err(blocked) => {
                    tracing::debug!("submit blocked: {blocked}");
                    SubmitOutcome::Blocked(blocked).apply(&effects);
                    return;
                }
            };
            let api = fetcher.post_api(user.as_ref());
            let effects = effects.clone();
            spawn(async move {
                let result = match api {
                    Ok(api) => api.create_post(post).await,
                    Err(e) => {
                        tracing::error!("post api unavailable: {e}");
                        Err(ApiError::InvalidRequest(e.to_string()))
                    }
                };
                let outcome = match composer.try_write() {
                    Ok(mut composer) => composer.finish_submit(result),
                    Err(_) => SubmitOutcome::Discarded,
                };
                outcome.apply(&effects);
            });
        }
    };

    if !auth_state.read().is_authenticated() {
        return rsx! {
            document::Link { rel: "stylesheet", href: COMPOSER_CSS }
            div { class: "create-post-container",
                h1 { "Create New Post" }
                div { class: "sign-in-prompt",
                    p { "You need to sign in before you can create a post." }
                    Link { to: Route::Home {}, "Back home" }
                }
            }
        };
    }

    let state = composer.read();
    let disabled = state.controls_disabled();
    let submit_label = state.phase().submit_label();
    let title = state.form().title.clone();
    let published = state.form().published;
    let preview = state.preview().map(|p| p.as_str().to_string());
    let title_error = state.error(Field::Title).map(str::to_string);
    let content_error = state.error(Field::Content).map(str::to_string);
    let image_error = state.error(Field::FeaturedImage).map(str::to_string);
    let initial_content = state.form().content.clone();
    drop(state);

    rsx! {
        document::Link { rel: "stylesheet", href: COMPOSER_CSS }

        div { class: "create-post-container",
            h1 { "Create New Post" }

            form { class: "create-post-form", novalidate: true, onsubmit: on_submit,
                div { class: "form-group",
                    label { r#for: "post-title", "Title" }
                    input {
                        id: "post-title",
                        r#type: "text",
                        class: if title_error.is_some() { "input-error" },
                        placeholder: "Enter post title",
                        value: "{title}",
                        disabled,
                        oninput: on_title,
                    }
                    FieldError { message: title_error }
                }

                ImagePicker {
                    preview,
                    error: image_error,
                    disabled,
                    on_begin: on_image_chosen,
                    on_select: on_image,
                    on_clear: on_clear_image,
                }

                div { class: "form-group",
                    label { r#for: CONTENT_SURFACE_ID, "Content" }
                    RichTextEditor {
                        id: CONTENT_SURFACE_ID,
                        initial_html: initial_content,
                        placeholder: "Write your post content here...",
                        read_only: disabled,
                        on_change: on_content,
                    }
                    FieldError { message: content_error }
                }

                div { class: "form-group checkbox-group",
                    label {
                        input {
                            r#type: "checkbox",
                            checked: published,
                            disabled,
                            onchange: on_published,
                        }
                        "Publish immediately"
                    }
                }

                div { class: "form-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled,
                        onclick: move |_| {
                            navigator.push(Route::Home {});
                        },
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled,
                        "{submit_label}"
                    }
                }
            }
        }
    }
}
