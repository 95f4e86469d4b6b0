use crate::auth::{AuthState, UserStore, sign_out};
use crate::components::{Button, ButtonVariant};
use crate::{CONFIG, Route};
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Rendered above every page; child routes go in the outlet.
#[component]
pub fn Navbar() -> Element {
    let route = use_route::<Route>();
    let mut auth_state = use_context::<Signal<AuthState>>();
    let user_name = auth_state.read().user().map(|u| u.display_name());

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        div {
            id: "navbar",
            nav { class: "breadcrumbs",
                Link {
                    to: Route::Home {},
                    class: "breadcrumb",
                    "{CONFIG.app_name}"
                }
                match route {
                    Route::CreatePost {} => rsx! {
                        span { class: "breadcrumb-separator", " > " }
                        span { class: "breadcrumb breadcrumb-current", "New post" }
                    },
                    Route::PostPage { slug } => rsx! {
                        span { class: "breadcrumb-separator", " > " }
                        span { class: "breadcrumb breadcrumb-current", "{slug}" }
                    },
                    _ => rsx! {}
                }
            }
            if let Some(name) = user_name {
                div { class: "auth-button",
                    Link { to: Route::CreatePost {}, class: "nav-action", "Write" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| sign_out(&UserStore::new(), &mut auth_state.write()),
                        span { class: "auth-handle", "{name}" }
                        span { class: "auth-sign-out", "Sign out" }
                    }
                }
            } else {
                div { class: "auth-button",
                    span { class: "auth-handle", "Not signed in" }
                }
            }
        }

        Outlet::<Route> {}
    }
}
