use crate::Route;
use crate::auth::AuthState;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let auth_state = use_context::<Signal<AuthState>>();
    let signed_in = auth_state.read().is_authenticated();

    rsx! {
        div { class: "home",
            h1 { "Posts" }
            if signed_in {
                p { "Share something new with your readers." }
                Link { to: Route::CreatePost {}, class: "button button-primary", "Create a post" }
            } else {
                p { "Sign in to start writing." }
            }
        }
    }
}
