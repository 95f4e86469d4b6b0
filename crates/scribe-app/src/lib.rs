//! Scribe app library: the post composer page and the shell around it.

use dioxus::prelude::*;
use std::sync::LazyLock;

pub mod auth;
pub mod components;
pub mod config;
pub mod effects;
pub mod env;
pub mod fetch;
pub mod views;

use auth::{UserStore, restore_session};
use config::Config;
use views::{CreatePost, Home, Navbar, NotFound, PostPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
        #[route("/posts/new")]
        CreatePost {},
        #[route("/post/:slug")]
        PostPage { slug: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_env);

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| fetch::Fetcher::new(CONFIG.api.clone()));
    let auth_state = use_signal(|| {
        let (state, result) = restore_session(&UserStore::new(), CONFIG.dev_user.as_ref());
        tracing::debug!(?result, "auth restored");
        state
    });
    use_context_provider(|| auth_state);

    rsx! {
        document::Title { "{CONFIG.app_name}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        dioxus_primitives::toast::ToastProvider {
            Router::<Route> {}
        }
    }
}
