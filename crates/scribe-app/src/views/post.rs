use crate::Route;
use dioxus::prelude::*;

/// Landing page after a post is created.
///
/// Reading posts back is the blog's job; this only confirms where it lives.
/// Drafts land here too, so the wording does not claim the post is public.
#[component]
pub fn PostPage(slug: String) -> Element {
    rsx! {
        div { class: "post-page",
            h1 { "{slug}" }
            p { class: "post-meta", "{saved_notice(&slug)}" }
            Link { to: Route::CreatePost {}, class: "button button-secondary", "Write another" }
        }
    }
}

fn saved_notice(slug: &str) -> String {
    format!("Your post was saved at /post/{slug}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_does_not_claim_published() {
        let notice = saved_notice("draft-one");
        assert_eq!(notice, "Your post was saved at /post/draft-one.");
        assert!(!notice.contains("live"));
    }
}
