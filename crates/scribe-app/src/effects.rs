//! Binds the composer's outbound effects to the router and the toast system.

use std::rc::Rc;

use dioxus::prelude::{use_hook, use_navigator};
use dioxus_primitives::toast::{ToastOptions, use_toast};
use scribe_composer::{ComposerError, ErrorPresenter, Navigator, Notifier};

use crate::Route;

type NavigateFn = Rc<dyn Fn(&str)>;
type NotifyFn = Rc<dyn Fn(&str)>;
type PresentFn = Rc<dyn Fn(&ComposerError)>;

/// Effects for pages that submit through the composer.
#[derive(Clone)]
pub struct PageEffects {
    navigate: NavigateFn,
    notify: NotifyFn,
    present: PresentFn,
}

impl PageEffects {
    pub fn new(navigate: NavigateFn, notify: NotifyFn, present: PresentFn) -> Self {
        Self {
            navigate,
            notify,
            present,
        }
    }
}

/// Hook: effects wired to this page's navigator and toasts.
pub fn use_page_effects() -> PageEffects {
    let navigator = use_navigator();
    let toasts = use_toast();
    use_hook(move || {
        let success_toasts = toasts.clone();
        let error_toasts = toasts.clone();
        PageEffects::new(
            Rc::new(move |path: &str| {
                // App paths go through the typed router; anything else is external.
                match path.parse::<Route>() {
                    Ok(route) => {
                        navigator.push(route);
                    }
                    Err(_) => {
                        navigator.push(path.to_string());
                    }
                }
            }),
            Rc::new(move |message: &str| {
                success_toasts.success(message.to_string(), ToastOptions::new());
            }),
            Rc::new(move |error: &ComposerError| {
                tracing::warn!("showing error to user: {error}");
                error_toasts.error(
                    "Couldn't create post".to_string(),
                    ToastOptions::new().description(error.user_message()),
                );
            }),
        )
    })
}

impl Navigator for PageEffects {
    fn navigate(&self, path: &str) {
        (self.navigate)(path)
    }
}

impl Notifier for PageEffects {
    fn notify_success(&self, message: &str) {
        (self.notify)(message)
    }
}

impl ErrorPresenter for PageEffects {
    fn present_error(&self, error: &ComposerError) {
        (self.present)(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_composer::SubmitOutcome;
    use std::cell::RefCell;

    #[test]
    fn test_created_outcome_notifies_then_navigates() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b, c) = (log.clone(), log.clone(), log.clone());
        let effects = PageEffects::new(
            Rc::new(move |p: &str| a.borrow_mut().push(format!("nav {p}"))),
            Rc::new(move |m: &str| b.borrow_mut().push(format!("ok {m}"))),
            Rc::new(move |e: &ComposerError| c.borrow_mut().push(format!("err {e}"))),
        );

        SubmitOutcome::Created {
            slug: "hello".into(),
            path: "/post/hello".into(),
        }
        .apply(&effects);
        SubmitOutcome::Failed(ComposerError::NotAuthenticated).apply(&effects);

        insta::assert_debug_snapshot!(log.borrow(), @r#"
        [
            "ok Post created successfully!",
            "nav /post/hello",
            "err no signed-in user to author the post",
        ]
        "#);
    }
}
