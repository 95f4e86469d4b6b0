//! Outbound side effects of the composer.
//!
//! The page binds these to the router, the toast system and the shared error
//! presenter; tests bind them to recorders.

use crate::error::ComposerError;

/// Client-side routing.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// User feedback for things that went well.
pub trait Notifier {
    fn notify_success(&self, message: &str);
}

/// User feedback for failed submissions.
pub trait ErrorPresenter {
    fn present_error(&self, error: &ComposerError);
}

/// Everything a finished submission may need to do.
pub trait ComposerEffects: Navigator + Notifier + ErrorPresenter {}

impl<T: Navigator + Notifier + ErrorPresenter> ComposerEffects for T {}
