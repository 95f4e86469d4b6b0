//! scribe-composer: post composer logic without framework dependencies.
//!
//! This crate provides:
//! - `FormState` - copy-on-write draft of the post
//! - `ValidationErrors` and the required-field check
//! - `PostComposer` - form, inline errors, image preview, Idle/Submitting machine
//! - `Navigator` / `Notifier` / `ErrorPresenter` - what a finished submit does
//! - `FormatAction` - toolbar actions for the rich-text widget

pub mod composer;
pub mod effects;
pub mod error;
pub mod form;
pub mod format;
pub mod phase;
pub mod preview;
pub mod validation;

pub use composer::{
    ImageLimits, PostComposer, PreviewRequest, SUCCESS_MESSAGE, SelectionTicket,
    SubmitOutcome,
};
pub use effects::{ComposerEffects, ErrorPresenter, Navigator, Notifier};
pub use error::{ComposerError, SubmitBlocked};
pub use form::{Field, FieldChange, FormState};
pub use format::{EditorCommand, FormatAction, default_toolbar, sanitize_url};
pub use phase::SubmitPhase;
pub use preview::{PreviewImage, encode_data_url};
pub use validation::{ValidationErrors, html_is_blank, validate};

pub use scribe_common::{ApiError, CreatedPost, CurrentUser, ImageFile, NewPost, PostApi};
