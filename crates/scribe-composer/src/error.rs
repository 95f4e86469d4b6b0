//! Why a submission failed or never started.

use miette::Diagnostic;
use scribe_common::ApiError;

use crate::validation::ValidationErrors;

/// Failure handed to the error presenter.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Diagnostic)]
pub enum ComposerError {
    /// The create-post call failed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Api(#[from] ApiError),

    /// Submit was pressed with nobody signed in
    #[error("no signed-in user to author the post")]
    #[diagnostic(code(scribe::composer::unauthenticated))]
    NotAuthenticated,
}

impl ComposerError {
    pub fn user_message(&self) -> String {
        match self {
            ComposerError::Api(err) => err.user_message(),
            ComposerError::NotAuthenticated => "Please sign in to create a post".to_string(),
        }
    }
}

/// Reasons `begin_submit` refuses to start a request.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SubmitBlocked {
    /// Required fields are missing; the errors are shown inline
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(ValidationErrors),
    /// A request is already in flight
    #[error("a submission is already in progress")]
    InFlight,
    #[error("no signed-in user")]
    NotAuthenticated,
}
