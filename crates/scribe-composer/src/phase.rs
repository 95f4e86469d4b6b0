//! Idle/Submitting state of the composer.

/// Whether a create-post request is in flight.
///
/// Every interactive control on the page reads [`SubmitPhase::controls_disabled`]
/// instead of tracking its own loading flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

impl SubmitPhase {
    /// Move to `Submitting`. Returns false if a request is already in flight.
    pub fn begin(&mut self) -> bool {
        match self {
            SubmitPhase::Idle => {
                *self = SubmitPhase::Submitting;
                true
            }
            SubmitPhase::Submitting => false,
        }
    }

    /// Back to `Idle`, whatever the request's outcome.
    pub fn finish(&mut self) {
        *self = SubmitPhase::Idle;
    }

    pub fn is_submitting(self) -> bool {
        self == SubmitPhase::Submitting
    }

    pub fn controls_disabled(self) -> bool {
        self.is_submitting()
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "Create Post",
            SubmitPhase::Submitting => "Creating Post...",
        }
    }
}
