//! The post composer: form state, inline errors, image preview and the
//! Idle/Submitting machine, with no UI framework attached.
//!
//! Submission is split in two so a reactive UI never holds the composer borrowed
//! across the network await:
//!
//! 1. [`PostComposer::begin_submit`] validates, builds the [`NewPost`] and moves
//!    to `Submitting`.
//! 2. [`PostComposer::finish_submit`] takes the API result, moves back to `Idle`
//!    and returns a [`SubmitOutcome`] whose [`SubmitOutcome::apply`] runs the
//!    effects (toast and navigation, or the error presenter).
//!
//! [`PostComposer::submit`] chains both around a [`PostApi`] call for callers
//! that own the composer outright.

use humansize::{BINARY, format_size};
use scribe_common::{
    ApiError, CreatedPost, CurrentUser, ImageFile, NewPost, PostApi, SmolStr, post_path,
};

use crate::effects::ComposerEffects;
use crate::error::{ComposerError, SubmitBlocked};
use crate::form::{Field, FieldChange, FormState};
use crate::phase::SubmitPhase;
use crate::preview::{PreviewImage, encode_data_url};
use crate::validation::{self, IMAGE_NOT_AN_IMAGE, ValidationErrors};

pub const SUCCESS_MESSAGE: &str = "Post created successfully!";

/// Constraints on the featured image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageLimits {
    pub max_bytes: usize,
}

impl Default for ImageLimits {
    fn default() -> Self {
        Self {
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// A preview waiting to be computed off the event handler.
///
/// Carries the generation it was issued for; only the newest one is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRequest {
    pub generation: u64,
    pub file: ImageFile,
}

impl PreviewRequest {
    pub fn encode(&self) -> PreviewImage {
        encode_data_url(&self.file)
    }
}

/// Issued when a file is chosen, before its bytes are read.
///
/// Only the newest ticket's read is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket(u64);

/// What happened to a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Post created; notify, then go to its page
    Created { slug: SmolStr, path: String },
    /// The API call failed; form values are untouched for a retry
    Failed(ComposerError),
    /// Nothing was sent
    Blocked(SubmitBlocked),
    /// The result arrived after the page went away and was dropped
    Discarded,
}

impl SubmitOutcome {
    /// Run the user-visible effects of this outcome, each at most once.
    pub fn apply(&self, effects: &impl ComposerEffects) {
        match self {
            SubmitOutcome::Created { path, .. } => {
                effects.notify_success(SUCCESS_MESSAGE);
                effects.navigate(path);
            }
            SubmitOutcome::Failed(err) => effects.present_error(err),
            SubmitOutcome::Blocked(SubmitBlocked::NotAuthenticated) => {
                effects.present_error(&ComposerError::NotAuthenticated)
            }
            SubmitOutcome::Blocked(_) | SubmitOutcome::Discarded => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostComposer {
    form: FormState,
    errors: ValidationErrors,
    preview: Option<PreviewImage>,
    phase: SubmitPhase,
    limits: ImageLimits,
    /// Bumped on every selection or clear; stale preview results are ignored
    generation: u64,
    pending_selection: Option<u64>,
    pending_preview: Option<u64>,
    mounted: bool,
}

impl Default for PostComposer {
    fn default() -> Self {
        Self::new(ImageLimits::default())
    }
}

impl PostComposer {
    pub fn new(limits: ImageLimits) -> Self {
        Self {
            form: FormState::default(),
            errors: ValidationErrors::new(),
            preview: None,
            phase: SubmitPhase::Idle,
            limits,
            generation: 0,
            pending_selection: None,
            pending_preview: None,
            mounted: true,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn preview(&self) -> Option<&PreviewImage> {
        self.preview.as_ref()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn controls_disabled(&self) -> bool {
        self.phase.controls_disabled()
    }

    /// Title box or publish checkbox changed.
    pub fn on_field_change(&mut self, change: FieldChange) {
        let field = change.field();
        self.form = std::mem::take(&mut self.form).with_change(change);
        if self.errors.clear(field) {
            tracing::trace!(%field, "cleared field error");
        }
    }

    /// Rich-text editor reported new HTML.
    pub fn on_content_change(&mut self, html: impl Into<String>) {
        self.form = std::mem::take(&mut self.form).with_content(html);
        self.errors.clear(Field::Content);
    }

    /// A file was picked (or the picker was dismissed with `None`).
    ///
    /// Non-images and oversized files are refused with an inline error and the
    /// previous image stays. Otherwise the file is stored and a preview request is
    /// returned for the caller to encode and hand back via [`Self::apply_preview`].
    ///
    /// For files that still have to be read, use [`Self::begin_selection`] and
    /// [`Self::on_file_read`] instead so a slow read cannot land after a newer pick.
    pub fn on_file_selected(&mut self, file: Option<ImageFile>) -> Option<PreviewRequest> {
        let file = file?;
        let ticket = self.begin_selection(file.len() as u64)?;
        self.on_file_read(ticket, file)
    }

    /// The user chose a file of `size` bytes; its contents are not read yet.
    ///
    /// Supersedes every earlier selection still being read. Returns `None` and
    /// records the size error when the file is over the limit, so it is never read.
    pub fn begin_selection(&mut self, size: u64) -> Option<SelectionTicket> {
        self.generation += 1;
        self.pending_selection = None;

        if size > self.limits.max_bytes as u64 {
            tracing::debug!(size, max = self.limits.max_bytes, "rejected oversized image");
            self.reject_oversized();
            return None;
        }

        self.pending_selection = Some(self.generation);
        Some(SelectionTicket(self.generation))
    }

    /// The bytes for a selection arrived.
    ///
    /// Dropped when a newer selection or a clear happened in between, or the page
    /// is gone.
    pub fn on_file_read(
        &mut self,
        ticket: SelectionTicket,
        file: ImageFile,
    ) -> Option<PreviewRequest> {
        if !self.mounted || self.pending_selection != Some(ticket.0) {
            tracing::debug!(name = %file.name, "dropping superseded file read");
            return None;
        }
        self.pending_selection = None;

        if !file.is_image() {
            tracing::debug!(name = %file.name, mime = %file.mime_type, "rejected non-image file");
            self.errors.insert(Field::FeaturedImage, IMAGE_NOT_AN_IMAGE);
            return None;
        }
        // The reported size can lie; check what was actually read.
        if file.len() > self.limits.max_bytes {
            tracing::debug!(name = %file.name, len = file.len(), "rejected oversized image");
            self.reject_oversized();
            return None;
        }

        self.pending_preview = Some(ticket.0);
        self.form = std::mem::take(&mut self.form).with_featured_image(Some(file.clone()));
        self.errors.clear(Field::FeaturedImage);

        Some(PreviewRequest {
            generation: ticket.0,
            file,
        })
    }

    fn reject_oversized(&mut self) {
        self.errors.insert(
            Field::FeaturedImage,
            format!(
                "Featured image must be smaller than {}",
                format_size(self.limits.max_bytes, BINARY)
            ),
        );
    }

    /// Store a computed preview.
    ///
    /// Returns false (and changes nothing) when the request was superseded,
    /// already applied, or the page is gone.
    pub fn apply_preview(&mut self, generation: u64, preview: PreviewImage) -> bool {
        if !self.mounted || self.pending_preview != Some(generation) {
            tracing::debug!(generation, "dropping stale image preview");
            return false;
        }
        self.pending_preview = None;
        self.preview = Some(preview);
        true
    }

    /// Remove button next to the preview.
    pub fn on_clear_image(&mut self) {
        self.generation += 1;
        self.pending_selection = None;
        self.pending_preview = None;
        self.form = std::mem::take(&mut self.form).with_featured_image(None);
        self.preview = None;
    }

    /// Re-check the required fields and replace the error map.
    pub fn validate(&mut self) -> &ValidationErrors {
        let mut errors = validation::validate(&self.form);
        // Image errors come from selection, not from the required-field check.
        if let Some(msg) = self.errors.get(Field::FeaturedImage) {
            errors.insert(Field::FeaturedImage, msg);
        }
        self.errors = errors;
        &self.errors
    }

    /// Start a submission.
    ///
    /// Refuses while a request is in flight, when required fields are blank, or
    /// when nobody is signed in. On success the composer is `Submitting` and the
    /// returned post must be sent and its result passed to [`Self::finish_submit`].
    pub fn begin_submit(&mut self, user: Option<&CurrentUser>) -> Result<NewPost, SubmitBlocked> {
        if self.phase.is_submitting() {
            tracing::debug!("submit ignored, request already in flight");
            return Err(SubmitBlocked::InFlight);
        }

        validation_gate(self.validate())?;

        let Some(user) = user else {
            tracing::warn!("submit without a signed-in user");
            return Err(SubmitBlocked::NotAuthenticated);
        };

        let post = NewPost {
            title: self.form.title.clone(),
            content: self.form.content.clone(),
            published: self.form.published,
            author_id: user.id.clone(),
            featured_image: self.form.featured_image.clone(),
        };
        self.phase.begin();
        tracing::debug!(author = %user.id, "composer submitting");
        Ok(post)
    }

    /// Record the API result and go back to `Idle`.
    pub fn finish_submit(&mut self, result: Result<CreatedPost, ApiError>) -> SubmitOutcome {
        self.phase.finish();

        if !self.mounted {
            tracing::debug!("create post finished after the page unmounted, ignoring");
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(created) => {
                tracing::info!(slug = %created.slug, "post created");
                SubmitOutcome::Created {
                    path: post_path(&created.slug),
                    slug: created.slug,
                }
            }
            Err(err) => {
                tracing::error!("create post failed: {err}");
                SubmitOutcome::Failed(ComposerError::Api(err))
            }
        }
    }

    /// Whole submit flow against an owned composer.
    pub async fn submit<A, E>(
        &mut self,
        user: Option<&CurrentUser>,
        api: &A,
        effects: &E,
    ) -> SubmitOutcome
    where
        A: PostApi,
        E: ComposerEffects,
    {
        let outcome = match self.begin_submit(user) {
            Ok(post) => {
                let result = api.create_post(post).await;
                self.finish_submit(result)
            }
            Err(blocked) => SubmitOutcome::Blocked(blocked),
        };
        outcome.apply(effects);
        outcome
    }

    /// The page is going away; late callbacks become no-ops.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.pending_selection = None;
        self.pending_preview = None;
    }
}

fn validation_gate(errors: &ValidationErrors) -> Result<(), SubmitBlocked> {
    if errors.contains(Field::Title) || errors.contains(Field::Content) {
        tracing::debug!(count = errors.len(), "submit blocked by validation");
        Err(SubmitBlocked::Invalid(errors.clone()))
    } else {
        Ok(())
    }
}
