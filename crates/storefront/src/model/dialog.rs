//! Modal dialog descriptor.
//!
//! A [`DialogDescriptor`] is pure data: it fully describes what the
//! rendering surface should show for the single active dialog, including
//! the callbacks the surface invokes when the user selects a button. The
//! core never executes these callbacks itself. Replacing a descriptor
//! discards the old one *without* running them (abandonment, not
//! cancellation), and selection handling is the surface's job.

use std::fmt;
use std::sync::Arc;

/// Callback attached to a dialog button, invoked by the rendering surface.
pub type DialogCallback = Arc<dyn Fn() + Send + Sync>;

/// Visual category of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogVariant {
    Success,
    Info,
    Danger,
}

/// Fixed title used by [`DialogDescriptor::confirmation`].
pub const CONFIRMATION_TITLE: &str = "Confirm Action";
/// Fixed primary label used by [`DialogDescriptor::confirmation`].
pub const CONFIRM_LABEL: &str = "Confirm";
/// Fixed secondary label used by [`DialogDescriptor::confirmation`].
pub const CANCEL_LABEL: &str = "Cancel";

/// Everything the rendering surface needs to show the active dialog.
///
/// The secondary button (typically "Cancel") is always present; the
/// primary button is optional. `busy` marks an in-flight submission: the
/// surface disables the secondary button and renders the primary one in a
/// loading state.
#[derive(Clone)]
pub struct DialogDescriptor {
    pub variant: DialogVariant,
    pub title: String,
    pub message: String,
    pub primary_label: Option<String>,
    pub secondary_label: String,
    pub on_primary: Option<DialogCallback>,
    pub on_secondary: DialogCallback,
    pub busy: bool,
}

impl DialogDescriptor {
    /// Creates a descriptor with only the (always present) secondary button.
    pub fn new(
        variant: DialogVariant,
        title: impl Into<String>,
        message: impl Into<String>,
        secondary_label: impl Into<String>,
        on_secondary: DialogCallback,
    ) -> Self {
        Self {
            variant,
            title: title.into(),
            message: message.into(),
            primary_label: None,
            secondary_label: secondary_label.into(),
            on_primary: None,
            on_secondary,
            busy: false,
        }
    }

    /// Adds the optional primary button.
    pub fn with_primary(mut self, label: impl Into<String>, on_primary: DialogCallback) -> Self {
        self.primary_label = Some(label.into());
        self.on_primary = Some(on_primary);
        self
    }

    /// Marks the descriptor as an in-flight submission.
    pub fn with_busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    /// Builds the standard confirmation dialog: `Info` variant, fixed
    /// "Confirm Action" title and "Confirm"/"Cancel" labels, with the two
    /// callers' callbacks wired to the buttons.
    ///
    /// Neither callback hides the dialog implicitly; the callers' handlers
    /// are expected to call `hide()` themselves once they have acted.
    pub fn confirmation(
        message: impl Into<String>,
        on_confirm: DialogCallback,
        on_cancel: DialogCallback,
    ) -> Self {
        Self::new(
            DialogVariant::Info,
            CONFIRMATION_TITLE,
            message,
            CANCEL_LABEL,
            on_cancel,
        )
        .with_primary(CONFIRM_LABEL, on_confirm)
    }
}

impl fmt::Debug for DialogDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogDescriptor")
            .field("variant", &self.variant)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("primary_label", &self.primary_label)
            .field("secondary_label", &self.secondary_label)
            .field("on_primary", &self.on_primary.as_ref().map(|_| "<callback>"))
            .field("on_secondary", &"<callback>")
            .field("busy", &self.busy)
            .finish()
    }
}
