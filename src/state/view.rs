//! Per-page view state and its transitions.
//!
//! DESIGN
//! ======
//! The list lifecycle and the create dialog are two independent enums, so
//! combinations such as "loading and failed" or "submitting with the dialog
//! closed" cannot be represented. Transitions are plain `&mut self` methods;
//! controllers call them through [`super::store::ViewStore::update`].

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::net::types::Assistant;

/// Label of the submit button while idle.
pub const SUBMIT_LABEL: &str = "Create";
/// Label of the submit button while a create request is in flight.
pub const SUBMITTING_LABEL: &str = "Creating...";
/// Message shown when a ready list has no rows.
pub const EMPTY_LIST_MESSAGE: &str = "No assistants found";

/// Lifecycle of the assistant list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListPhase {
    #[default]
    Loading,
    Ready,
    Failed {
        message: String,
    },
}

/// Lifecycle of the create dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DialogPhase {
    #[default]
    Closed,
    /// Open and idle; `error` holds the last failed attempt, if any.
    Open { error: Option<String> },
    /// Open with a create request in flight. Dismissal is refused.
    Submitting,
}

/// What the list area should display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListView<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Rows(&'a [Assistant]),
}

/// State observed by the presentation layer for one mounted page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Last successfully fetched list, in server order. Not authoritative
    /// unless `phase` is `Ready`.
    pub assistants: Vec<Assistant>,
    pub phase: ListPhase,
    pub dialog: DialogPhase,
    /// Raw, untrimmed form input.
    pub draft_name: String,
}

impl ViewState {
    // =========================================================================
    // READS
    // =========================================================================

    #[must_use]
    pub fn list_error(&self) -> Option<&str> {
        match &self.phase {
            ListPhase::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// The list, only while it is current.
    #[must_use]
    pub fn current_assistants(&self) -> Option<&[Assistant]> {
        matches!(self.phase, ListPhase::Ready).then_some(self.assistants.as_slice())
    }

    #[must_use]
    pub fn list_view(&self) -> ListView<'_> {
        match &self.phase {
            ListPhase::Loading => ListView::Loading,
            ListPhase::Failed { message } => ListView::Failed(message),
            ListPhase::Ready if self.assistants.is_empty() => ListView::Empty,
            ListPhase::Ready => ListView::Rows(&self.assistants),
        }
    }

    #[must_use]
    pub fn is_dialog_open(&self) -> bool {
        !matches!(self.dialog, DialogPhase::Closed)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.dialog, DialogPhase::Submitting)
    }

    #[must_use]
    pub fn create_error(&self) -> Option<&str> {
        match &self.dialog {
            DialogPhase::Open { error } => error.as_deref(),
            _ => None,
        }
    }

    /// Whether the submit control should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.draft_name.trim().is_empty()
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() { SUBMITTING_LABEL } else { SUBMIT_LABEL }
    }

    /// Preview of the prompt the server will derive from the draft name.
    #[must_use]
    pub fn system_prompt_preview(&self) -> String {
        let name = self.draft_name.trim();
        let name = if name.is_empty() { "[name]" } else { name };
        format!("You are a helpful voice assistant named {name}")
    }

    // =========================================================================
    // LIST TRANSITIONS
    // =========================================================================

    pub fn begin_refresh(&mut self) {
        self.phase = ListPhase::Loading;
    }

    pub fn apply_list(&mut self, assistants: Vec<Assistant>) {
        self.assistants = assistants;
        self.phase = ListPhase::Ready;
    }

    /// Mark the list failed. The previous rows stay in `assistants` but are
    /// no longer current.
    pub fn fail_list(&mut self, message: String) {
        self.phase = ListPhase::Failed { message };
    }

    // =========================================================================
    // DIALOG TRANSITIONS
    // =========================================================================

    pub fn open_dialog(&mut self) {
        if matches!(self.dialog, DialogPhase::Closed) {
            self.dialog = DialogPhase::Open { error: None };
        }
    }

    /// Close on user dismissal. Refused (returns `false`) while submitting.
    pub fn close_dialog(&mut self) -> bool {
        match self.dialog {
            DialogPhase::Submitting => false,
            _ => {
                self.dialog = DialogPhase::Closed;
                true
            }
        }
    }

    pub fn set_draft(&mut self, value: &str) {
        value.clone_into(&mut self.draft_name);
    }

    /// Start a submission of `draft`.
    ///
    /// Returns the trimmed name to send, or `None` (leaving state untouched)
    /// when the trimmed name is empty, the dialog is closed, or a submission
    /// is already in flight.
    pub fn begin_submit(&mut self, draft: &str) -> Option<String> {
        let name = draft.trim();
        if name.is_empty() || !matches!(self.dialog, DialogPhase::Open { .. }) {
            return None;
        }
        self.dialog = DialogPhase::Submitting;
        Some(name.to_owned())
    }

    pub fn finish_submit_ok(&mut self) {
        self.draft_name.clear();
        self.dialog = DialogPhase::Closed;
    }

    pub fn finish_submit_err(&mut self, message: String) {
        self.dialog = DialogPhase::Open { error: Some(message) };
    }
}
