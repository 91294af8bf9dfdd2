// ============================================================
// Layer 2 — Annotation Session (state machine)
// ============================================================
// Holds the review progress for one user over one dataset.
//
//            load(ds)                   judge(v) × len(ds)
//   Empty ──────────────► Active ─────────────────────────► Complete
//     ▲                     ▲  │ go_back()                    │
//     │                     │  ▼                              │
//     │                     └──┴────────── go_back() ◄────────┘
//     │
//     └──────────────── clear() from any state
//
// Invariant, checked after every transition in debug builds:
//
//   annotations.len() == notes.len() == cursor <= dataset.len()
//
// The session does no I/O. The front end calls one method per
// user action and renders whatever the queries return.

use crate::data::dataset::Dataset;
use crate::domain::{error::SessionError, judgment::Judgment, row::RowView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No dataset loaded
    Empty,
    /// At least one row still needs a judgment
    Active,
    /// Every row has been judged
    Complete,
}

#[derive(Debug, Default)]
pub struct AnnotationSession {
    dataset:      Option<Dataset>,
    cursor:       usize,
    annotations:  Vec<Judgment>,
    notes:        Vec<String>,
    pending_note: String,
}

impl AnnotationSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Transitions ──────────────────────────────────────────────────────────

    /// Install a dataset and start over from its first row.
    /// A dataset with no rows is immediately Complete.
    pub fn load(&mut self, dataset: Dataset) {
        tracing::debug!("Session loaded with {} rows", dataset.len());
        self.dataset = Some(dataset);
        self.reset_progress();
        self.check_invariant();
    }

    /// Record a judgment for the current row, together with the
    /// pending note, and advance to the next row.
    pub fn judge(&mut self, value: Judgment) -> Result<(), SessionError> {
        match self.state() {
            SessionState::Empty    => return Err(SessionError::NoDataset),
            SessionState::Complete => return Err(SessionError::Complete),
            SessionState::Active   => {}
        }

        self.annotations.push(value);
        self.notes.push(std::mem::take(&mut self.pending_note));
        self.cursor += 1;

        tracing::debug!("Judged row {} as {}", self.cursor - 1, value);
        self.check_invariant();
        Ok(())
    }

    /// Replace the note that will be attached to the next judgment.
    pub fn set_note(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        if self.dataset.is_none() {
            return Err(SessionError::NoDataset);
        }
        self.pending_note = text.into();
        Ok(())
    }

    /// Undo the last judgment. Returns false (and changes nothing)
    /// when there is nothing to undo.
    ///
    /// The pending note is cleared rather than restored from the
    /// removed note; re-enter it to replay the same judgment.
    pub fn go_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        self.cursor -= 1;
        self.annotations.pop();
        self.notes.pop();
        self.pending_note.clear();

        tracing::debug!("Went back to row {}", self.cursor);
        self.check_invariant();
        true
    }

    /// Drop the dataset and all progress (the file was removed).
    pub fn clear(&mut self) {
        tracing::debug!("Session cleared");
        self.dataset = None;
        self.reset_progress();
    }

    // ─── Queries ──────────────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        match &self.dataset {
            None                                 => SessionState::Empty,
            Some(ds) if self.cursor >= ds.len()  => SessionState::Complete,
            Some(_)                              => SessionState::Active,
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn annotations(&self) -> &[Judgment] {
        &self.annotations
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn pending_note(&self) -> &str {
        &self.pending_note
    }

    /// The row awaiting a judgment, if any
    pub fn current_row(&self) -> Option<RowView> {
        self.dataset.as_ref()?.display_row(self.cursor)
    }

    /// (judged, total); None when no dataset is loaded
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.dataset.as_ref().map(|ds| (self.cursor, ds.len()))
    }

    pub fn can_judge(&self) -> bool {
        self.state() == SessionState::Active
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Export is offered once at least one judgment exists
    pub fn can_export(&self) -> bool {
        !self.annotations.is_empty()
    }

    fn reset_progress(&mut self) {
        self.cursor = 0;
        self.annotations.clear();
        self.notes.clear();
        self.pending_note.clear();
    }

    fn check_invariant(&self) {
        debug_assert_eq!(self.annotations.len(), self.cursor);
        debug_assert_eq!(self.notes.len(), self.cursor);
        debug_assert!(self.cursor <= self.dataset.as_ref().map_or(0, Dataset::len));
    }
}
