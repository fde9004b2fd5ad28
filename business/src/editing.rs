//! Single-cursor inline editing.
//!
//! The editor is either viewing (no cursor) or editing exactly one
//! `(record, field)` cell with a draft value. Committing is the grid's job;
//! the editor only tracks which cell is open and what has been typed.

use crate::{RecordId, UserField};

/// Identifies the cell being edited.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EditCursor {
    pub record_id: RecordId,
    pub field: UserField,
}

impl EditCursor {
    pub fn new(record_id: RecordId, field: UserField) -> Self {
        Self { record_id, field }
    }

    pub fn points_at(&self, record_id: &RecordId, field: UserField) -> bool {
        self.field == field && self.record_id == *record_id
    }
}

/// The open cell and the text typed into it so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveEdit {
    cursor: EditCursor,
    draft: String,
    focus_pending: bool,
}

impl ActiveEdit {
    pub fn cursor(&self) -> &EditCursor {
        &self.cursor
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut String {
        &mut self.draft
    }

    pub fn into_parts(self) -> (EditCursor, String) {
        (self.cursor, self.draft)
    }

    /// `true` exactly once per edit: the input should grab keyboard focus on
    /// the first frame it is shown.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_pending)
    }
}

#[derive(Debug, Default)]
pub struct CellEditor {
    active: Option<ActiveEdit>,
}

impl CellEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `cursor` with `initial` as the draft.
    ///
    /// An edit already open is abandoned without committing and returned.
    pub fn begin(&mut self, cursor: EditCursor, initial: String) -> Option<ActiveEdit> {
        let abandoned = self.active.replace(ActiveEdit {
            cursor,
            draft: initial,
            focus_pending: true,
        });
        if let Some(previous) = &abandoned {
            log::debug!(
                "Abandoning edit of {} on record {}",
                previous.cursor.field,
                previous.cursor.record_id
            );
        }
        abandoned
    }

    pub fn is_editing(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_editing_cell(&self, record_id: &RecordId, field: UserField) -> bool {
        self.active
            .as_ref()
            .is_some_and(|edit| edit.cursor.points_at(record_id, field))
    }

    pub fn cursor(&self) -> Option<&EditCursor> {
        self.active.as_ref().map(ActiveEdit::cursor)
    }

    pub fn active(&self) -> Option<&ActiveEdit> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut ActiveEdit> {
        self.active.as_mut()
    }

    /// Closes the open cell, returning it for commit.
    pub fn finish(&mut self) -> Option<ActiveEdit> {
        self.active.take()
    }
}
