//! The grid component's own state: record sets, load status, the editing
//! cursor and the validation banner.
//!
//! Everything about how rows are filtered, ordered, paged or sized lives in
//! [`crate::TableState`]; this type never looks at view state.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::{
    CellEditor, EditCursor, LoadResult, RecordId, UserField, UserRecord, ValidationError,
    editing::ActiveEdit,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// What happened when the open cell lost focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Nothing was being edited.
    Idle,
    /// The working record was replaced with the new value.
    Applied(EditCursor),
    /// The value failed validation; the working set is untouched.
    Rejected(ValidationError),
}

#[derive(Debug, Default)]
pub struct UserGrid {
    load_state: LoadState,
    // Fetched once and never touched again.
    original: Vec<Arc<UserRecord>>,
    working: Vec<Arc<UserRecord>>,
    editor: CellEditor,
    validation_error: Option<ValidationError>,
}

impl UserGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid already holding `records`, as if a load had just succeeded.
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        let mut grid = Self::new();
        grid.finish_load(Ok(records));
        grid
    }

    /// Applies the outcome of the initial fetch.
    ///
    /// The load is one-shot: once the grid left `Loading`, further results are
    /// ignored and `false` is returned.
    pub fn finish_load(&mut self, result: LoadResult) -> bool {
        if self.load_state != LoadState::Loading {
            warn!("UserGrid: ignoring load result, grid is already {:?}", self.load_state);
            return false;
        }

        match result {
            Ok(records) => {
                info!("UserGrid: ready with {} records", records.len());
                self.original = records.into_iter().map(Arc::new).collect();
                self.working = self.original.clone();
                self.load_state = LoadState::Ready;
            }
            Err(err) => {
                self.original.clear();
                self.working.clear();
                self.load_state = LoadState::Failed(err.to_string());
            }
        }
        true
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_ready(&self) -> bool {
        self.load_state == LoadState::Ready
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Failed(message) => Some(message),
            LoadState::Loading | LoadState::Ready => None,
        }
    }

    pub fn original(&self) -> &[Arc<UserRecord>] {
        &self.original
    }

    /// The rendered and edited record set.
    pub fn working(&self) -> &[Arc<UserRecord>] {
        &self.working
    }

    pub fn record(&self, id: &RecordId) -> Option<&Arc<UserRecord>> {
        self.working.iter().find(|record| record.id == *id)
    }

    pub fn validation_error(&self) -> Option<ValidationError> {
        self.validation_error
    }

    pub fn editor(&self) -> &CellEditor {
        &self.editor
    }

    /// The open cell, for binding its draft to an input widget.
    pub fn active_edit_mut(&mut self) -> Option<&mut ActiveEdit> {
        self.editor.active_mut()
    }

    pub fn is_editing(&self, id: &RecordId, field: UserField) -> bool {
        self.editor.is_editing_cell(id, field)
    }

    /// Opens `(id, field)` for editing with the current value as the draft.
    ///
    /// Refused for the display-only `id` column, for unknown records and while
    /// the grid is not ready. Any open edit is abandoned without committing.
    pub fn begin_edit(&mut self, id: &RecordId, field: UserField) -> bool {
        if !self.is_ready() || !field.is_editable() {
            return false;
        }
        let Some(record) = self.record(id) else {
            return false;
        };

        let initial = field.value(record).into_owned();
        self.editor.begin(EditCursor::new(id.clone(), field), initial);
        self.validation_error = None;
        true
    }

    /// Closes the open cell and commits its draft.
    pub fn commit_edit(&mut self) -> CommitOutcome {
        let Some(edit) = self.editor.finish() else {
            return CommitOutcome::Idle;
        };
        let (cursor, value) = edit.into_parts();
        self.commit(cursor, value)
    }

    /// Closes the open cell, committing `value` in place of the draft.
    pub fn commit_value(&mut self, value: impl Into<String>) -> CommitOutcome {
        let Some(edit) = self.editor.finish() else {
            return CommitOutcome::Idle;
        };
        let (cursor, _) = edit.into_parts();
        self.commit(cursor, value.into())
    }

    /// Closes the open cell without committing.
    pub fn cancel_edit(&mut self) {
        if let Some(edit) = self.editor.finish() {
            debug!("UserGrid: discarded edit of {}", edit.cursor().field);
        }
    }

    fn commit(&mut self, cursor: EditCursor, value: String) -> CommitOutcome {
        debug!(
            "UserGrid: saving record={} field={} value={value:?}",
            cursor.record_id, cursor.field
        );

        if let Err(err) = cursor.field.validate(&value) {
            self.validation_error = Some(err);
            return CommitOutcome::Rejected(err);
        }

        let Some(slot) = self
            .working
            .iter_mut()
            .find(|record| record.id == cursor.record_id)
        else {
            warn!("UserGrid: record {} vanished before commit", cursor.record_id);
            return CommitOutcome::Idle;
        };

        if let Some(updated) = cursor.field.with_value(slot, value) {
            *slot = Arc::new(updated);
        }
        self.validation_error = None;
        CommitOutcome::Applied(cursor)
    }
}
