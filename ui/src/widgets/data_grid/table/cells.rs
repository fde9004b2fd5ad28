//! The single cell renderer shared by every column.

use egui::{CursorIcon, Label, RichText, Sense, TextEdit, Ui};
use usergrid_business::{ActiveEdit, RecordId, UserField, UserRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellAction {
    BeginEdit(RecordId, UserField),
    /// The open editor lost focus.
    Commit,
}

/// Renders `field` of `record`.
///
/// With `active` set, the cell is the open editor and binds its draft.
/// Otherwise editable fields render as a clickable label and the id as
/// plain monospace text.
pub fn render_cell(
    ui: &mut Ui,
    record: &UserRecord,
    field: UserField,
    active: Option<&mut ActiveEdit>,
) -> Option<CellAction> {
    if let Some(edit) = active {
        return render_editor(ui, edit);
    }

    let value = field.value(record);
    if !field.is_editable() {
        ui.label(RichText::new(value).monospace());
        return None;
    }

    let response = ui
        .add(Label::new(value.into_owned()).truncate().sense(Sense::click()))
        .on_hover_cursor(CursorIcon::Text);
    response
        .clicked()
        .then(|| CellAction::BeginEdit(record.id.clone(), field))
}

fn render_editor(ui: &mut Ui, edit: &mut ActiveEdit) -> Option<CellAction> {
    let wants_focus = edit.take_focus_request();
    let response = ui.add(TextEdit::singleline(edit.draft_mut()).desired_width(f32::INFINITY));
    if wants_focus {
        response.request_focus();
    }
    response.lost_focus().then_some(CellAction::Commit)
}
