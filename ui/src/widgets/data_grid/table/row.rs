//! Row rendering for the user table.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use usergrid_business::{UserField, UserGrid, UserRecord};

use super::cells::{CellAction, render_cell};

#[inline]
pub fn render_user_row(
    row: &mut TableRow<'_, '_>,
    grid: &mut UserGrid,
    record: &UserRecord,
    columns: &[UserField],
    actions: &mut Vec<CellAction>,
) {
    for &field in columns {
        row.col(|ui| {
            let active = grid
                .active_edit_mut()
                .filter(|edit| edit.cursor().points_at(&record.id, field));
            if let Some(action) = render_cell(ui, record, field, active) {
                actions.push(action);
            }
            draw_cell_bottom_border(ui);
        });
    }
}

#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter()
        .hline(rect.left()..=rect.right(), rect.bottom(), Stroke::new(1.0, color));
}
