//! Sortable, resizable header row.

use egui::{Color32, CursorIcon, Label, Rect, RichText, Sense, Stroke, Ui, pos2};
use egui_extras::TableRow;
use usergrid_business::{TableState, UserField};

use super::columns::RESIZE_HANDLE_WIDTH;

/// Gesture collected while drawing the header, applied after the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeaderAction {
    Sort { column: UserField, multi: bool },
    Resize { column: UserField, delta: f32 },
    FinishResize,
    ResetWidth(UserField),
}

/// Header text with its sort indicator. In a multi-column sort the
/// 1-based priority follows the arrow.
pub fn header_label(table: &TableState, column: UserField) -> String {
    let sorting = table.sorting();
    match (sorting.direction_of(column), sorting.priority_of(column)) {
        (Some(direction), Some(priority)) if sorting.columns().len() > 1 => {
            format!("{} {}{}", column.header(), direction.arrow(), priority + 1)
        }
        (Some(direction), _) => format!("{} {}", column.header(), direction.arrow()),
        (None, _) => column.header().to_owned(),
    }
}

#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    table: &TableState,
    columns: &[UserField],
    actions: &mut Vec<HeaderAction>,
) {
    for &column in columns {
        header.col(|ui| {
            render_header_cell(ui, table, column, actions);
        });
    }
}

fn render_header_cell(
    ui: &mut Ui,
    table: &TableState,
    column: UserField,
    actions: &mut Vec<HeaderAction>,
) {
    let cell = ui.max_rect();

    let response = ui
        .add(Label::new(RichText::new(header_label(table, column)).strong()).sense(Sense::click()))
        .on_hover_cursor(CursorIcon::PointingHand);
    if response.clicked() {
        let multi = ui.input(|i| i.modifiers.shift);
        actions.push(HeaderAction::Sort { column, multi });
    }

    let handle = Rect::from_min_max(
        pos2(cell.right() - RESIZE_HANDLE_WIDTH, cell.top()),
        cell.right_bottom(),
    );
    let handle_response = ui
        .interact(handle, ui.id().with(("resize", column)), Sense::click_and_drag())
        .on_hover_cursor(CursorIcon::ResizeHorizontal);

    if handle_response.double_clicked() {
        actions.push(HeaderAction::ResetWidth(column));
    } else if handle_response.dragged() {
        let delta = handle_response.drag_delta().x;
        if delta.abs() > f32::EPSILON {
            actions.push(HeaderAction::Resize { column, delta });
        }
    }
    if handle_response.drag_stopped() {
        actions.push(HeaderAction::FinishResize);
    }

    let color = if table.is_resizing(column) || handle_response.hovered() {
        ui.visuals().selection.bg_fill
    } else {
        Color32::from_rgb(200, 200, 200)
    };
    ui.painter().vline(
        cell.right() - 1.0,
        cell.top()..=cell.bottom(),
        Stroke::new(2.0, color),
    );
}

/// Applies header gestures to the table state.
pub fn apply_header_actions(table: &mut TableState, actions: Vec<HeaderAction>) {
    for action in actions {
        match action {
            HeaderAction::Sort { column, multi } => table.toggle_sorting(column, multi),
            HeaderAction::Resize { column, delta } => table.resize_column(column, delta),
            HeaderAction::FinishResize => table.finish_resize(),
            HeaderAction::ResetWidth(column) => table.reset_column_width(column),
        }
    }
}
