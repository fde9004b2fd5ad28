use egui::{TextEdit, Ui};
use usergrid_business::{TableState, UserField};

pub const SEARCH_HINT: &str = "Search...";

/// Toolbar gesture, applied once the table for this frame has been drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarAction {
    SetFilter(String),
    SetVisible(UserField, bool),
}

/// Search input and one visibility checkbox per column.
pub fn render_toolbar(ui: &mut Ui, table: &TableState) -> Vec<ToolbarAction> {
    let mut actions = Vec::new();

    let mut filter = table.global_filter().to_owned();
    let response = ui.add(
        TextEdit::singleline(&mut filter)
            .hint_text(SEARCH_HINT)
            .desired_width(240.0),
    );
    if response.changed() {
        actions.push(ToolbarAction::SetFilter(filter));
    }

    ui.add_space(4.0);

    ui.horizontal_wrapped(|ui| {
        ui.label("Toggle Columns:");
        for column in UserField::ALL {
            let mut visible = table.is_visible(column);
            if ui.checkbox(&mut visible, column.header()).changed() {
                actions.push(ToolbarAction::SetVisible(column, visible));
            }
        }
    });

    actions
}

pub fn apply_toolbar_actions(table: &mut TableState, actions: Vec<ToolbarAction>) {
    for action in actions {
        match action {
            ToolbarAction::SetFilter(filter) => table.set_global_filter(filter),
            ToolbarAction::SetVisible(column, visible) => table.set_visible(column, visible),
        }
    }
}
