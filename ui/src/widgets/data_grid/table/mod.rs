//! Table components for the data grid.
//!
//! Gestures are collected while the table draws and applied once it is done,
//! so rendering only ever reads the grid and table state.

mod cells;
mod columns;
mod header;
mod row;

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;
use usergrid_business::{TableState, TableView, UserGrid};

use cells::CellAction;
use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::{apply_header_actions, render_table_header};
use row::render_user_row;

/// Draws the header and current page rows of `view`.
pub fn render_table(ui: &mut Ui, grid: &mut UserGrid, table: &mut TableState, view: &TableView) {
    let mut header_actions = Vec::new();
    let mut cell_actions = Vec::new();

    // An editor whose cell is not on screen can never lose focus, so it is
    // committed here instead.
    if !editor_is_visible(grid, view) {
        cell_actions.push(CellAction::Commit);
    }

    let mut builder = TableBuilder::new(ui)
        .id_salt("user_grid_table")
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns(table, &view.columns) {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            render_table_header(&mut header, table, &view.columns, &mut header_actions);
        })
        .body(|mut body| {
            for record in &view.rows {
                body.row(ROW_HEIGHT, |mut row| {
                    render_user_row(&mut row, grid, record, &view.columns, &mut cell_actions);
                });
            }
        });

    apply_header_actions(table, header_actions);
    apply_cell_actions(grid, cell_actions);
}

/// `true` when nothing is being edited or the edited cell is part of `view`.
fn editor_is_visible(grid: &UserGrid, view: &TableView) -> bool {
    grid.editor().cursor().is_none_or(|cursor| {
        view.columns.contains(&cursor.field)
            && view.rows.iter().any(|record| record.id == cursor.record_id)
    })
}

/// Commits before opening, so clicking another cell saves the open one first.
fn apply_cell_actions(grid: &mut UserGrid, mut actions: Vec<CellAction>) {
    actions.sort_by_key(|action| !matches!(action, CellAction::Commit));
    for action in actions {
        match action {
            CellAction::Commit => {
                grid.commit_edit();
            }
            CellAction::BeginEdit(id, field) => {
                grid.begin_edit(&id, field);
            }
        }
    }
}
