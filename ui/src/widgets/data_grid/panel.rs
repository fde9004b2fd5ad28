//! Top-level data grid panel.
//!
//! Shows "Loading..." until the fetch resolves, then either the error view or
//! the toolbar, validation banner, table and pagination controls.

use egui::{Color32, CornerRadius, Frame, Margin, RichText, Ui};
use usergrid_business::{LoadState, UserGrid};

use super::pagination::render_pagination;
use super::state::DataGridState;
use super::table::render_table;
use super::toolbar::{apply_toolbar_actions, render_toolbar};
use crate::state::State;

const BANNER_BG_COLOR: Color32 = Color32::from_rgb(253, 236, 234);

/// Starts the fetch on first use, picks up its result and draws the grid.
pub fn data_grid_panel(state: &mut State, ui: &mut Ui) {
    let url = state.config.users_url();
    state
        .data_grid
        .ensure_loading(state.fetcher.as_ref(), &url, ui.ctx());
    state.data_grid.poll();

    show_data_grid(&mut state.data_grid, ui);
}

/// Draws the grid for whatever load state it is in.
pub fn show_data_grid(data_grid: &mut DataGridState, ui: &mut Ui) {
    let DataGridState { grid, table, .. } = data_grid;

    match grid.load_state().clone() {
        LoadState::Loading => {
            grid.cancel_edit();
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading...");
            });
        }
        LoadState::Failed(message) => {
            grid.cancel_edit();
            ui.colored_label(Color32::RED, format!("Error: {message}"));
        }
        LoadState::Ready => {
            ui.vertical(|ui| {
                // Applied after the table so an open editor still sees its focus loss.
                let toolbar_actions = render_toolbar(ui, table);
                ui.add_space(8.0);
                render_validation_banner(ui, grid);

                let view = table.view(grid.working());
                render_table(ui, grid, table, &view);

                ui.add_space(8.0);
                render_pagination(ui, table, &view);

                apply_toolbar_actions(table, toolbar_actions);
            });
        }
    }
}

fn render_validation_banner(ui: &mut Ui, grid: &UserGrid) {
    let Some(error) = grid.validation_error() else {
        return;
    };
    Frame::NONE
        .fill(BANNER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 6))
        .corner_radius(CornerRadius::same(4))
        .show(ui, |ui| {
            ui.label(RichText::new(error.to_string()).color(Color32::RED));
        });
    ui.add_space(8.0);
}
