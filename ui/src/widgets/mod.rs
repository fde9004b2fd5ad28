mod data_grid;

pub use data_grid::{DataGridState, data_grid_panel, show_data_grid};
