//! Editable, sortable, filterable, paginated user table.
//!
//! - `state`: loader lifecycle plus the grid and table-state models
//! - `panel`: loading / error / ready views
//! - `toolbar`: search input and column toggles
//! - `table`: header, rows and cells
//! - `pagination`: page navigation and page-size selector

mod pagination;
mod panel;
mod state;
mod table;
mod toolbar;

pub use panel::{data_grid_panel, show_data_grid};
pub use state::DataGridState;
