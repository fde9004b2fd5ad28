//! Column layout for the user table.

use egui_extras::Column;
use usergrid_business::{TableState, UserField};

pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// Width of the drag strip at the right edge of each header cell.
pub const RESIZE_HANDLE_WIDTH: f32 = 6.0;

/// One exact-width column per visible field. Widths come from the table
/// state, so a drag resize takes effect on the next frame.
#[inline]
pub fn table_columns(table: &TableState, columns: &[UserField]) -> Vec<Column> {
    columns
        .iter()
        .map(|column| Column::exact(table.column_width(*column)).clip(true))
        .collect()
}
