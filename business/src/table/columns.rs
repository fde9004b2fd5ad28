//! Per-column width and visibility.

use std::collections::BTreeMap;

use crate::UserField;

pub const DEFAULT_COLUMN_WIDTH: f32 = 150.0;
pub const MIN_COLUMN_WIDTH: f32 = 20.0;

/// Width overrides from drag-resizing. Columns without one use the default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnSizing {
    widths: BTreeMap<UserField, f32>,
    resizing: Option<UserField>,
}

impl ColumnSizing {
    pub fn width(&self, column: UserField) -> f32 {
        self.widths
            .get(&column)
            .copied()
            .unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    /// Applies a drag delta immediately, clamping at the minimum width.
    pub fn resize(&mut self, column: UserField, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        let width = (self.width(column) + delta).max(MIN_COLUMN_WIDTH);
        self.widths.insert(column, width);
        self.resizing = Some(column);
    }

    /// Marks the end of a drag gesture.
    pub fn finish_resize(&mut self) {
        self.resizing = None;
    }

    pub fn is_resizing(&self, column: UserField) -> bool {
        self.resizing == Some(column)
    }

    pub fn reset(&mut self, column: UserField) {
        self.widths.remove(&column);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnVisibility {
    hidden: BTreeMap<UserField, bool>,
}

impl ColumnVisibility {
    pub fn is_visible(&self, column: UserField) -> bool {
        !self.hidden.get(&column).copied().unwrap_or(false)
    }

    pub fn set_visible(&mut self, column: UserField, visible: bool) {
        self.hidden.insert(column, !visible);
    }

    pub fn toggle(&mut self, column: UserField) {
        let visible = self.is_visible(column);
        self.set_visible(column, !visible);
    }

    /// Visible columns in schema order.
    pub fn visible_columns(&self) -> Vec<UserField> {
        UserField::ALL
            .into_iter()
            .filter(|column| self.is_visible(*column))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_default_until_resized() {
        let sizing = ColumnSizing::default();
        assert_eq!(sizing.width(UserField::Email), DEFAULT_COLUMN_WIDTH);
    }

    #[test]
    fn resize_accumulates_deltas_and_clamps() {
        let mut sizing = ColumnSizing::default();
        sizing.resize(UserField::Name, 30.0);
        sizing.resize(UserField::Name, 20.0);
        assert_eq!(sizing.width(UserField::Name), 200.0);
        assert!(sizing.is_resizing(UserField::Name));

        sizing.resize(UserField::Name, -1000.0);
        assert_eq!(sizing.width(UserField::Name), MIN_COLUMN_WIDTH);

        sizing.finish_resize();
        assert!(!sizing.is_resizing(UserField::Name));
        assert_eq!(sizing.width(UserField::Phone), DEFAULT_COLUMN_WIDTH);
    }

    #[test]
    fn non_finite_delta_is_ignored() {
        let mut sizing = ColumnSizing::default();
        sizing.resize(UserField::Id, f32::NAN);
        assert_eq!(sizing.width(UserField::Id), DEFAULT_COLUMN_WIDTH);
    }

    #[test]
    fn reset_restores_default_width() {
        let mut sizing = ColumnSizing::default();
        sizing.resize(UserField::Id, -100.0);
        sizing.reset(UserField::Id);
        assert_eq!(sizing.width(UserField::Id), DEFAULT_COLUMN_WIDTH);
    }

    #[test]
    fn all_columns_visible_by_default() {
        assert_eq!(
            ColumnVisibility::default().visible_columns(),
            UserField::ALL.to_vec()
        );
    }

    #[test]
    fn toggle_hides_only_that_column() {
        let mut visibility = ColumnVisibility::default();
        visibility.toggle(UserField::Email);
        assert!(!visibility.is_visible(UserField::Email));
        assert_eq!(
            visibility.visible_columns(),
            vec![
                UserField::Id,
                UserField::Name,
                UserField::Username,
                UserField::Phone
            ]
        );

        visibility.toggle(UserField::Email);
        assert!(visibility.is_visible(UserField::Email));
    }
}
