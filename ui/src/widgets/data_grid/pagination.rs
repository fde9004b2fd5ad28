use egui::{Button, ComboBox, Ui};
use usergrid_business::{TableState, TableView, table::PAGE_SIZES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageAction {
    Previous,
    Next,
    PageSize(usize),
}

/// Previous / "Page X of Y" / Next, then the page-size selector.
pub fn render_pagination(ui: &mut Ui, table: &mut TableState, view: &TableView) {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.add_enabled(view.can_previous, Button::new("Previous")).clicked() {
            action = Some(PageAction::Previous);
        }
        ui.label(view.page_label());
        if ui.add_enabled(view.can_next, Button::new("Next")).clicked() {
            action = Some(PageAction::Next);
        }

        ui.add_space(12.0);

        ComboBox::from_id_salt("user_grid_page_size")
            .selected_text(format!("Show {}", view.page_size))
            .show_ui(ui, |ui| {
                for size in PAGE_SIZES {
                    if ui
                        .selectable_label(size == view.page_size, format!("Show {size}"))
                        .clicked()
                    {
                        action = Some(PageAction::PageSize(size));
                    }
                }
            });
    });

    match action {
        Some(PageAction::Previous) => table.previous_page(view.filtered_count),
        Some(PageAction::Next) => table.next_page(view.filtered_count),
        Some(PageAction::PageSize(size)) => table.set_page_size(size, view.filtered_count),
        None => {}
    }
}
