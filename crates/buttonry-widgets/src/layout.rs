//! Layout helpers: gallery rows, dividers, section labels.

use egui::{Stroke, Ui};

use crate::{sizing, theme};

/// Lay out a row of buttons with `space-x-8` spacing, vertically centered.
pub fn button_row<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = sizing::ROW_SPACING;
        add_contents(ui)
    })
    .inner
}

/// Draw a horizontal divider with `my-8` spacing around it.
pub fn divider(ui: &mut Ui) {
    ui.add_space(sizing::SECTION_SPACING);
    let rect = ui.available_rect_before_wrap();
    let y = rect.top();
    ui.painter().hline(rect.x_range(), y, Stroke::new(1.0, theme::BORDER));
    ui.add_space(1.0 + sizing::SECTION_SPACING);
}

/// Draw a section label (small, muted text).
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(10.0)
            .color(theme::TEXT_MUTED),
    );
}
