//! Gallery UI using egui.

use buttonry_core::{
    ButtonProps, ButtonStyles, Gallery, GalleryItem, GallerySection, Intent, ItemKind, Size,
};
use buttonry_widgets::{
    button_row, divider, section_label, sizing, theme, VariantButton, VariantIconButton,
};
use egui::{Context, Frame, Margin, RichText, ScrollArea};

/// Actions the gallery asks the application to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    ExportHtml,
}

/// UI state for the gallery window.
pub struct UiState {
    pub gallery: Gallery,
    /// Class string for the toolbar's own buttons.
    toolbar_class: String,
    /// Last status message shown in the footer.
    pub status: String,
}

impl UiState {
    pub fn new(styles: &ButtonStyles, gallery: Gallery) -> buttonry_core::ConfigResult<Self> {
        let toolbar_class = styles.button_class(
            &ButtonProps::new("Export HTML...")
                .intent(Intent::Secondary)
                .size(Size::Sm),
        )?;
        Ok(Self {
            status: format!("{} buttons. Click one to copy its classes.", gallery.item_count()),
            gallery,
            toolbar_class,
        })
    }
}

fn show_item(ui: &mut egui::Ui, item: &GalleryItem) -> bool {
    match &item.kind {
        ItemKind::Button { label, icon } => VariantButton::new(&item.class, label)
            .icon(*icon)
            .tooltip(&item.class)
            .show(ui),
        ItemKind::IconButton { icon, hidden_label } => {
            VariantIconButton::new(&item.class, *icon, hidden_label.as_deref().unwrap_or(""))
                .tooltip(&item.class)
                .show(ui)
        }
    }
}

/// Render the gallery and return any action requested.
pub fn render_ui(ctx: &Context, state: &mut UiState) -> Option<UiAction> {
    let mut action = None;

    egui::TopBottomPanel::top("toolbar")
        .frame(Frame::new().fill(theme::PAGE_BG).inner_margin(Margin::symmetric(32, 12)))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Buttons").size(18.0).color(theme::TEXT).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if cfg!(feature = "native")
                        && VariantButton::new(&state.toolbar_class, "Export HTML...").show(ui)
                    {
                        action = Some(UiAction::ExportHtml);
                    }
                });
            });
        });

    egui::TopBottomPanel::bottom("status")
        .frame(Frame::new().fill(theme::PAGE_BG).inner_margin(Margin::symmetric(32, 6)))
        .show(ctx, |ui| {
            ui.label(RichText::new(&state.status).size(11.0).color(theme::TEXT_MUTED));
        });

    let margin = sizing::PAGE_PADDING as i8;
    egui::CentralPanel::default()
        .frame(Frame::new().fill(theme::PAGE_BG).inner_margin(Margin::same(margin)))
        .show(ctx, |ui| {
            ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
                let mut copied = None;
                for section in &state.gallery.sections {
                    match section {
                        GallerySection::Row(row) => {
                            section_label(ui, &row.title);
                            button_row(ui, |ui| {
                                for item in &row.items {
                                    if show_item(ui, item) {
                                        copied = Some(item);
                                    }
                                }
                            });
                            ui.add_space(sizing::SECTION_SPACING);
                        }
                        GallerySection::Divider => divider(ui),
                    }
                }

                if let Some(item) = copied {
                    ui.ctx().copy_text(item.class.clone());
                    log::debug!("Copied classes of {:?}: {}", item.accessible_name(), item.class);
                    state.status = format!("Copied: {}", item.class);
                }
            });
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use buttonry_core::GalleryRow;
    use egui::epaint::Shape;
    use egui::{Color32, Event, FullOutput, OutputCommand, PointerButton, Pos2, RawInput, Rect};

    const TEAL_700: Color32 = Color32::from_rgb(15, 118, 110);
    const GRAY_300: Color32 = Color32::from_rgb(209, 213, 219);

    fn single_button_state() -> UiState {
        let styles = ButtonStyles::new().unwrap();
        let item = GalleryItem::button(&styles, &ButtonProps::new("Go")).unwrap();
        let gallery = Gallery {
            sections: vec![GallerySection::Row(GalleryRow {
                title: "Primary".to_string(),
                items: vec![item],
            })],
        };
        UiState::new(&styles, gallery).unwrap()
    }

    fn pass(ctx: &Context, state: &mut UiState, events: Vec<Event>) -> (FullOutput, Option<UiAction>) {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(1000.0, 700.0))),
            events,
            ..Default::default()
        };
        let mut action = None;
        let output = ctx.run(input, |ctx| {
            if let Some(a) = render_ui(ctx, state) {
                action = Some(a);
            }
        });
        (output, action)
    }

    fn find_rect(output: &FullOutput, matches: impl Fn(&egui::epaint::RectShape) -> bool) -> Rect {
        output
            .shapes
            .iter()
            .find_map(|clipped| match &clipped.shape {
                Shape::Rect(rect) if matches(rect) => Some(rect.rect),
                _ => None,
            })
            .unwrap()
    }

    fn click(ctx: &Context, state: &mut UiState, pos: Pos2) -> (FullOutput, Option<UiAction>) {
        let button = |pressed| Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Default::default(),
        };
        pass(ctx, state, vec![Event::PointerMoved(pos), button(true)]);
        pass(ctx, state, vec![button(false)])
    }

    #[test]
    fn test_click_copies_class() {
        let ctx = Context::default();
        let mut state = single_button_state();
        let class = match &state.gallery.sections[0] {
            GallerySection::Row(row) => row.items[0].class.clone(),
            GallerySection::Divider => unreachable!(),
        };

        let (first, _) = pass(&ctx, &mut state, Vec::new());
        let button = find_rect(&first, |r| r.fill == TEAL_700);
        let (output, action) = click(&ctx, &mut state, button.center());

        assert_eq!(action, None);
        assert_eq!(state.status, format!("Copied: {class}"));
        assert!(output
            .platform_output
            .commands
            .iter()
            .any(|c| matches!(c, OutputCommand::CopyText(text) if *text == class)));
    }

    #[test]
    fn test_status_before_click() {
        let ctx = Context::default();
        let mut state = single_button_state();
        let (output, action) = pass(&ctx, &mut state, Vec::new());
        assert_eq!(action, None);
        assert!(state.status.starts_with("1 buttons"));
        assert!(output.platform_output.commands.is_empty());
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_toolbar_requests_export() {
        let ctx = Context::default();
        let mut state = single_button_state();
        let status = state.status.clone();

        let (first, _) = pass(&ctx, &mut state, Vec::new());
        // The secondary toolbar button is the only ring-stroked rect on the page.
        let export = find_rect(&first, |r| r.stroke.color == GRAY_300);
        let (_, action) = click(&ctx, &mut state, export.center());

        assert_eq!(action, Some(UiAction::ExportHtml));
        assert_eq!(state.status, status);
    }
}
