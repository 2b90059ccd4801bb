//! Button widgets: paint a resolved class string as an egui control.

use buttonry_core::{Icon, IconSlot};
use egui::{
    vec2, Color32, CornerRadius, CursorIcon, Galley, Pos2, Rect, Response, Sense, Stroke,
    StrokeKind, Ui, Vec2, WidgetInfo, WidgetType,
};
use std::sync::Arc;

use crate::icons::paint_icon;
use crate::sizing;
use crate::style::{ButtonStyle, Radius};

/// Paint background, ring, shadow and focus outline. Returns the fill color.
fn paint_frame(ui: &Ui, rect: Rect, response: &Response, style: &ButtonStyle) -> Color32 {
    let painter = ui.painter();
    let corner_radius = style.radius.corner_radius(rect.size());

    if style.shadow {
        let shadow = egui::epaint::Shadow {
            offset: [0, 1],
            blur: 2,
            spread: 0,
            color: Color32::from_black_alpha(13),
        };
        painter.add(shadow.as_shape(rect, corner_radius));
    }

    let fill = style.background_for(response.hovered(), response.is_pointer_button_down_on());
    painter.rect_filled(rect, corner_radius, fill);

    if let Some(ring) = style.ring {
        let kind = if ring.inset {
            StrokeKind::Inside
        } else {
            StrokeKind::Outside
        };
        painter.rect_stroke(rect, corner_radius, Stroke::new(ring.width, ring.color), kind);
    }

    if let (Some(outline), true) = (style.focus_outline, response.has_focus()) {
        let outer = rect.expand(outline.offset);
        let outer_radius = match style.radius {
            Radius::None => CornerRadius::ZERO,
            _ => style.radius.corner_radius(outer.size()),
        };
        painter.rect_stroke(
            outer,
            outer_radius,
            Stroke::new(outline.width, outline.color),
            StrokeKind::Outside,
        );
    }

    fill
}

fn paint_label(ui: &Ui, galley: &Arc<Galley>, pos: Pos2, style: &ButtonStyle) {
    let painter = ui.painter();
    painter.galley(pos, galley.clone(), style.text_color);
    // Default egui fonts ship a single weight; overdraw for semibold.
    if style.semibold {
        painter.galley(pos + vec2(0.4, 0.0), galley.clone(), style.text_color);
    }
}

/// A text button styled by a Tailwind class string, with an optional icon.
pub struct VariantButton<'a> {
    class: &'a str,
    label: &'a str,
    icon: IconSlot,
    tooltip: Option<&'a str>,
}

impl<'a> VariantButton<'a> {
    /// Create a new button from a resolved class string.
    pub fn new(class: &'a str, label: &'a str) -> Self {
        Self {
            class,
            label,
            icon: IconSlot::None,
            tooltip: None,
        }
    }

    /// Set the icon placement.
    pub fn icon(mut self, icon: IconSlot) -> Self {
        self.icon = icon;
        self
    }

    /// Set hover text.
    pub fn tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let style = ButtonStyle::from_classes(self.class);
        let galley = ui.painter().layout_no_wrap(
            self.label.to_string(),
            egui::FontId::proportional(style.font_size),
            style.text_color,
        );

        // Icons sit 0.5 units into the padding (`-ml-0.5` / `-mr-0.5`).
        let (icon_extent, content_height) = match self.icon.icon() {
            Some(_) => (
                sizing::ICON - sizing::ICON_NUDGE + style.gap,
                style.line_height.max(sizing::ICON),
            ),
            None => (0.0, style.line_height),
        };
        let size = vec2(
            galley.size().x + icon_extent + 2.0 * style.padding.x,
            content_height + 2.0 * style.padding.y,
        );
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let fill = paint_frame(ui, rect, &response, &style);
            let center_y = rect.center().y;
            let mut x = rect.left() + style.padding.x;

            if let Some(icon) = self.icon.leading() {
                x -= sizing::ICON_NUDGE;
                paint_icon_at(ui, icon, Pos2::new(x, center_y), style.text_color, fill);
                x += sizing::ICON + style.gap;
            }

            let text_pos = Pos2::new(x, center_y - galley.size().y / 2.0);
            paint_label(ui, &galley, text_pos, &style);
            x += galley.size().x;

            if let Some(icon) = self.icon.trailing() {
                x += style.gap;
                paint_icon_at(ui, icon, Pos2::new(x, center_y), style.text_color, fill);
            }
        }

        let enabled = ui.is_enabled();
        let label = self.label;
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, enabled, label));

        let clicked = response.clicked();
        let response = match self.tooltip {
            Some(tooltip) => response.on_hover_text(tooltip),
            None => response,
        };
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

fn paint_icon_at(ui: &Ui, icon: Icon, left_center: Pos2, color: Color32, cutout: Color32) {
    let rect = Rect::from_min_size(
        Pos2::new(left_center.x, left_center.y - sizing::ICON / 2.0),
        Vec2::splat(sizing::ICON),
    );
    paint_icon(ui.painter(), icon, rect, color, cutout);
}

/// An icon-only button with a hidden accessible label.
pub struct VariantIconButton<'a> {
    class: &'a str,
    icon: Icon,
    hidden_label: &'a str,
    tooltip: Option<&'a str>,
}

impl<'a> VariantIconButton<'a> {
    /// Create a new icon button. `hidden_label` is exposed to accessibility only.
    pub fn new(class: &'a str, icon: Icon, hidden_label: &'a str) -> Self {
        Self {
            class,
            icon,
            hidden_label,
            tooltip: None,
        }
    }

    /// Set hover text (defaults to the hidden label).
    pub fn tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let style = ButtonStyle::from_classes(self.class);
        let size = Vec2::splat(sizing::ICON) + 2.0 * style.padding;
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let fill = paint_frame(ui, rect, &response, &style);
            let icon_rect = Rect::from_center_size(rect.center(), Vec2::splat(sizing::ICON));
            paint_icon(ui.painter(), self.icon, icon_rect, style.text_color, fill);
        }

        let enabled = ui.is_enabled();
        let label = self.hidden_label;
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, enabled, label));

        let clicked = response.clicked();
        let tooltip = self.tooltip.unwrap_or(self.hidden_label);
        let response = if tooltip.is_empty() {
            response
        } else {
            response.on_hover_text(tooltip)
        };
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buttonry_core::{ButtonProps, ButtonStyles, IconButtonProps, Size};

    fn measure(add: impl Fn(&mut Ui)) -> Rect {
        let ctx = egui::Context::default();
        let mut rect = Rect::NOTHING;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                rect = ui.scope(|ui| add(ui)).response.rect;
            });
        });
        rect
    }

    #[test]
    fn test_text_button_height_follows_padding() {
        let styles = ButtonStyles::new().unwrap();
        let md = styles.button_class(&ButtonProps::new("Button text")).unwrap();
        let xl = styles
            .button_class(&ButtonProps::new("Button text").size(Size::Xl))
            .unwrap();
        let md_rect = measure(|ui| {
            VariantButton::new(&md, "Button text").show(ui);
        });
        let xl_rect = measure(|ui| {
            VariantButton::new(&xl, "Button text").show(ui);
        });
        assert_eq!(md_rect.height(), 32.0);
        assert_eq!(xl_rect.height(), 40.0);
        assert!(xl_rect.width() > md_rect.width());
    }

    #[test]
    fn test_icon_widens_button() {
        let styles = ButtonStyles::new().unwrap();
        let plain = styles.button_class(&ButtonProps::new("Go")).unwrap();
        let with_icon = styles
            .button_class(&ButtonProps::new("Go").leading_icon(Icon::CheckCircle))
            .unwrap();
        let plain_rect = measure(|ui| {
            VariantButton::new(&plain, "Go").show(ui);
        });
        let icon_rect = measure(|ui| {
            VariantButton::new(&with_icon, "Go")
                .icon(IconSlot::Leading(Icon::CheckCircle))
                .show(ui);
        });
        let extra = sizing::ICON - sizing::ICON_NUDGE + 8.0;
        assert!((icon_rect.width() - plain_rect.width() - extra).abs() < 0.01);
    }

    #[test]
    fn test_icon_button_is_square() {
        let styles = ButtonStyles::new().unwrap();
        let class = styles
            .icon_button_class(&IconButtonProps::new(Icon::Plus, "Plus it!").size(Size::Xs))
            .unwrap();
        let rect = measure(|ui| {
            VariantIconButton::new(&class, Icon::Plus, "Plus it!").show(ui);
        });
        assert_eq!(rect.size(), Vec2::splat(24.0));
    }
}
