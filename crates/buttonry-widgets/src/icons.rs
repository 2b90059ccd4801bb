//! Vector painting of the gallery icons.

use buttonry_core::Icon;
use egui::{Color32, Painter, Pos2, Rect, Stroke};

/// Paint `icon` into `rect` (treated as a 20x20 view box).
///
/// `cutout` is the color behind the icon; solid icons punch their inner mark with it.
pub fn paint_icon(painter: &Painter, icon: Icon, rect: Rect, color: Color32, cutout: Color32) {
    let scale = rect.width().min(rect.height()) / Icon::VIEW_BOX;
    let at = |x: f32, y: f32| Pos2::new(rect.left() + x * scale, rect.top() + y * scale);

    match icon {
        Icon::CheckCircle => {
            painter.circle_filled(at(10.0, 10.0), 8.0 * scale, color);
            // An opaque cutout keeps the check visible on any background.
            let mark = if cutout.a() == 0 { Color32::WHITE } else { cutout };
            let stroke = Stroke::new(1.5 * scale, mark);
            painter.line_segment([at(6.6, 10.3), at(8.9, 12.6)], stroke);
            painter.line_segment([at(8.9, 12.6), at(13.1, 7.0)], stroke);
        }
        Icon::Plus => {
            let stroke = Stroke::new(1.5 * scale, color);
            painter.line_segment([at(10.0, 4.75), at(10.0, 15.25)], stroke);
            painter.line_segment([at(4.75, 10.0), at(15.25, 10.0)], stroke);
        }
    }
}
