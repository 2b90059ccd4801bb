//! Interpretation of Tailwind class strings as egui paint parameters.
//!
//! Only the utilities used by button tables are understood; anything else is ignored.
//! Later tokens override earlier ones, matching how the generated strings are ordered.

use egui::{vec2, Color32, CornerRadius, Vec2};

use crate::colors::TailwindPalette;
use crate::theme;

/// Pixels per Tailwind spacing unit (0.25rem at a 16px root).
pub const SPACING_UNIT: f32 = 4.0;

/// Corner rounding of a button.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Radius {
    #[default]
    None,
    Px(f32),
    /// Pill / circle.
    Full,
}

impl Radius {
    /// Corner radius for a rect of the given size.
    pub fn corner_radius(self, size: Vec2) -> CornerRadius {
        let px = match self {
            Radius::None => 0.0,
            Radius::Px(px) => px,
            Radius::Full => size.min_elem() / 2.0,
        };
        CornerRadius::same(px.round().clamp(0.0, u8::MAX as f32) as u8)
    }
}

/// `ring-*` utilities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub width: f32,
    pub color: Color32,
    pub inset: bool,
}

/// `focus-visible:outline-*` utilities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusOutline {
    pub width: f32,
    pub offset: f32,
    pub color: Color32,
}

/// Paint parameters derived from a class string.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    pub background: Color32,
    pub hover_background: Option<Color32>,
    pub active_background: Option<Color32>,
    pub text_color: Color32,
    pub font_size: f32,
    pub line_height: f32,
    pub semibold: bool,
    /// Horizontal and vertical padding in pixels.
    pub padding: Vec2,
    pub gap: f32,
    pub radius: Radius,
    pub ring: Option<Ring>,
    pub focus_outline: Option<FocusOutline>,
    pub shadow: bool,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            background: Color32::TRANSPARENT,
            hover_background: None,
            active_background: None,
            text_color: theme::TEXT,
            font_size: 16.0,
            line_height: 24.0,
            semibold: false,
            padding: Vec2::ZERO,
            gap: 0.0,
            radius: Radius::None,
            ring: None,
            focus_outline: None,
            shadow: false,
        }
    }
}

fn spacing(value: &str) -> Option<f32> {
    match value {
        "px" => Some(1.0),
        _ => value.parse::<f32>().ok().map(|units| units * SPACING_UNIT),
    }
}

impl ButtonStyle {
    /// Build a style from a whitespace-separated class string.
    pub fn from_classes(classes: &str) -> Self {
        let mut style = Self::default();
        let mut ring_width = None;
        let mut ring_color = None;
        let mut ring_inset = false;
        let mut outline_width = None;
        let mut outline_offset = 0.0;
        let mut outline_color = None;

        for token in classes.split_whitespace() {
            let (modifier, utility) = match token.split_once(':') {
                Some((modifier, utility)) => (Some(modifier), utility),
                None => (None, token),
            };

            let handled = match modifier {
                Some("hover") => utility
                    .strip_prefix("bg-")
                    .and_then(TailwindPalette::color)
                    .map(|c| style.hover_background = Some(c))
                    .is_some(),
                Some("active") => utility
                    .strip_prefix("bg-")
                    .and_then(TailwindPalette::color)
                    .map(|c| style.active_background = Some(c))
                    .is_some(),
                Some("focus-visible") => match utility {
                    "outline" => {
                        outline_width.get_or_insert(1.0);
                        true
                    }
                    _ => {
                        if let Some(offset) = utility.strip_prefix("outline-offset-") {
                            offset.parse::<f32>().map(|px| outline_offset = px).is_ok()
                        } else if let Some(rest) = utility.strip_prefix("outline-") {
                            if let Ok(px) = rest.parse::<f32>() {
                                outline_width = Some(px);
                                true
                            } else {
                                TailwindPalette::color(rest)
                                    .map(|c| outline_color = Some(c))
                                    .is_some()
                            }
                        } else {
                            false
                        }
                    }
                },
                Some(_) => false,
                None => style.apply(
                    utility,
                    &mut ring_width,
                    &mut ring_color,
                    &mut ring_inset,
                ),
            };

            if !handled {
                log::trace!("ignoring class token {:?}", token);
            }
        }

        if ring_width.is_some() || ring_color.is_some() {
            style.ring = Some(Ring {
                width: ring_width.unwrap_or(3.0),
                color: ring_color.unwrap_or(theme::RING),
                inset: ring_inset,
            });
        }
        if let Some(width) = outline_width {
            style.focus_outline = Some(FocusOutline {
                width,
                offset: outline_offset,
                color: outline_color.unwrap_or(style.text_color),
            });
        }
        style
    }

    fn apply(
        &mut self,
        utility: &str,
        ring_width: &mut Option<f32>,
        ring_color: &mut Option<Color32>,
        ring_inset: &mut bool,
    ) -> bool {
        match utility {
            "font-semibold" => self.semibold = true,
            "shadow-sm" => self.shadow = true,
            "rounded" => self.radius = Radius::Px(4.0),
            "rounded-md" => self.radius = Radius::Px(6.0),
            "rounded-lg" => self.radius = Radius::Px(8.0),
            "rounded-full" => self.radius = Radius::Full,
            "rounded-none" => self.radius = Radius::None,
            "text-xs" => (self.font_size, self.line_height) = (12.0, 16.0),
            "text-sm" => (self.font_size, self.line_height) = (14.0, 20.0),
            "text-base" => (self.font_size, self.line_height) = (16.0, 24.0),
            "ring-inset" => *ring_inset = true,
            "ring" => *ring_width = Some(3.0),
            _ => {
                if let Some(value) = utility.strip_prefix("px-") {
                    return spacing(value).map(|px| self.padding.x = px).is_some();
                }
                if let Some(value) = utility.strip_prefix("py-") {
                    return spacing(value).map(|px| self.padding.y = px).is_some();
                }
                if let Some(value) = utility.strip_prefix("p-") {
                    return spacing(value).map(|px| self.padding = vec2(px, px)).is_some();
                }
                if let Some(value) = utility.strip_prefix("gap-x-") {
                    return spacing(value).map(|px| self.gap = px).is_some();
                }
                if let Some(value) = utility.strip_prefix("bg-") {
                    return TailwindPalette::color(value)
                        .map(|c| self.background = c)
                        .is_some();
                }
                if let Some(value) = utility.strip_prefix("text-") {
                    return TailwindPalette::color(value)
                        .map(|c| self.text_color = c)
                        .is_some();
                }
                if let Some(value) = utility.strip_prefix("ring-") {
                    if let Ok(px) = value.parse::<f32>() {
                        *ring_width = Some(px);
                        return true;
                    }
                    return TailwindPalette::color(value)
                        .map(|c| *ring_color = Some(c))
                        .is_some();
                }
                return false;
            }
        }
        true
    }

    /// Background for the current interaction state.
    pub fn background_for(&self, hovered: bool, pressed: bool) -> Color32 {
        if pressed {
            self.active_background
                .or(self.hover_background)
                .unwrap_or(self.background)
        } else if hovered {
            self.hover_background.unwrap_or(self.background)
        } else {
            self.background
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buttonry_core::{ButtonProps, ButtonStyles, IconButtonProps, Icon, Rounded, Size};

    #[test]
    fn test_primary_md() {
        let class = ButtonStyles::new()
            .unwrap()
            .button_class(&ButtonProps::new("x"))
            .unwrap();
        let style = ButtonStyle::from_classes(&class);
        assert_eq!(style.background, Color32::from_rgb(15, 118, 110));
        assert_eq!(style.hover_background, TailwindPalette::color("teal-800"));
        assert_eq!(style.active_background, TailwindPalette::color("teal-900"));
        assert_eq!(style.text_color, Color32::WHITE);
        assert_eq!(style.padding, vec2(10.0, 6.0));
        assert_eq!(style.gap, 8.0);
        assert_eq!(style.radius, Radius::Px(6.0));
        assert_eq!(style.font_size, 14.0);
        assert!(style.semibold);
        assert!(style.shadow);
        let outline = style.focus_outline.unwrap();
        assert_eq!((outline.width, outline.offset), (2.0, 2.0));
        assert_eq!(outline.color, Color32::from_rgb(15, 118, 110));
    }

    #[test]
    fn test_secondary_ring() {
        let style = ButtonStyle::from_classes("bg-white ring-1 ring-inset ring-gray-300");
        let ring = style.ring.unwrap();
        assert_eq!(ring.width, 1.0);
        assert!(ring.inset);
        assert_eq!(ring.color, Color32::from_rgb(209, 213, 219));
    }

    #[test]
    fn test_icon_button_padding_and_radius() {
        let props = IconButtonProps::new(Icon::Plus, "x").size(Size::Xl);
        let class = ButtonStyles::new().unwrap().icon_button_class(&props).unwrap();
        let style = ButtonStyle::from_classes(&class);
        assert_eq!(style.padding, vec2(10.0, 10.0));
        assert_eq!(style.radius, Radius::Full);
    }

    #[test]
    fn test_later_tokens_override() {
        let props = ButtonProps::new("x").rounded(Rounded::Full).class("rounded-none px-8");
        let class = ButtonStyles::new().unwrap().button_class(&props).unwrap();
        let style = ButtonStyle::from_classes(&class);
        assert_eq!(style.radius, Radius::None);
        assert_eq!(style.padding.x, 32.0);
    }

    #[test]
    fn test_unknown_tokens_ignored() {
        let style = ButtonStyle::from_classes("inline-flex items-center dark:bg-black bg-nope-3");
        assert_eq!(style, ButtonStyle::default());
    }

    #[test]
    fn test_background_states() {
        let style = ButtonStyle::from_classes("bg-white hover:bg-gray-50");
        assert_eq!(style.background_for(false, false), Color32::WHITE);
        assert_eq!(style.background_for(true, false), TailwindPalette::color("gray-50").unwrap());
        // No active color: pressed falls back to hover.
        assert_eq!(style.background_for(true, true), TailwindPalette::color("gray-50").unwrap());
    }

    #[test]
    fn test_full_radius_is_half_height() {
        assert_eq!(Radius::Full.corner_radius(vec2(80.0, 28.0)), CornerRadius::same(14));
    }
}
