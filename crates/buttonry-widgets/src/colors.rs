//! Tailwind palette and color lookup for class tokens.
//!
//! Only the hues the button tables use are included.

use egui::Color32;

/// A Tailwind color with all shade variants (50-950).
#[derive(Clone, Copy)]
pub struct TailwindColor {
    /// Color name (e.g., "Teal", "Gray")
    pub name: &'static str,
    /// Shades from 50 to 950 (11 total)
    pub shades: [Color32; 11],
}

impl TailwindColor {
    /// Create a new TailwindColor from RGB tuples.
    pub const fn new(name: &'static str, shades: [(u8, u8, u8); 11]) -> Self {
        let mut out = [Color32::TRANSPARENT; 11];
        let mut i = 0;
        while i < 11 {
            out[i] = Color32::from_rgb(shades[i].0, shades[i].1, shades[i].2);
            i += 1;
        }
        Self { name, shades: out }
    }

    /// Shade by label ("50", "100", ..., "950").
    pub fn shade(&self, label: &str) -> Option<Color32> {
        SHADE_LABELS
            .iter()
            .position(|l| *l == label)
            .map(|index| self.shades[index])
    }
}

/// Shade labels, index-aligned with [`TailwindColor::shades`].
pub const SHADE_LABELS: [&str; 11] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

// Tailwind CSS colors - https://tailwindcss.com/docs/colors
pub const TAILWIND_COLORS: &[TailwindColor] = &[
    TailwindColor::new("Teal", [
        (240, 253, 250), (204, 251, 241), (153, 246, 228), (94, 234, 212),
        (45, 212, 191), (20, 184, 166), (13, 148, 136), (15, 118, 110),
        (17, 94, 89), (19, 78, 74), (4, 47, 46),
    ]),
    TailwindColor::new("Indigo", [
        (238, 242, 255), (224, 231, 255), (199, 210, 254), (165, 180, 252),
        (129, 140, 248), (99, 102, 241), (79, 70, 229), (67, 56, 202),
        (55, 48, 163), (49, 46, 129), (30, 27, 75),
    ]),
    TailwindColor::new("Gray", [
        (249, 250, 251), (243, 244, 246), (229, 231, 235), (209, 213, 219),
        (156, 163, 175), (107, 114, 128), (75, 85, 99), (55, 65, 81),
        (31, 41, 55), (17, 24, 39), (3, 7, 18),
    ]),
];

/// Lookup into [`TAILWIND_COLORS`].
pub struct TailwindPalette;

impl TailwindPalette {
    pub fn all() -> &'static [TailwindColor] {
        TAILWIND_COLORS
    }

    /// Case-insensitive lookup by hue name.
    pub fn by_name(name: &str) -> Option<&'static TailwindColor> {
        Self::all().iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Resolve the color part of a utility, e.g. `teal-700`, `white`, `transparent`.
    pub fn color(token: &str) -> Option<Color32> {
        match token {
            "white" => Some(Color32::WHITE),
            "black" => Some(Color32::BLACK),
            "transparent" => Some(Color32::TRANSPARENT),
            _ => {
                let (hue, shade) = token.rsplit_once('-')?;
                Self::by_name(hue)?.shade(shade)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lookup() {
        assert_eq!(TailwindPalette::color("teal-700"), Some(Color32::from_rgb(15, 118, 110)));
        assert_eq!(TailwindPalette::color("indigo-50"), Some(Color32::from_rgb(238, 242, 255)));
        assert_eq!(TailwindPalette::color("white"), Some(Color32::WHITE));
    }

    #[test]
    fn test_unknown_colors() {
        assert_eq!(TailwindPalette::color("teal-750"), None);
        assert_eq!(TailwindPalette::color("magenta-500"), None);
        assert_eq!(TailwindPalette::color("xs"), None);
    }

    #[test]
    fn test_by_name_ignores_case() {
        assert!(TailwindPalette::by_name("gray").is_some());
        assert!(TailwindPalette::by_name("GRAY").is_some());
    }
}
