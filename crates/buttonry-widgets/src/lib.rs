//! egui widgets that paint Buttonry buttons from Tailwind class strings.
//!
//! - **Style**: interpretation of class strings as paint parameters
//! - **Colors**: Tailwind palette lookup
//! - **Buttons**: text buttons with icon slots, icon-only buttons
//! - **Layout**: gallery rows, dividers, section labels

pub mod buttons;
pub mod colors;
pub mod icons;
pub mod layout;
pub mod style;

pub use buttons::{VariantButton, VariantIconButton};
pub use colors::{TailwindColor, TailwindPalette, SHADE_LABELS, TAILWIND_COLORS};
pub use icons::paint_icon;
pub use layout::{button_row, divider, section_label};
pub use style::{ButtonStyle, FocusOutline, Radius, Ring, SPACING_UNIT};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Icon size (`h-5 w-5`)
    pub const ICON: f32 = 20.0;
    /// Negative margin pulling icons into the padding (`-ml-0.5`)
    pub const ICON_NUDGE: f32 = 2.0;
    /// Horizontal spacing between buttons in a row (`space-x-8`)
    pub const ROW_SPACING: f32 = 32.0;
    /// Vertical spacing between rows (`space-y-8`)
    pub const SECTION_SPACING: f32 = 32.0;
    /// Page side padding (`px-8`)
    pub const PAGE_PADDING: f32 = 32.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (gray-900)
    pub const TEXT: Color32 = Color32::from_rgb(17, 24, 39);
    /// Muted text color (gray-500)
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(107, 114, 128);
    /// Divider color (gray-200)
    pub const BORDER: Color32 = Color32::from_rgb(229, 231, 235);
    /// Default ring color (blue-500 at 50%)
    pub const RING: Color32 = Color32::from_rgba_premultiplied(30, 65, 123, 128);
    /// Page background
    pub const PAGE_BG: Color32 = Color32::WHITE;
}
