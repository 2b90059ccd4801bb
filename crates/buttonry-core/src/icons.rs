//! Icon identities shared by the markup and widget renderers.

/// Icons used by the gallery (Heroicons, 20px solid set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    CheckCircle,
    Plus,
}

impl Icon {
    /// Side length of the icon's view box.
    pub const VIEW_BOX: f32 = 20.0;

    pub fn name(self) -> &'static str {
        match self {
            Icon::CheckCircle => "check-circle",
            Icon::Plus => "plus",
        }
    }

    /// SVG path data in a 20x20 view box. Drawn with `fill-rule="evenodd"`.
    pub fn svg_path(self) -> &'static str {
        match self {
            Icon::CheckCircle => {
                "M10 18a8 8 0 100-16 8 8 0 000 16zm3.857-9.809a.75.75 0 00-1.214-.882l-3.483 \
                 4.79-1.88-1.88a.75.75 0 10-1.06 1.061l2.5 2.5a.75.75 0 001.137-.089l4-5.5z"
            }
            Icon::Plus => {
                "M10.75 4.75a.75.75 0 00-1.5 0v4.5h-4.5a.75.75 0 000 1.5h4.5v4.5a.75.75 0 \
                 001.5 0v-4.5h4.5a.75.75 0 000-1.5h-4.5v-4.5z"
            }
        }
    }
}
