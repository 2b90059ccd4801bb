//! The button gallery: rows of resolved buttons for visual review.

use crate::button::{ButtonProps, ButtonStyles, IconButtonProps, IconSlot, Intent, Rounded, Size};
use crate::icons::Icon;
use crate::variants::ConfigResult;

/// Label shown on every text button in the gallery.
pub const BUTTON_TEXT: &str = "Button text";
/// Hidden label of the gallery icon buttons.
pub const ICON_BUTTON_LABEL: &str = "Plus it!";

/// What a gallery item renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Button { label: String, icon: IconSlot },
    IconButton { icon: Icon, hidden_label: Option<String> },
}

/// One rendered control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub class: String,
    pub kind: ItemKind,
}

impl GalleryItem {
    /// Resolve a text button.
    pub fn button(styles: &ButtonStyles, props: &ButtonProps) -> ConfigResult<Self> {
        Ok(Self {
            class: styles.button_class(props)?,
            kind: ItemKind::Button {
                label: props.label.clone(),
                icon: props.icon,
            },
        })
    }

    /// Resolve an icon-only button.
    pub fn icon_button(styles: &ButtonStyles, props: &IconButtonProps) -> ConfigResult<Self> {
        Ok(Self {
            class: styles.icon_button_class(props)?,
            kind: ItemKind::IconButton {
                icon: props.icon,
                hidden_label: Some(props.hidden_label.clone()),
            },
        })
    }

    /// Text shown to the user, or the hidden label for icon buttons.
    pub fn accessible_name(&self) -> &str {
        match &self.kind {
            ItemKind::Button { label, .. } => label.as_str(),
            ItemKind::IconButton { hidden_label, icon } => {
                hidden_label.as_deref().unwrap_or_else(|| icon.name())
            }
        }
    }
}

/// A titled row of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryRow {
    pub title: String,
    pub items: Vec<GalleryItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GallerySection {
    Row(GalleryRow),
    Divider,
}

/// The whole gallery page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gallery {
    pub sections: Vec<GallerySection>,
}

impl Gallery {
    /// Resolved rows for every intent, size, icon placement and rounding, followed by
    /// the hand-written reference rows.
    pub fn standard(styles: &ButtonStyles) -> ConfigResult<Self> {
        let mut sections = Vec::new();

        for intent in Intent::ALL {
            sections.push(row(format!("{} buttons", title(intent)), Size::ALL, |size| {
                GalleryItem::button(styles, &ButtonProps::new(BUTTON_TEXT).intent(intent).size(size))
            })?);
        }

        let placements = [
            ("Leading icon", IconSlot::Leading(Icon::CheckCircle)),
            ("Trailing icon", IconSlot::Trailing(Icon::CheckCircle)),
        ];
        for (name, slot) in placements {
            sections.push(row(name.to_string(), Size::ALL, |size| {
                let props = ButtonProps::new(BUTTON_TEXT)
                    .intent(Intent::Primary)
                    .size(size)
                    .icon_slot(slot);
                GalleryItem::button(styles, &props)
            })?);
        }

        for intent in Intent::ALL {
            sections.push(row(format!("Rounded {}", intent.as_str()), Size::ALL, |size| {
                let props = ButtonProps::new(BUTTON_TEXT)
                    .intent(intent)
                    .size(size)
                    .rounded(Rounded::Full);
                GalleryItem::button(styles, &props)
            })?);
        }

        for intent in Intent::ALL {
            sections.push(row(format!("Icon {}", intent.as_str()), Size::ALL, |size| {
                let props = IconButtonProps::new(Icon::Plus, ICON_BUTTON_LABEL)
                    .intent(intent)
                    .size(size);
                GalleryItem::icon_button(styles, &props)
            })?);
        }

        sections.push(GallerySection::Divider);
        sections.extend(reference_rows().into_iter().map(GallerySection::Row));

        log::debug!("Built gallery with {} sections", sections.len());
        Ok(Self { sections })
    }

    pub fn rows(&self) -> impl Iterator<Item = &GalleryRow> {
        self.sections.iter().filter_map(|section| match section {
            GallerySection::Row(row) => Some(row),
            GallerySection::Divider => None,
        })
    }

    pub fn item_count(&self) -> usize {
        self.rows().map(|row| row.items.len()).sum()
    }
}

fn title(intent: Intent) -> &'static str {
    match intent {
        Intent::Primary => "Primary",
        Intent::Secondary => "Secondary",
        Intent::Soft => "Soft",
    }
}

fn row(
    title: String,
    sizes: impl IntoIterator<Item = Size>,
    item: impl Fn(Size) -> ConfigResult<GalleryItem>,
) -> ConfigResult<GallerySection> {
    let items = sizes.into_iter().map(item).collect::<ConfigResult<Vec<_>>>()?;
    Ok(GallerySection::Row(GalleryRow { title, items }))
}

const REF_PRIMARY: &str = "bg-indigo-600 font-semibold text-white shadow-sm hover:bg-indigo-500 \
    focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 \
    focus-visible:outline-indigo-600";
const REF_SECONDARY: &str =
    "bg-white font-semibold text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-gray-50";
const REF_SOFT: &str = "bg-indigo-50 font-semibold text-indigo-600 shadow-sm hover:bg-indigo-100";

const REF_SIZES: [&str; 5] = [
    "rounded px-2 py-1 text-xs",
    "rounded px-2 py-1 text-sm",
    "rounded-md px-2.5 py-1.5 text-sm",
    "rounded-md px-3 py-2 text-sm",
    "rounded-md px-3.5 py-2.5 text-sm",
];
const REF_ROUNDED_SIZES: [&str; 5] = [
    "rounded-full px-2.5 py-1 text-xs",
    "rounded-full px-2.5 py-1 text-sm",
    "rounded-full px-3 py-1.5 text-sm",
    "rounded-full px-3.5 py-2 text-sm",
    "rounded-full px-4 py-2.5 text-sm",
];
const REF_ICON_SIZES: [&str; 3] = [
    "inline-flex items-center gap-x-1.5 rounded-md px-2.5 py-1.5 text-sm",
    "inline-flex items-center gap-x-1.5 rounded-md px-3 py-2 text-sm",
    "inline-flex items-center gap-x-2 rounded-md px-3.5 py-2.5 text-sm",
];
const REF_CIRCULAR_SIZES: [&str; 3] = ["rounded-full p-1", "rounded-full p-1.5", "rounded-full p-2"];

fn text_items(shapes: &[&str], colors: &str, icon: IconSlot) -> Vec<GalleryItem> {
    shapes
        .iter()
        .map(|shape| GalleryItem {
            class: format!("{shape} {colors}"),
            kind: ItemKind::Button {
                label: BUTTON_TEXT.to_string(),
                icon,
            },
        })
        .collect()
}

/// Hand-written class strings for side-by-side comparison with the generated rows.
///
/// Each item carries the same tokens as the hand-written markup, composed as shape
/// tokens followed by the shared color tokens, so the order differs from the markup.
fn reference_rows() -> Vec<GalleryRow> {
    let circular: Vec<GalleryItem> = REF_CIRCULAR_SIZES
        .iter()
        .map(|shape| GalleryItem {
            // Circular buttons carry no text weight.
            class: format!("{shape} {}", REF_PRIMARY.replace("font-semibold ", "")),
            kind: ItemKind::IconButton {
                icon: Icon::Plus,
                hidden_label: None,
            },
        })
        .collect();

    let check = Icon::CheckCircle;
    [
        ("Reference primary", text_items(&REF_SIZES, REF_PRIMARY, IconSlot::None)),
        ("Reference secondary", text_items(&REF_SIZES, REF_SECONDARY, IconSlot::None)),
        ("Reference soft", text_items(&REF_SIZES, REF_SOFT, IconSlot::None)),
        ("Reference leading icon", text_items(&REF_ICON_SIZES, REF_PRIMARY, IconSlot::Leading(check))),
        ("Reference trailing icon", text_items(&REF_ICON_SIZES, REF_PRIMARY, IconSlot::Trailing(check))),
        ("Reference rounded primary", text_items(&REF_ROUNDED_SIZES, REF_PRIMARY, IconSlot::None)),
        ("Reference rounded secondary", text_items(&REF_ROUNDED_SIZES, REF_SECONDARY, IconSlot::None)),
        ("Reference circular", circular),
    ]
    .into_iter()
    .map(|(title, items)| GalleryRow {
        title: title.to_string(),
        items,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> Gallery {
        Gallery::standard(&ButtonStyles::new().unwrap()).unwrap()
    }

    #[test]
    fn test_standard_layout() {
        let gallery = gallery();
        // 3 intent + 2 icon + 3 rounded + 3 icon-button rows, divider, 8 reference rows
        assert_eq!(gallery.sections.len(), 11 + 1 + 8);
        assert_eq!(gallery.sections[11], GallerySection::Divider);
        assert_eq!(gallery.item_count(), 11 * 5 + 3 * 5 + 2 * 3 + 2 * 5 + 3);
    }

    #[test]
    fn test_icon_rows_use_icon_padding() {
        let gallery = gallery();
        let icon_row = gallery.rows().find(|r| r.title == "Icon primary").unwrap();
        let md = &icon_row.items[2];
        assert!(md.class.split(' ').any(|t| t == "p-1.5"));
        assert_eq!(md.accessible_name(), ICON_BUTTON_LABEL);
    }

    #[test]
    fn test_trailing_row_keeps_slot() {
        let gallery = gallery();
        let trailing = gallery.rows().find(|r| r.title == "Trailing icon").unwrap();
        for item in &trailing.items {
            assert!(matches!(
                item.kind,
                ItemKind::Button { icon: IconSlot::Trailing(Icon::CheckCircle), .. }
            ));
        }
    }

    fn sorted_tokens(class: &str) -> Vec<&str> {
        let mut tokens: Vec<_> = class.split_whitespace().collect();
        tokens.sort_unstable();
        tokens
    }

    #[test]
    fn test_reference_rows_keep_markup_tokens() {
        let gallery = gallery();
        let primary = gallery.rows().find(|r| r.title == "Reference primary").unwrap();
        assert_eq!(
            sorted_tokens(&primary.items[0].class),
            sorted_tokens(
                "rounded bg-indigo-600 px-2 py-1 text-xs font-semibold text-white shadow-sm \
                 hover:bg-indigo-500 focus-visible:outline focus-visible:outline-2 \
                 focus-visible:outline-offset-2 focus-visible:outline-indigo-600"
            )
        );
        let circular = gallery.rows().find(|r| r.title == "Reference circular").unwrap();
        assert_eq!(
            sorted_tokens(&circular.items[1].class),
            sorted_tokens(
                "rounded-full bg-indigo-600 p-1.5 text-white shadow-sm hover:bg-indigo-500 \
                 focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 \
                 focus-visible:outline-indigo-600"
            )
        );
    }

    #[test]
    fn test_reference_circular_has_no_font_weight() {
        let gallery = gallery();
        let circular = gallery.rows().last().unwrap();
        assert_eq!(circular.title, "Reference circular");
        assert!(circular.items.iter().all(|i| !i.class.contains("font-semibold")));
        assert_eq!(circular.items[0].accessible_name(), "plus");
    }
}
