//! Button props and the button variant table.

use crate::env::{check_env, BuildMode};
use crate::icons::Icon;
use crate::variants::{ConfigResult, SelectionRequest, VariantConfig};

/// Variant group names used by the button table.
pub mod groups {
    pub const INTENT: &str = "intent";
    pub const SIZE: &str = "size";
    pub const ROUNDED: &str = "rounded";
    pub const CONTENT: &str = "content-shape";

    pub const ALL: [&str; 4] = [INTENT, SIZE, ROUNDED, CONTENT];
}

/// Color intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Intent {
    #[default]
    Primary,
    Secondary,
    Soft,
}

impl Intent {
    pub const ALL: [Intent; 3] = [Intent::Primary, Intent::Secondary, Intent::Soft];

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Primary => "primary",
            Intent::Secondary => "secondary",
            Intent::Soft => "soft",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl Size {
    pub const ALL: [Size; 5] = [Size::Xs, Size::Sm, Size::Md, Size::Lg, Size::Xl];

    pub fn as_str(self) -> &'static str {
        match self {
            Size::Xs => "xs",
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
            Size::Xl => "xl",
        }
    }
}

/// Corner rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounded {
    #[default]
    Normal,
    Full,
}

impl Rounded {
    pub fn as_str(self) -> &'static str {
        match self {
            Rounded::Normal => "normal",
            Rounded::Full => "full",
        }
    }
}

/// What the button contains. Derived from the props, never chosen directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Content {
    #[default]
    Text,
    TextAndIcon,
    Icon,
}

impl Content {
    pub fn as_str(self) -> &'static str {
        match self {
            Content::Text => "text",
            Content::TextAndIcon => "text-and-icon",
            Content::Icon => "icon",
        }
    }
}

/// Where a text button shows its icon, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconSlot {
    #[default]
    None,
    Leading(Icon),
    Trailing(Icon),
}

impl IconSlot {
    /// Build a slot from two independent optional icons.
    ///
    /// Leading wins when both are given; development builds log a warning.
    pub fn from_options(leading: Option<Icon>, trailing: Option<Icon>) -> Self {
        match (leading, trailing) {
            (Some(leading), Some(trailing)) => {
                check_env(BuildMode::Development, || {
                    log::warn!(
                        "Button has both a leading ({}) and a trailing ({}) icon; only the leading icon is shown",
                        leading.name(),
                        trailing.name()
                    );
                });
                IconSlot::Leading(leading)
            }
            (Some(icon), None) => IconSlot::Leading(icon),
            (None, Some(icon)) => IconSlot::Trailing(icon),
            (None, None) => IconSlot::None,
        }
    }

    pub fn icon(self) -> Option<Icon> {
        match self {
            IconSlot::None => None,
            IconSlot::Leading(icon) | IconSlot::Trailing(icon) => Some(icon),
        }
    }

    pub fn leading(self) -> Option<Icon> {
        match self {
            IconSlot::Leading(icon) => Some(icon),
            _ => None,
        }
    }

    pub fn trailing(self) -> Option<Icon> {
        match self {
            IconSlot::Trailing(icon) => Some(icon),
            _ => None,
        }
    }
}

/// Props of a text button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonProps {
    pub label: String,
    pub intent: Option<Intent>,
    pub size: Option<Size>,
    pub rounded: Option<Rounded>,
    pub icon: IconSlot,
    /// Extra classes appended last.
    pub class: Option<String>,
}

impl ButtonProps {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn intent(mut self, intent: Intent) -> Self {
        self.intent = Some(intent);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn rounded(mut self, rounded: Rounded) -> Self {
        self.rounded = Some(rounded);
        self
    }

    pub fn leading_icon(mut self, icon: Icon) -> Self {
        self.icon = IconSlot::Leading(icon);
        self
    }

    pub fn trailing_icon(mut self, icon: Icon) -> Self {
        self.icon = IconSlot::Trailing(icon);
        self
    }

    pub fn icon_slot(mut self, icon: IconSlot) -> Self {
        self.icon = icon;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn content(&self) -> Content {
        match self.icon {
            IconSlot::None => Content::Text,
            IconSlot::Leading(_) | IconSlot::Trailing(_) => Content::TextAndIcon,
        }
    }

    /// Variant selection for these props. Unset props fall back to table defaults.
    pub fn selection(&self) -> SelectionRequest {
        let selection = SelectionRequest::new()
            .with_opt(groups::INTENT, self.intent.map(Intent::as_str))
            .with_opt(groups::SIZE, self.size.map(Size::as_str))
            .with_opt(groups::ROUNDED, self.rounded.map(Rounded::as_str))
            .with(groups::CONTENT, self.content().as_str());
        match &self.class {
            Some(class) => selection.with_class(class.clone()),
            None => selection,
        }
    }
}

/// Props of an icon-only button. Always fully rounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconButtonProps {
    pub icon: Icon,
    /// Accessible name, not shown visually.
    pub hidden_label: String,
    pub intent: Option<Intent>,
    pub size: Option<Size>,
    pub class: Option<String>,
}

impl IconButtonProps {
    pub fn new(icon: Icon, hidden_label: impl Into<String>) -> Self {
        Self {
            icon,
            hidden_label: hidden_label.into(),
            intent: None,
            size: None,
            class: None,
        }
    }

    pub fn intent(mut self, intent: Intent) -> Self {
        self.intent = Some(intent);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn selection(&self) -> SelectionRequest {
        let selection = SelectionRequest::new()
            .with_opt(groups::INTENT, self.intent.map(Intent::as_str))
            .with_opt(groups::SIZE, self.size.map(Size::as_str))
            .with(groups::ROUNDED, Rounded::Full.as_str())
            .with(groups::CONTENT, Content::Icon.as_str());
        match &self.class {
            Some(class) => selection.with_class(class.clone()),
            None => selection,
        }
    }
}

/// The standard button table.
pub fn button_table() -> ConfigResult<VariantConfig> {
    const TEXT: &[&str] = &["text", "text-and-icon"];
    const NORMAL: &[&str] = &["normal"];
    const ICON: &[&str] = &["icon"];

    VariantConfig::builder("font-semibold shadow-sm")
        .group(
            groups::INTENT,
            [
                (
                    "primary",
                    "bg-teal-700 text-white hover:bg-teal-800 active:bg-teal-900 \
                     focus-visible:outline focus-visible:outline-2 \
                     focus-visible:outline-offset-2 focus-visible:outline-teal-700",
                ),
                (
                    "secondary",
                    "bg-white text-gray-900 ring-1 ring-inset ring-gray-300 \
                     hover:bg-gray-50 active:bg-gray-100",
                ),
                (
                    "soft",
                    "bg-teal-50 text-teal-700 hover:bg-teal-100 active:bg-teal-200",
                ),
            ],
        )
        .group(
            groups::SIZE,
            [
                ("xs", "text-xs"),
                ("sm", "text-sm"),
                ("md", "text-sm"),
                ("lg", "text-sm"),
                ("xl", "text-sm"),
            ],
        )
        .group(groups::ROUNDED, [("normal", ""), ("full", "rounded-full")])
        .group(
            groups::CONTENT,
            [
                ("text", ""),
                ("text-and-icon", "inline-flex items-center"),
                ("icon", ""),
            ],
        )
        .compound([(groups::SIZE, &["xs", "sm"][..]), (groups::ROUNDED, NORMAL)], "rounded")
        .compound(
            [(groups::SIZE, &["md", "lg", "xl"][..]), (groups::ROUNDED, NORMAL)],
            "rounded-md",
        )
        .compound([(groups::SIZE, &["xs", "sm"][..]), (groups::CONTENT, TEXT)], "gap-x-1.5 px-2 py-1")
        .compound([(groups::SIZE, &["md", "lg", "xl"][..]), (groups::CONTENT, TEXT)], "gap-x-2")
        .compound([(groups::SIZE, &["md"][..]), (groups::CONTENT, TEXT)], "px-2.5 py-1.5")
        .compound([(groups::SIZE, &["lg"][..]), (groups::CONTENT, TEXT)], "px-3 py-2")
        .compound([(groups::SIZE, &["xl"][..]), (groups::CONTENT, TEXT)], "px-3.5 py-2.5")
        .compound([(groups::SIZE, &["xs"][..]), (groups::CONTENT, ICON)], "p-0.5")
        .compound([(groups::SIZE, &["sm"][..]), (groups::CONTENT, ICON)], "p-1")
        .compound([(groups::SIZE, &["md"][..]), (groups::CONTENT, ICON)], "p-1.5")
        .compound([(groups::SIZE, &["lg"][..]), (groups::CONTENT, ICON)], "p-2")
        .compound([(groups::SIZE, &["xl"][..]), (groups::CONTENT, ICON)], "p-2.5")
        .default_value(groups::INTENT, "primary")
        .default_value(groups::SIZE, "md")
        .default_value(groups::ROUNDED, "normal")
        .default_value(groups::CONTENT, "text")
        .build()
}

/// A validated table able to style buttons.
#[derive(Debug, Clone)]
pub struct ButtonStyles {
    config: VariantConfig,
}

impl ButtonStyles {
    /// Styles backed by [`button_table`].
    pub fn new() -> ConfigResult<Self> {
        Self::from_config(button_table()?)
    }

    /// Styles backed by a custom table, which must declare every button group.
    pub fn from_config(config: VariantConfig) -> ConfigResult<Self> {
        config.require_groups(&groups::ALL)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    pub fn button_class(&self, props: &ButtonProps) -> ConfigResult<String> {
        self.config.resolve(&props.selection())
    }

    pub fn icon_button_class(&self, props: &IconButtonProps) -> ConfigResult<String> {
        self.config.resolve(&props.selection())
    }
}
