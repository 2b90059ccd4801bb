//! Buttonry Core Library
//!
//! Platform-agnostic variant resolution and button model for the Buttonry gallery.

pub mod button;
pub mod env;
pub mod gallery;
pub mod icons;
pub mod markup;
pub mod variants;

pub use button::{
    button_table, ButtonProps, ButtonStyles, Content, IconButtonProps, IconSlot, Intent, Rounded,
    Size,
};
pub use env::{check_env, BuildMode};
pub use gallery::{Gallery, GalleryItem, GalleryRow, GallerySection, ItemKind};
pub use icons::Icon;
pub use variants::{
    resolve, CompoundRule, Condition, ConfigError, ConfigResult, ResolvedSelection,
    SelectionRequest, VariantConfig, VariantConfigBuilder,
};
