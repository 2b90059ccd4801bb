//! Static HTML rendering of the gallery.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::gallery::{Gallery, GalleryItem, GallerySection, ItemKind};
use crate::icons::Icon;

/// Stylesheet used by exported pages (Tailwind Play CDN).
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

fn icon_svg(out: &mut String, icon: Icon, class: &str) {
    let _ = write!(
        out,
        r#"<svg class="{}" viewBox="0 0 20 20" fill="currentColor" aria-hidden="true"><path fill-rule="evenodd" clip-rule="evenodd" d="{}"/></svg>"#,
        encode_double_quoted_attribute(class),
        icon.svg_path()
    );
}

/// Render one control as a `<button>` element.
pub fn render_item(item: &GalleryItem) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<button type="button" class="{}">"#,
        encode_double_quoted_attribute(&item.class)
    );
    match &item.kind {
        ItemKind::Button { label, icon } => {
            if let Some(leading) = icon.leading() {
                icon_svg(&mut out, leading, "-ml-0.5 h-5 w-5");
            }
            out.push_str(&encode_text(label));
            if let Some(trailing) = icon.trailing() {
                icon_svg(&mut out, trailing, "-mr-0.5 h-5 w-5");
            }
        }
        ItemKind::IconButton { icon, hidden_label } => {
            if let Some(label) = hidden_label {
                let _ = write!(out, r#"<p class="sr-only">{}</p>"#, encode_text(label));
            }
            icon_svg(&mut out, *icon, "h-5 w-5");
        }
    }
    out.push_str("</button>");
    out
}

/// Render the gallery as a standalone HTML document.
pub fn render_page(gallery: &Gallery, title: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, r#"<html lang="en">"#);
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, r#"<meta charset="utf-8">"#);
    let _ = writeln!(out, "<title>{}</title>", encode_text(title));
    let _ = writeln!(out, r#"<script src="{TAILWIND_CDN}"></script>"#);
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, r#"<body class="py-8">"#);
    let _ = writeln!(out, r#"<div class="w-fit space-y-8 px-8">"#);

    for section in &gallery.sections {
        match section {
            GallerySection::Row(row) => {
                let _ = writeln!(
                    out,
                    r#"<div class="space-x-8" title="{}">"#,
                    encode_double_quoted_attribute(&row.title)
                );
                for item in &row.items {
                    let _ = writeln!(out, "{}", render_item(item));
                }
                let _ = writeln!(out, "</div>");
            }
            GallerySection::Divider => {
                let _ = writeln!(
                    out,
                    r#"<hr class="my-8 h-px border-0 bg-gray-200 dark:bg-gray-700">"#
                );
            }
        }
    }

    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::{ButtonProps, ButtonStyles, IconButtonProps};

    fn styles() -> ButtonStyles {
        ButtonStyles::new().unwrap()
    }

    #[test]
    fn test_leading_icon_before_label() {
        let props = ButtonProps::new("Save").leading_icon(Icon::CheckCircle);
        let html = render_item(&GalleryItem::button(&styles(), &props).unwrap());
        let svg = html.find("<svg").unwrap();
        let label = html.find("Save").unwrap();
        assert!(svg < label);
        assert!(html.contains(r#"class="-ml-0.5 h-5 w-5""#));
    }

    #[test]
    fn test_trailing_icon_after_label() {
        let props = ButtonProps::new("Next").trailing_icon(Icon::CheckCircle);
        let html = render_item(&GalleryItem::button(&styles(), &props).unwrap());
        assert!(html.find("Next").unwrap() < html.find("<svg").unwrap());
        assert!(html.contains("-mr-0.5"));
    }

    #[test]
    fn test_icon_button_hidden_label() {
        let props = IconButtonProps::new(Icon::Plus, "Add <item>");
        let html = render_item(&GalleryItem::icon_button(&styles(), &props).unwrap());
        assert!(html.contains(r#"<p class="sr-only">Add &lt;item&gt;</p>"#));
        assert!(html.contains(r#"aria-hidden="true""#));
    }

    #[test]
    fn test_class_attribute_escaped() {
        let props = ButtonProps::new("x").class(r#"a" onclick="b"#);
        let html = render_item(&GalleryItem::button(&styles(), &props).unwrap());
        assert!(!html.contains(r#"" onclick=""#));
    }

    #[test]
    fn test_page_contains_every_item() {
        let gallery = Gallery::standard(&styles()).unwrap();
        let page = render_page(&gallery, "Buttons");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert_eq!(page.matches("<button ").count(), gallery.item_count());
        assert_eq!(page.matches("<hr ").count(), 1);
    }
}
