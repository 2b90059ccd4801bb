//! HTML export of the gallery.

use std::path::Path;

use buttonry_core::{markup, Gallery};

use crate::GalleryResult;

/// Write the gallery page to `path`.
pub fn export_html(gallery: &Gallery, title: &str, path: &Path) -> GalleryResult<()> {
    std::fs::write(path, markup::render_page(gallery, title))?;
    log::info!("Exported {} buttons to: {:?}", gallery.item_count(), path);
    Ok(())
}

/// Ask for a destination with a native dialog, then export.
///
/// Returns the chosen path, or `None` if the dialog was cancelled.
#[cfg(feature = "native")]
pub fn export_html_dialog(gallery: &Gallery, title: &str) -> GalleryResult<Option<std::path::PathBuf>> {
    let dialog = rfd::FileDialog::new()
        .set_title("Export HTML")
        .set_file_name("buttons.html")
        .add_filter("HTML page", &["html"]);

    match dialog.save_file() {
        Some(path) => {
            export_html(gallery, title, &path)?;
            Ok(Some(path))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buttonry_core::ButtonStyles;

    #[test]
    fn test_export_writes_page() {
        let gallery = Gallery::standard(&ButtonStyles::new().unwrap()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("buttons.html");
        export_html(&gallery, "Buttons", &path).unwrap();
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("<title>Buttons</title>"));
        assert_eq!(html.matches("<button ").count(), gallery.item_count());
    }

    #[test]
    fn test_export_into_missing_dir_fails() {
        let gallery = Gallery::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("buttons.html");
        assert!(export_html(&gallery, "Buttons", &path).is_err());
    }
}
