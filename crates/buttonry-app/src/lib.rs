//! Buttonry Application
//!
//! The gallery shell: command line, HTML export and the native window.

mod app;
pub mod cli;
pub mod export;
mod ui;

pub use app::{App, AppConfig};
pub use cli::Cli;
pub use ui::{render_ui, UiAction, UiState};

use buttonry_core::{ConfigError, Gallery};
use thiserror::Error;

/// Errors that can end a gallery run.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("variant table: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create render surface: {0}")]
    Surface(String),
}

pub type GalleryResult<T> = Result<T, GalleryError>;

/// Run the gallery as the command line asks.
pub fn run(cli: Cli) -> GalleryResult<()> {
    let styles = cli.load_styles()?;

    if cli.dump_config {
        println!("{}", styles.config().to_json_pretty()?);
        return Ok(());
    }

    let gallery = Gallery::standard(&styles)?;
    log::info!(
        "Gallery ready: {} sections, {} buttons",
        gallery.sections.len(),
        gallery.item_count()
    );

    if let Some(path) = &cli.export_html {
        return export::export_html(&gallery, "Buttons", path);
    }

    App::new(AppConfig::default(), &styles, gallery)?.run()
}
