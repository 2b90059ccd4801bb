//! Command line interface.

use std::path::PathBuf;

use buttonry_core::{ButtonStyles, VariantConfig};
use clap::Parser;

use crate::GalleryResult;

/// Buttonry: a gallery of Tailwind-styled buttons.
#[derive(Parser, Debug, Default)]
#[command(name = "buttonry", version, about)]
pub struct Cli {
    /// JSON variant table to use instead of the built-in button table.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the gallery as a standalone HTML page and exit.
    #[arg(long, value_name = "FILE")]
    pub export_html: Option<PathBuf>,

    /// Print the active variant table as JSON and exit.
    #[arg(long)]
    pub dump_config: bool,
}

impl Cli {
    /// Load the variant table named on the command line, or the built-in one.
    pub fn load_styles(&self) -> GalleryResult<ButtonStyles> {
        let styles = match &self.config {
            Some(path) => ButtonStyles::from_config(VariantConfig::load(path)?)?,
            None => ButtonStyles::new()?,
        };
        Ok(styles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GalleryError;
    use buttonry_core::ConfigError;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["buttonry", "--export-html", "out.html", "--dump-config"]);
        assert_eq!(cli.export_html, Some(PathBuf::from("out.html")));
        assert!(cli.dump_config);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_load_builtin_styles() {
        let styles = Cli::default().load_styles().unwrap();
        assert!(styles.config().has_group("content-shape"));
    }

    #[test]
    fn test_load_table_missing_button_groups() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "variants": { "intent": { "primary": "bg-teal-700" } } }"#)
            .unwrap();
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let err = cli.load_styles().unwrap_err();
        assert!(matches!(err, GalleryError::Config(ConfigError::MissingGroup(_))));
    }

    #[test]
    fn test_dumped_table_loads_back() {
        let styles = Cli::default().load_styles().unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(styles.config().to_json_pretty().unwrap().as_bytes())
            .unwrap();
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert_eq!(cli.load_styles().unwrap().config(), styles.config());
    }
}
