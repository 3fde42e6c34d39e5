use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::i18n::Locale;
use crate::scoring::SubjectConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Locale used when no saved preference exists
    #[serde(default)]
    pub locale: Option<Locale>,

    /// Directory exported certificates are written to (default: current directory)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Overrides the built-in subject catalog
    #[serde(default)]
    pub subjects: Option<Vec<SubjectConfig>>,

    #[serde(default)]
    pub pdf: Option<PdfConfig>,
}

/// PDF rendering options.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PdfConfig {
    /// Directory holding the TTF files (searched before the system font directories)
    #[serde(default)]
    pub font_dir: Option<PathBuf>,

    /// Font family file prefix, e.g. "DejaVuSans" for DejaVuSans.ttf or
    /// "LiberationSans" for LiberationSans-Regular.ttf
    #[serde(default)]
    pub font_family: Option<String>,

    /// Print English labels in the PDF even when the active locale is Arabic.
    /// On by default: the PDF backend cannot join Arabic letters or lay out
    /// right-to-left text. The text fallback always uses the active locale.
    #[serde(default = "default_latin_labels")]
    pub latin_labels: bool,
}

fn default_latin_labels() -> bool {
    true
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            font_dir: None,
            font_family: None,
            latin_labels: default_latin_labels(),
        }
    }
}
