pub mod browser;
pub mod config;
pub mod error;
pub mod export;
pub mod i18n;
pub mod logging;
pub mod output;
pub mod preferences;
pub mod scoring;
pub mod stderr_buffer;
pub mod tui;

pub use error::CalcError;
pub use export::{CertificateExporter, ExportOutcome};
pub use i18n::{Locale, Translator};
pub use scoring::{ScoreModel, ScoreResult, Subject};
