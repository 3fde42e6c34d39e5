//! Certificate export.
//!
//! A certificate is laid out once (`CertificateLayout`), rendered by a
//! primary backend (PDF) and, if that fails, by a fallback backend (plain
//! text). The outcome is reported exactly once; nothing is retried and no
//! state survives between calls.

pub mod filename;
pub mod layout;
pub mod pdf;
pub mod state;
pub mod text;

pub use layout::{format_subject_percent, format_weighted_percent, CertificateLayout, LayoutRow};
pub use pdf::PdfRenderer;
pub use state::ExportState;
pub use text::TextRenderer;

use atomic_write_file::AtomicWriteFile;
use chrono::Utc;
use log::{debug, error, info, warn};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{Config, PdfConfig};
use crate::error::CalcError;
use crate::i18n::{Locale, Translator};
use crate::scoring::{ScoreResult, Subject};

/// A document backend. Implementations must be deterministic for a given layout.
pub trait DocumentRenderer: Send + Sync {
    /// File extension of the produced artifact, without the dot
    fn extension(&self) -> &'static str;

    fn render(&self, layout: &CertificateLayout) -> Result<Vec<u8>, CalcError>;
}

/// A certificate written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub path: PathBuf,
    /// True when the primary backend failed and the fallback produced the file
    pub degraded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Succeeded(ExportArtifact),
    /// `message` is already translated into the locale of the export
    Failed { message: String },
}

impl ExportOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExportOutcome::Succeeded(_))
    }

    /// One-line status for the user, in the given locale.
    pub fn message(&self, translator: &Translator) -> String {
        match self {
            ExportOutcome::Succeeded(artifact) => {
                let key = if artifact.degraded {
                    "export_saved_text"
                } else {
                    "export_saved"
                };
                format!("{}: {}", translator.t(key), artifact.path.display())
            }
            ExportOutcome::Failed { message } => message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    /// Render PDF labels in English regardless of the requested locale (default on)
    pub latin_pdf_labels: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            latin_pdf_labels: true,
        }
    }
}

#[derive(Clone)]
pub struct CertificateExporter {
    primary: Arc<dyn DocumentRenderer>,
    fallback: Arc<dyn DocumentRenderer>,
    options: ExportOptions,
}

impl CertificateExporter {
    pub fn new(
        primary: Arc<dyn DocumentRenderer>,
        fallback: Arc<dyn DocumentRenderer>,
        options: ExportOptions,
    ) -> Self {
        Self {
            primary,
            fallback,
            options,
        }
    }

    /// PDF with plain-text fallback, configured from the config file.
    pub fn from_config(config: &Config) -> Self {
        let options = ExportOptions {
            output_dir: config.output_dir(),
            latin_pdf_labels: config
                .pdf
                .as_ref()
                .map_or_else(|| PdfConfig::default().latin_labels, |p| p.latin_labels),
        };
        Self::new(
            Arc::new(PdfRenderer::from_config(config.pdf.as_ref())),
            Arc::new(TextRenderer),
            options,
        )
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Render and save a certificate for `result`.
    ///
    /// `subjects` must be the set `result` was calculated from. Rendering and
    /// the file write run on the blocking pool; failures are reported through
    /// the returned outcome, never as a panic or error.
    pub async fn export(
        &self,
        subjects: &[Subject],
        result: &ScoreResult,
        locale: Locale,
        student_name: &str,
    ) -> ExportOutcome {
        debug_assert_eq!(
            subjects.iter().map(|s| u64::from(s.score)).sum::<u64>(),
            u64::from(result.total_score),
            "subjects do not match the result being exported"
        );

        let translator = Translator::new(locale);
        let layout = CertificateLayout::build(subjects, result, &translator, student_name);
        let primary_layout = if self.options.latin_pdf_labels && locale != Locale::En {
            CertificateLayout::build(subjects, result, &Translator::new(Locale::En), student_name)
        } else {
            layout.clone()
        };

        let stem = filename::file_stem(student_name, Utc::now());
        let primary = Arc::clone(&self.primary);
        let fallback = Arc::clone(&self.fallback);
        let dir = self.options.output_dir.clone();

        debug!("Export started: {} ({})", stem, locale);
        let task = tokio::task::spawn_blocking(move || {
            produce(
                primary.as_ref(),
                fallback.as_ref(),
                &primary_layout,
                &layout,
                &dir,
                &stem,
            )
        });

        match task.await {
            Ok(Ok(artifact)) => {
                info!(
                    "Certificate written to {}{}",
                    artifact.path.display(),
                    if artifact.degraded { " (text fallback)" } else { "" }
                );
                ExportOutcome::Succeeded(artifact)
            }
            Ok(Err(e)) => {
                error!("Certificate export failed: {}", e);
                ExportOutcome::Failed {
                    message: translator.t("export_failed").to_string(),
                }
            }
            Err(e) => {
                error!("Certificate export task failed: {}", e);
                ExportOutcome::Failed {
                    message: translator.t("export_failed").to_string(),
                }
            }
        }
    }
}

fn produce(
    primary: &dyn DocumentRenderer,
    fallback: &dyn DocumentRenderer,
    primary_layout: &CertificateLayout,
    fallback_layout: &CertificateLayout,
    dir: &Path,
    stem: &str,
) -> Result<ExportArtifact, CalcError> {
    match write_artifact(primary, primary_layout, dir, stem) {
        Ok(path) => Ok(ExportArtifact {
            path,
            degraded: false,
        }),
        Err(e) => {
            warn!(
                "{} generation failed ({}), falling back to {}",
                primary.extension(),
                e,
                fallback.extension()
            );
            let path = write_artifact(fallback, fallback_layout, dir, stem)?;
            Ok(ExportArtifact {
                path,
                degraded: true,
            })
        }
    }
}

fn write_artifact(
    renderer: &dyn DocumentRenderer,
    layout: &CertificateLayout,
    dir: &Path,
    stem: &str,
) -> Result<PathBuf, CalcError> {
    let bytes = renderer.render(layout)?;

    fs::create_dir_all(dir).map_err(|e| {
        CalcError::export(format!("cannot create {}: {}", dir.display(), e))
    })?;
    let path = filename::unique_path(dir, stem, renderer.extension());

    let mut file = AtomicWriteFile::open(&path)
        .map_err(|e| CalcError::export(format!("cannot open {}: {}", path.display(), e)))?;
    file.write_all(&bytes)
        .map_err(|e| CalcError::export(format!("cannot write {}: {}", path.display(), e)))?;
    file.commit()
        .map_err(|e| CalcError::export(format!("cannot save {}: {}", path.display(), e)))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoreModel;

    struct FailingRenderer(&'static str);

    impl DocumentRenderer for FailingRenderer {
        fn extension(&self) -> &'static str {
            self.0
        }

        fn render(&self, _layout: &CertificateLayout) -> Result<Vec<u8>, CalcError> {
            Err(CalcError::export("renderer unavailable"))
        }
    }

    /// Emits the title line only, so tests can see which layout it got.
    struct TitleRenderer;

    impl DocumentRenderer for TitleRenderer {
        fn extension(&self) -> &'static str {
            "pdf"
        }

        fn render(&self, layout: &CertificateLayout) -> Result<Vec<u8>, CalcError> {
            Ok(layout.title.clone().into_bytes())
        }
    }

    fn scored_model() -> (ScoreModel, ScoreResult) {
        let mut model = ScoreModel::default();
        model.set_score("english", "80").unwrap();
        model.set_score("arabic", "90").unwrap();
        model.set_score("islamic", "50").unwrap();
        model.set_score("history", "30").unwrap();
        let result = model.calculate().unwrap();
        (model, result)
    }

    fn exporter(
        primary: Arc<dyn DocumentRenderer>,
        fallback: Arc<dyn DocumentRenderer>,
        dir: &Path,
        latin: bool,
    ) -> CertificateExporter {
        CertificateExporter::new(
            primary,
            fallback,
            ExportOptions {
                output_dir: dir.to_path_buf(),
                latin_pdf_labels: latin,
            },
        )
    }

    #[tokio::test]
    async fn test_primary_success() {
        let dir = tempfile::tempdir().unwrap();
        let (model, result) = scored_model();
        let exp = exporter(Arc::new(TitleRenderer), Arc::new(TextRenderer), dir.path(), false);

        let outcome = exp.export(model.subjects(), &result, Locale::En, "Sara").await;
        let ExportOutcome::Succeeded(artifact) = outcome else {
            panic!("expected success");
        };
        assert!(!artifact.degraded);
        assert_eq!(artifact.path.extension().unwrap(), "pdf");
        let name = artifact.path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("tawjihi-result-sara-"));
        assert_eq!(fs::read_to_string(&artifact.path).unwrap(), "Tawjihi Result Certificate");
    }

    #[tokio::test]
    async fn test_falls_back_to_text() {
        let dir = tempfile::tempdir().unwrap();
        let (model, result) = scored_model();
        let exp = exporter(
            Arc::new(FailingRenderer("pdf")),
            Arc::new(TextRenderer),
            dir.path(),
            false,
        );

        let outcome = exp.export(model.subjects(), &result, Locale::Ar, "").await;
        let ExportOutcome::Succeeded(artifact) = outcome.clone() else {
            panic!("expected degraded success");
        };
        assert!(artifact.degraded);
        assert_eq!(artifact.path.extension().unwrap(), "txt");
        let text = fs::read_to_string(&artifact.path).unwrap();
        assert!(text.contains("شهادة نتيجة التوجيهي"));
        assert!(text.contains("25.00%"));

        let msg = outcome.message(&Translator::new(Locale::En));
        assert!(msg.starts_with("PDF unavailable, saved as text"));
    }

    #[tokio::test]
    async fn test_both_backends_fail() {
        let dir = tempfile::tempdir().unwrap();
        let (model, result) = scored_model();
        let exp = exporter(
            Arc::new(FailingRenderer("pdf")),
            Arc::new(FailingRenderer("txt")),
            dir.path(),
            false,
        );

        let outcome = exp.export(model.subjects(), &result, Locale::Ar, "Sara").await;
        assert_eq!(
            outcome,
            ExportOutcome::Failed {
                message: "تعذر إنشاء الشهادة. يرجى المحاولة مرة أخرى.".to_string()
            }
        );
        assert!(!outcome.is_success());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_repeated_exports_have_identical_content() {
        let dir = tempfile::tempdir().unwrap();
        let (model, result) = scored_model();
        let exp = exporter(
            Arc::new(FailingRenderer("pdf")),
            Arc::new(TextRenderer),
            dir.path(),
            false,
        );

        let a = exp.export(model.subjects(), &result, Locale::En, "Sara").await;
        let b = exp.export(model.subjects(), &result, Locale::En, "Sara").await;
        let (ExportOutcome::Succeeded(a), ExportOutcome::Succeeded(b)) = (a, b) else {
            panic!("expected two successes");
        };
        assert_ne!(a.path, b.path);
        assert_eq!(
            fs::read_to_string(&a.path).unwrap(),
            fs::read_to_string(&b.path).unwrap()
        );
    }

    #[tokio::test]
    async fn test_latin_labels_only_affect_primary() {
        let dir = tempfile::tempdir().unwrap();
        let (model, result) = scored_model();
        let exp = exporter(Arc::new(TitleRenderer), Arc::new(TextRenderer), dir.path(), true);

        let outcome = exp.export(model.subjects(), &result, Locale::Ar, "").await;
        let ExportOutcome::Succeeded(artifact) = outcome else {
            panic!("expected success");
        };
        assert_eq!(fs::read_to_string(&artifact.path).unwrap(), "Tawjihi Result Certificate");
    }

    #[tokio::test]
    async fn test_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("certs").join("2026");
        let (model, result) = scored_model();
        let exp = exporter(Arc::new(TitleRenderer), Arc::new(TextRenderer), &nested, false);

        let outcome = exp.export(model.subjects(), &result, Locale::En, "").await;
        assert!(outcome.is_success());
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn test_arabic_pdf_uses_english_labels_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let (model, result) = scored_model();
        let exp = CertificateExporter::new(
            Arc::new(TitleRenderer),
            Arc::new(TextRenderer),
            ExportOptions {
                output_dir: dir.path().to_path_buf(),
                ..Default::default()
            },
        );

        let outcome = exp.export(model.subjects(), &result, Locale::Ar, "").await;
        let ExportOutcome::Succeeded(artifact) = outcome else {
            panic!("expected success");
        };
        assert_eq!(artifact.path.extension().unwrap(), "pdf");
        let title = fs::read_to_string(&artifact.path).unwrap();
        assert_eq!(title, "Tawjihi Result Certificate");
        assert!(!title.contains("شهادة"));
    }

    #[test]
    fn test_from_config_defaults_to_latin_pdf_labels() {
        let exp = CertificateExporter::from_config(&Config::default());
        assert!(exp.options().latin_pdf_labels);

        let config = crate::config::parse_config("pdf:\n  font_family: Amiri\n").unwrap();
        assert!(CertificateExporter::from_config(&config).options().latin_pdf_labels);
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            output_dir: Some(PathBuf::from("/tmp/out")),
            pdf: Some(PdfConfig {
                latin_labels: false,
                ..Default::default()
            }),
            ..Default::default()
        };
        let exp = CertificateExporter::from_config(&config);
        assert_eq!(exp.options().output_dir, PathBuf::from("/tmp/out"));
        assert!(!exp.options().latin_pdf_labels);
    }
}
