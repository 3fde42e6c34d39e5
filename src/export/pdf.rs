// Certificate PDF generation
// genpdf needs real TTF files for glyph metrics; nothing is embedded in the binary.
use genpdf::elements::{Break, FrameCellDecorator, Paragraph, TableLayout};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style::Style;
use genpdf::{Alignment, Element};
use log::debug;
use std::path::{Path, PathBuf};

use super::layout::{CertificateLayout, LayoutRow};
use super::DocumentRenderer;
use crate::config::PdfConfig;
use crate::error::CalcError;

const SYSTEM_FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/TTF",
    "/System/Library/Fonts/Supplemental",
    "/Library/Fonts",
    "C:\\Windows\\Fonts",
];

// DejaVuSans carries Arabic glyphs, so it is tried first
const DEFAULT_FAMILIES: &[&str] = &["DejaVuSans", "LiberationSans", "Arial"];

#[derive(Debug, Clone)]
pub struct PdfRenderer {
    font_dirs: Vec<PathBuf>,
    families: Vec<String>,
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::from_config(None)
    }
}

impl PdfRenderer {
    /// Search the configured font directory/family first, then the system defaults.
    pub fn from_config(config: Option<&PdfConfig>) -> Self {
        let mut font_dirs: Vec<PathBuf> = Vec::new();
        let mut families: Vec<String> = Vec::new();

        if let Some(cfg) = config {
            if let Some(ref dir) = cfg.font_dir {
                font_dirs.push(dir.clone());
            }
            if let Some(ref family) = cfg.font_family {
                families.push(family.clone());
            }
        }
        font_dirs.extend(SYSTEM_FONT_DIRS.iter().map(PathBuf::from));
        families.extend(DEFAULT_FAMILIES.iter().map(|f| f.to_string()));

        Self { font_dirs, families }
    }

    /// Restrict the search to exactly these directories and families.
    pub fn with_fonts(font_dirs: Vec<PathBuf>, families: Vec<String>) -> Self {
        Self { font_dirs, families }
    }

    fn load_fonts(&self) -> Result<FontFamily<FontData>, CalcError> {
        self.font_dirs
            .iter()
            .filter(|dir| dir.is_dir())
            .find_map(|dir| self.families.iter().find_map(|name| load_family(dir, name)))
            .ok_or_else(|| {
                CalcError::export(format!(
                    "no font family {:?} found (set pdf.font_dir and pdf.font_family)",
                    self.families
                ))
            })
    }
}

/// Load `name` from `dir`, accepting both file naming schemes in use:
/// `Name-Regular.ttf`/`-Italic` (Liberation, Arial) and `Name.ttf`/`-Oblique` (DejaVu).
/// Missing styled faces fall back to the regular or bold face.
fn load_family(dir: &Path, name: &str) -> Option<FontFamily<FontData>> {
    if let Ok(family) = genpdf::fonts::from_files(dir, name, None) {
        return Some(family);
    }

    let load = |suffix: &str| {
        let path = dir.join(format!("{}{}.ttf", name, suffix));
        FontData::load(&path, None).ok()
    };
    let regular = load("")?;
    let bold = load("-Bold").unwrap_or_else(|| regular.clone());
    let italic = load("-Oblique")
        .or_else(|| load("-Italic"))
        .unwrap_or_else(|| regular.clone());
    let bold_italic = load("-BoldOblique")
        .or_else(|| load("-BoldItalic"))
        .unwrap_or_else(|| bold.clone());
    debug!("Loaded font family {} from {}", name, dir.display());

    Some(FontFamily {
        regular,
        bold,
        italic,
        bold_italic,
    })
}

fn cell(text: &str, style: Style, alignment: Alignment) -> impl Element {
    Paragraph::new(text.to_string())
        .aligned(alignment)
        .styled(style)
        .padded(1)
}

fn push_row(
    table: &mut TableLayout,
    cells: [&str; 4],
    style: Style,
    rtl: bool,
) -> Result<(), CalcError> {
    let label_align = if rtl { Alignment::Right } else { Alignment::Left };
    table
        .row()
        .element(cell(cells[0], style, label_align))
        .element(cell(cells[1], style, Alignment::Center))
        .element(cell(cells[2], style, Alignment::Center))
        .element(cell(cells[3], style, Alignment::Center))
        .push()
        .map_err(|e| CalcError::export(e.to_string()))
}

fn row_cells(row: &LayoutRow) -> [&str; 4] {
    [&row.label, &row.score, &row.max, &row.percent]
}

impl DocumentRenderer for PdfRenderer {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, layout: &CertificateLayout) -> Result<Vec<u8>, CalcError> {
        let font_family = self.load_fonts()?;

        let mut doc = genpdf::Document::new(font_family);
        doc.set_title(layout.title.clone());

        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(15);
        doc.set_page_decorator(decorator);

        let text_align = if layout.rtl { Alignment::Right } else { Alignment::Left };

        doc.push(
            Paragraph::new(layout.title.clone())
                .aligned(Alignment::Center)
                .styled(Style::new().bold().with_font_size(24)),
        );
        doc.push(Break::new(1.5));
        doc.push(
            Paragraph::new(format!("{}: {}", layout.student_label, layout.student_name))
                .aligned(text_align)
                .styled(Style::new().with_font_size(12)),
        );
        doc.push(Break::new(1.0));

        let mut table = TableLayout::new(vec![3, 1, 1, 1]);
        table.set_cell_decorator(FrameCellDecorator::new(true, true, false));

        let header_style = Style::new().bold().with_font_size(11);
        let body_style = Style::new().with_font_size(11);
        let headers = [
            layout.headers[0].as_str(),
            layout.headers[1].as_str(),
            layout.headers[2].as_str(),
            layout.headers[3].as_str(),
        ];
        push_row(&mut table, headers, header_style, layout.rtl)?;
        for row in &layout.rows {
            push_row(&mut table, row_cells(row), body_style, layout.rtl)?;
        }
        push_row(&mut table, row_cells(&layout.total), header_style, layout.rtl)?;
        doc.push(table);

        doc.push(Break::new(2.0));
        doc.push(
            Paragraph::new(layout.headline.clone())
                .aligned(Alignment::Center)
                .styled(Style::new().bold().with_font_size(16)),
        );
        doc.push(Break::new(4.0));
        doc.push(
            Paragraph::new(layout.footer.clone())
                .aligned(Alignment::Center)
                .styled(Style::new().with_font_size(10)),
        );

        let mut bytes = Vec::new();
        doc.render(&mut bytes)
            .map_err(|e| CalcError::export(e.to_string()))?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Locale, Translator};
    use crate::scoring::ScoreModel;

    #[test]
    fn test_search_order_puts_config_first() {
        let cfg = PdfConfig {
            font_dir: Some(PathBuf::from("/opt/fonts")),
            font_family: Some("Amiri".to_string()),
            latin_labels: false,
        };
        let renderer = PdfRenderer::from_config(Some(&cfg));
        assert_eq!(renderer.font_dirs[0], PathBuf::from("/opt/fonts"));
        assert_eq!(renderer.families[0], "Amiri");
        assert!(renderer.families.contains(&"DejaVuSans".to_string()));
    }

    fn sample_layout(locale: Locale) -> CertificateLayout {
        let mut model = ScoreModel::default();
        model.set_score("english", "80").unwrap();
        model.set_score("history", "30").unwrap();
        let result = model.calculate().unwrap();
        CertificateLayout::build(model.subjects(), &result, &Translator::new(locale), "Sara")
    }

    #[test]
    fn test_missing_fonts_is_export_failure() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = PdfRenderer::with_fonts(
            vec![dir.path().to_path_buf()],
            vec!["NoSuchFont".to_string()],
        );

        let err = renderer.render(&sample_layout(Locale::En)).unwrap_err();
        assert!(matches!(err, CalcError::ExportFailure(_)));
        assert!(err.to_string().contains("NoSuchFont"));
        assert_eq!(renderer.extension(), "pdf");
    }

    #[test]
    fn test_dejavu_file_names_load() {
        let dir = PathBuf::from("/usr/share/fonts/truetype/dejavu");
        if !dir.join("DejaVuSans.ttf").is_file() {
            // fonts-dejavu not installed here
            return;
        }
        let renderer = PdfRenderer::with_fonts(vec![dir], vec!["DejaVuSans".to_string()]);
        assert!(renderer.load_fonts().is_ok());

        let bytes = renderer.render(&sample_layout(Locale::Ar)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_renders_pdf_with_system_fonts() {
        let renderer = PdfRenderer::default();
        if renderer.load_fonts().is_err() {
            // No usable font on this host; the exporter falls back to text
            return;
        }

        let bytes = renderer.render(&sample_layout(Locale::En)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1000);
    }
}
