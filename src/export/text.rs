use super::layout::{CertificateLayout, LayoutRow};
use super::DocumentRenderer;
use crate::error::CalcError;

/// Plain-text certificate, used when PDF generation is unavailable.
/// Same fields in the same order as the PDF.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl DocumentRenderer for TextRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, layout: &CertificateLayout) -> Result<Vec<u8>, CalcError> {
        Ok(render_text(layout).into_bytes())
    }
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad(s: &str, w: usize) -> String {
    let fill = w.saturating_sub(width(s));
    format!("{}{}", s, " ".repeat(fill))
}

fn columns(row: &LayoutRow) -> [&str; 4] {
    [&row.label, &row.score, &row.max, &row.percent]
}

pub fn render_text(layout: &CertificateLayout) -> String {
    let header_refs: [&str; 4] = [
        &layout.headers[0],
        &layout.headers[1],
        &layout.headers[2],
        &layout.headers[3],
    ];

    let mut widths = header_refs.map(width);
    for row in layout.rows.iter().chain(std::iter::once(&layout.total)) {
        for (w, cell) in widths.iter_mut().zip(columns(row)) {
            *w = (*w).max(width(cell));
        }
    }

    let line = |cells: [&str; 4]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| pad(cell, w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };
    let rule = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("  ");

    let mut out = Vec::new();
    out.push(layout.title.clone());
    out.push("=".repeat(width(&layout.title)));
    out.push(format!("{}: {}", layout.student_label, layout.student_name).trim_end().to_string());
    out.push(String::new());
    out.push(line(header_refs));
    out.push(rule.clone());
    for row in &layout.rows {
        out.push(line(columns(row)));
    }
    out.push(rule);
    out.push(line(columns(&layout.total)));
    out.push(String::new());
    out.push(layout.headline.clone());
    out.push(String::new());
    out.push(layout.footer.clone());

    let mut text = out.join("\n");
    text.push('\n');
    text
}
