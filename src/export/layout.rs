use crate::i18n::Translator;
use crate::scoring::{ScoreResult, Subject};

/// One table line of the certificate, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRow {
    pub label: String,
    pub score: String,
    pub max: String,
    pub percent: String,
}

/// Every string the certificate prints, in print order.
///
/// Renderers only arrange these strings; all number formatting and
/// translation happens here so every backend prints the same values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateLayout {
    pub rtl: bool,
    pub title: String,
    pub student_label: String,
    pub student_name: String,
    pub headers: [String; 4],
    pub rows: Vec<LayoutRow>,
    pub total: LayoutRow,
    pub headline: String,
    pub footer: String,
}

/// Per-subject percentages are shown with one decimal.
pub fn format_subject_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// The weighted headline percentage is shown with two decimals.
pub fn format_weighted_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

impl CertificateLayout {
    pub fn build(
        subjects: &[Subject],
        result: &ScoreResult,
        translator: &Translator,
        student_name: &str,
    ) -> Self {
        let rows = subjects
            .iter()
            .map(|s| LayoutRow {
                label: translator.subject_name(&s.name).to_string(),
                score: s.score.to_string(),
                max: s.max_marks.to_string(),
                percent: format_subject_percent(s.percent()),
            })
            .collect();

        let total_percent = if result.max_total == 0 {
            0.0
        } else {
            f64::from(result.total_score) / f64::from(result.max_total) * 100.0
        };

        Self {
            rtl: translator.locale().is_rtl(),
            title: translator.t("certificate_title").to_string(),
            student_label: translator.t("student").to_string(),
            student_name: student_name.trim().to_string(),
            headers: [
                translator.t("subject").to_string(),
                translator.t("your_score").to_string(),
                translator.t("max_marks").to_string(),
                translator.t("subject_percentage").to_string(),
            ],
            rows,
            total: LayoutRow {
                label: translator.t("total_score").to_string(),
                score: result.total_score.to_string(),
                max: result.max_total.to_string(),
                percent: format_subject_percent(total_percent),
            },
            headline: format!(
                "{}: {}",
                translator.t("first_year_percentage"),
                format_weighted_percent(result.percentage)
            ),
            footer: translator.t("certificate_footer").to_string(),
        }
    }
}
