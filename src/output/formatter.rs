use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::export::{format_subject_percent, format_weighted_percent};
use crate::i18n::Translator;
use crate::scoring::{ScoreResult, Subject};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.chars().count());
    format!("{}{}", s, " ".repeat(fill))
}

fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.chars().count());
    format!("{}{}", " ".repeat(fill), s)
}

/// Format the entered scores as a table: subject, score/max, per-subject percent
pub fn format_subject_table(subjects: &[Subject], translator: &Translator, use_colors: bool) -> String {
    let names: Vec<&str> = subjects
        .iter()
        .map(|s| translator.subject_name(&s.name))
        .collect();
    let name_width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);

    subjects
        .iter()
        .zip(names)
        .map(|(subject, name)| {
            let marks = format!("{}/{}", subject.score, subject.max_marks);
            let percent = format_subject_percent(subject.percent());
            if use_colors {
                format!(
                    "{}  {}  {}",
                    pad(name, name_width).bold(),
                    pad_left(&marks, 7),
                    pad_left(&percent, 6).dimmed()
                )
            } else {
                format!(
                    "{}  {}  {}",
                    pad(name, name_width),
                    pad_left(&marks, 7),
                    pad_left(&percent, 6)
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the total and weighted percentage lines
pub fn format_result(result: &ScoreResult, translator: &Translator, use_colors: bool) -> String {
    let total = format!("{}/{}", result.total_score, result.max_total);
    let percent = format_weighted_percent(result.percentage);

    if use_colors {
        format!(
            "{}: {}\n{}: {}",
            translator.t("total_score"),
            total.cyan().bold(),
            translator.t("first_year_percentage"),
            percent.green().bold()
        )
    } else {
        format!(
            "{}: {}\n{}: {}",
            translator.t("total_score"),
            total,
            translator.t("first_year_percentage"),
            percent
        )
    }
}

/// Format the catalog (subject, max marks) for `tawjihi subjects`
pub fn format_catalog(subjects: &[Subject], translator: &Translator) -> String {
    subjects
        .iter()
        .map(|s| format!("{}\t{}\t{}", s.name, translator.subject_name(&s.name), s.max_marks))
        .collect::<Vec<_>>()
        .join("\n")
}
