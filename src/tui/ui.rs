use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::export::{format_subject_percent, format_weighted_percent, ExportState};
use crate::scoring::WEIGHT;
use crate::tui::app::{App, InputMode};
use crate::tui::theme::ThemeColors;

pub fn draw(frame: &mut Frame, app: &App) {
    let theme = ThemeColors::default();
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 12 || area.width < 40 {
        let msg = Paragraph::new(app.translator().t("terminal_too_small"))
            .alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    let form_height = app.inputs.len() as u16 + 4; // fields + name + borders + spacer
    let chunks = Layout::vertical([
        Constraint::Length(1),           // Title bar
        Constraint::Length(form_height), // Score form
        Constraint::Length(4),           // Result
        Constraint::Fill(1),
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_title(frame, chunks[0], app, &theme);
    render_form(frame, chunks[1], app, &theme);
    render_result(frame, chunks[2], app, &theme);
    render_status_bar(frame, chunks[4], app, &theme);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, app, &theme);
    }
}

fn text_alignment(app: &App) -> Alignment {
    if app.locale.is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let t = app.translator();
    let title = t.t("title");
    let right = format!("{}: {}", t.t("language"), app.locale);
    let padding_len = (area.width as usize)
        .saturating_sub(title.chars().count() + right.chars().count());

    let line = Line::from(vec![
        Span::styled(title, Style::default().fg(theme.title_color).bold()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right, Style::default().fg(theme.muted)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_form(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let t = app.translator();
    let block = Block::bordered().title(format!(" {} ", t.t("enter_scores")));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_width = app
        .model
        .subjects()
        .iter()
        .map(|s| t.subject_name(&s.name).chars().count())
        .chain(std::iter::once(t.t("name").chars().count()))
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = app
        .model
        .subjects()
        .iter()
        .zip(&app.inputs)
        .enumerate()
        .map(|(idx, (subject, input))| {
            let label = t.subject_name(&subject.name);
            let shown = if input.is_empty() { "0" } else { input.as_str() };
            let value = format!("{:>3}", shown);
            let value_style = if idx == app.selected {
                theme.field_selected
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}  ", label, width = label_width),
                    theme.label_style,
                ),
                Span::styled(value, value_style),
                Span::styled(
                    format!(" / {}", subject.max_marks),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(
                    format!("  {}", format_subject_percent(subject.percent())),
                    Style::default().fg(theme.muted),
                ),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    let name_style = if app.name_field_selected() {
        theme.field_selected
    } else {
        Style::default()
    };
    let cursor = if app.name_field_selected() { "|" } else { "" };
    lines.push(Line::from(vec![
        Span::styled(
            format!("{:<width$}  ", t.t("name"), width = label_width),
            theme.label_style,
        ),
        Span::styled(format!("{}{}", app.student_name, cursor), name_style),
    ]));

    frame.render_widget(Paragraph::new(lines).alignment(text_alignment(app)), inner);
}

fn render_result(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let t = app.translator();
    let block = Block::bordered().title(format!(" {} ", t.t("result")));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(ref calculated) = app.calculated else {
        let hint = Paragraph::new(format!("Enter: {}", t.t("calculate")))
            .style(Style::default().fg(theme.muted))
            .alignment(Alignment::Center);
        frame.render_widget(hint, inner);
        return;
    };

    let result = &calculated.result;
    let color = theme.score_color(result.percentage, WEIGHT);
    let lines = vec![
        Line::from(vec![
            Span::raw(format!("{}: ", t.t("total_score"))),
            Span::styled(
                format!("{}/{}", result.total_score, result.max_total),
                Style::default().bold(),
            ),
        ]),
        Line::from(vec![
            Span::raw(format!("{}: ", t.t("first_year_percentage"))),
            Span::styled(
                format_weighted_percent(result.percentage),
                Style::default().fg(color).bold(),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(text_alignment(app)), inner);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        let (prefix, color) = match app.export_state {
            ExportState::Generating => {
                let spinner_chars = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
                (
                    format!("{} ", spinner_chars[app.spinner_frame % spinner_chars.len()]),
                    Color::White,
                )
            }
            ExportState::Succeeded => (String::new(), theme.flash_success),
            ExportState::Failed => (String::new(), theme.flash_error),
            ExportState::Idle => (String::new(), Color::White),
        };
        Line::from(Span::styled(format!("{}{}", prefix, msg), Style::default().fg(color)))
    } else {
        let t = app.translator();
        let hints = [
            ("Enter", t.t("calculate")),
            ("^R", t.t("reset")),
            ("^E", t.t("download_result")),
            ("^L", t.t("language")),
            ("F1", t.t("help")),
            ("Esc", t.t("quit")),
        ];

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme.status_key_color)));
            spans.push(Span::raw(format!(":{}", label)));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme.status_bar_bg)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

fn render_help_popup(frame: &mut Frame, app: &App, theme: &ThemeColors) {
    let popup_area = centered_rect_fixed(50, 13, frame.area());
    frame.render_widget(Clear, popup_area);

    let t = app.translator();
    let block = Block::bordered()
        .title(format!(" {} ", t.t("help_title")))
        .border_style(Style::default().fg(theme.popup_border));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(Color::Cyan).bold();
    let entries = [
        ("Tab / Down    ", t.t("next_field")),
        ("S-Tab / Up    ", t.t("previous_field")),
        ("0-9 / Bksp    ", t.t("edit_score")),
        ("Enter         ", t.t("calculate")),
        ("Ctrl-r        ", t.t("reset")),
        ("Ctrl-e        ", t.t("download_result")),
        ("Ctrl-l        ", "English / العربية"),
        ("F1            ", t.t("toggle_help")),
        ("Esc / Ctrl-c  ", t.t("quit")),
    ];

    let mut help_lines: Vec<Line> = entries
        .into_iter()
        .map(|(key, label)| Line::from(vec![Span::styled(key, key_style), Span::raw(label)]))
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        t.t("close_help"),
        Style::default().fg(theme.muted),
    )));

    frame.render_widget(
        Paragraph::new(help_lines).alignment(text_alignment(app)),
        inner,
    );
}
