//! Color palette for the interactive form

use ratatui::prelude::*;

#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Weighted-percentage colors (traffic light pattern)
    pub score_high: Color,
    pub score_mid: Color,
    pub score_low: Color,

    pub title_color: Color,
    pub muted: Color,
    pub field_selected: Style,
    pub label_style: Style,

    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    pub popup_border: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::dark()
    }
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            score_high: Color::Green,
            score_mid: Color::Yellow,
            score_low: Color::Red,
            title_color: Color::Cyan,
            muted: Color::Gray,
            field_selected: Style::new().fg(Color::Black).bg(Color::Cyan),
            label_style: Style::new().bold(),
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Cyan,
        }
    }

    /// Color for a value as a share of its maximum (green is good here)
    pub fn score_color(&self, value: f64, max: f64) -> Color {
        let percentage = if max > 0.0 { value / max * 100.0 } else { 0.0 };

        if percentage >= 70.0 {
            self.score_high
        } else if percentage >= 50.0 {
            self.score_mid
        } else {
            self.score_low
        }
    }
}
