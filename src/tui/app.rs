use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Utc;

use crate::export::{ExportOutcome, ExportState};
use crate::i18n::{Locale, Translator};
use crate::scoring::{ScoreModel, ScoreResult, Subject};

/// How long a status message stays on screen.
pub const FLASH_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Help,
}

/// A result together with the scores it was calculated from.
/// Exports use this snapshot, so edits after Calculate never leak into a certificate.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculated {
    pub subjects: Vec<Subject>,
    pub result: ScoreResult,
}

/// Everything an export task needs, detached from the app.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub subjects: Vec<Subject>,
    pub result: ScoreResult,
    pub locale: Locale,
    pub student_name: String,
}

pub struct App {
    pub model: ScoreModel,
    /// Text shown in each subject field, parallel to `model.subjects()`
    pub inputs: Vec<String>,
    pub student_name: String,
    /// Index of the focused field; `inputs.len()` is the name field
    pub selected: usize,
    pub calculated: Option<Calculated>,
    pub locale: Locale,
    pub preferences_path: Option<PathBuf>,
    pub export_state: ExportState,
    pub flash_message: Option<(String, Instant)>,
    pub input_mode: InputMode,
    pub should_quit: bool,
    pub spinner_frame: usize,
}

impl App {
    pub fn new(model: ScoreModel, locale: Locale, preferences_path: Option<PathBuf>) -> Self {
        let inputs = vec![String::new(); model.subjects().len()];
        Self {
            model,
            inputs,
            student_name: String::new(),
            selected: 0,
            calculated: None,
            locale,
            preferences_path,
            export_state: ExportState::Idle,
            flash_message: None,
            input_mode: InputMode::Normal,
            should_quit: false,
            spinner_frame: 0,
        }
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.locale)
    }

    fn field_count(&self) -> usize {
        self.inputs.len() + 1
    }

    pub fn name_field_selected(&self) -> bool {
        self.selected == self.inputs.len()
    }

    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % self.field_count();
    }

    pub fn previous_field(&mut self) {
        self.selected = if self.selected == 0 {
            self.field_count() - 1
        } else {
            self.selected - 1
        };
    }

    /// Type a character into the focused field.
    /// Score fields accept digits only and are clamped on every keystroke.
    pub fn input_char(&mut self, c: char) {
        if self.name_field_selected() {
            if !c.is_control() {
                self.student_name.push(c);
            }
            return;
        }
        if c.is_ascii_digit() {
            let idx = self.selected;
            self.inputs[idx].push(c);
            self.store_input(idx);
        }
    }

    pub fn backspace(&mut self) {
        if self.name_field_selected() {
            self.student_name.pop();
            return;
        }
        let idx = self.selected;
        self.inputs[idx].pop();
        self.store_input(idx);
    }

    fn store_input(&mut self, idx: usize) {
        let name = self.model.subjects()[idx].name.clone();
        match self.model.set_score(&name, &self.inputs[idx]) {
            Ok(stored) => {
                if !self.inputs[idx].is_empty() {
                    self.inputs[idx] = stored.to_string();
                }
            }
            Err(e) => log::error!("Score entry rejected: {}", e),
        }
    }

    pub fn calculate(&mut self) {
        match self.model.calculate() {
            Ok(result) => {
                self.calculated = Some(Calculated {
                    subjects: self.model.subjects().to_vec(),
                    result,
                });
            }
            Err(e) => self.show_flash(e.to_string()),
        }
    }

    pub fn reset(&mut self) {
        self.model.reset();
        for input in &mut self.inputs {
            input.clear();
        }
        self.calculated = None;
        let msg = self.translator().t("reset_done").to_string();
        self.show_flash(msg);
    }

    /// Switch language and persist the choice.
    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggle();
        let mut msg = self.translator().t("language_switched").to_string();
        if let Some(ref path) = self.preferences_path {
            if let Err(e) = crate::preferences::save_preference(path, self.locale, Utc::now()) {
                log::warn!("Failed to save locale preference: {:#}", e);
                msg = format!("{} ({})", msg, e);
            }
        }
        self.show_flash(msg);
    }

    pub fn can_export(&self) -> bool {
        self.calculated.is_some() && !self.export_state.is_generating()
    }

    /// Move to `Generating` and hand back the snapshot to export.
    /// Returns None while an export is running or before anything was calculated.
    pub fn begin_export(&mut self) -> Option<ExportRequest> {
        let Some(calculated) = self.calculated.clone() else {
            let msg = self.translator().t("export_needs_result").to_string();
            self.show_flash(msg);
            return None;
        };
        if !self.export_state.start() {
            return None;
        }
        let msg = self.translator().t("export_in_progress").to_string();
        self.show_flash(msg);
        Some(ExportRequest {
            subjects: calculated.subjects,
            result: calculated.result,
            locale: self.locale,
            student_name: self.student_name.clone(),
        })
    }

    pub fn finish_export(&mut self, outcome: &ExportOutcome) {
        self.export_state.finish(outcome);
        let msg = outcome.message(&self.translator());
        self.show_flash(msg);
    }

    pub fn fail_export(&mut self) {
        let outcome = ExportOutcome::Failed {
            message: self.translator().t("export_failed").to_string(),
        };
        self.finish_export(&outcome);
    }

    /// Clear the status line (and a finished export's state) after `FLASH_DURATION`.
    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed() >= FLASH_DURATION && !self.export_state.is_generating() {
                self.flash_message = None;
                self.export_state.clear();
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    pub fn advance_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
