use log::debug;
use serde::Serialize;

use super::config::{default_catalog, SubjectConfig, WEIGHT};
use super::input::{clamp_score, parse_score};
use crate::error::CalcError;

/// A catalog entry plus the score the student entered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub name: String,
    pub max_marks: u32,
    pub score: u32,
}

impl Subject {
    /// Per-subject percentage, `score / max_marks * 100`.
    pub fn percent(&self) -> f64 {
        if self.max_marks == 0 {
            0.0
        } else {
            f64::from(self.score) / f64::from(self.max_marks) * 100.0
        }
    }
}

/// Outcome of one `calculate()` call. Never mutated; recalculation replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub total_score: u32,
    pub max_total: u32,
    /// Weighted percentage in `[0, WEIGHT]`
    pub percentage: f64,
}

/// Holds the subject catalog and the scores entered so far.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreModel {
    subjects: Vec<Subject>,
}

impl Default for ScoreModel {
    fn default() -> Self {
        Self::new(&default_catalog())
    }
}

impl ScoreModel {
    /// Build a model with every score at 0.
    pub fn new(catalog: &[SubjectConfig]) -> Self {
        let subjects = catalog
            .iter()
            .map(|s| Subject {
                name: s.name.trim().to_string(),
                max_marks: s.max_marks,
                score: 0,
            })
            .collect();
        Self { subjects }
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn score_of(&self, subject: &str) -> Option<u32> {
        self.subjects
            .iter()
            .find(|s| s.name == subject)
            .map(|s| s.score)
    }

    /// Sum of all max marks, or `None` if it does not fit in a `u32`.
    pub fn max_total(&self) -> Option<u32> {
        self.subjects
            .iter()
            .try_fold(0u32, |acc, s| acc.checked_add(s.max_marks))
    }

    /// Store a raw score typed by the user and return the value actually stored.
    ///
    /// Non-numeric input counts as 0; the parsed value is clamped to
    /// `[0, max_marks]`.
    pub fn set_score(&mut self, subject: &str, raw: &str) -> Result<u32, CalcError> {
        let value = match parse_score(raw) {
            Ok(v) => v,
            Err(e) => {
                debug!("{} for {}, using 0", e, subject);
                0
            }
        };
        self.set_score_value(subject, value)
    }

    /// Store an already-numeric score, clamped to `[0, max_marks]`.
    pub fn set_score_value(&mut self, subject: &str, value: i64) -> Result<u32, CalcError> {
        let entry = self
            .subjects
            .iter_mut()
            .find(|s| s.name == subject)
            .ok_or_else(|| CalcError::UnknownSubject(subject.to_string()))?;

        let stored = clamp_score(value, entry.max_marks);
        if i64::from(stored) != value {
            debug!(
                "Clamped {} score {} into [0, {}] -> {}",
                subject, value, entry.max_marks, stored
            );
        }
        entry.score = stored;
        Ok(stored)
    }

    /// Compute total and weighted percentage from the current scores.
    pub fn calculate(&self) -> Result<ScoreResult, CalcError> {
        let max_total = self.max_total().ok_or_else(|| {
            CalcError::InvalidConfiguration("total max marks overflows".to_string())
        })?;
        if max_total == 0 {
            return Err(CalcError::InvalidConfiguration(
                "total max marks is zero".to_string(),
            ));
        }

        // Each score is clamped to its max, so this stays within max_total
        let total_score: u32 = self.subjects.iter().map(|s| s.score).sum();
        let percentage = f64::from(total_score) / f64::from(max_total) * WEIGHT;

        Ok(ScoreResult {
            total_score,
            max_total,
            percentage,
        })
    }

    pub fn reset(&mut self) {
        for subject in &mut self.subjects {
            subject.score = 0;
        }
    }
}
