use super::ExportOutcome;

/// Progress of the most recent export, as tracked by a caller.
///
/// `Idle -> Generating -> {Succeeded, Failed}`. A finished export can be
/// started again; a running one cannot, which keeps at most one export in
/// flight per caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExportState {
    #[default]
    Idle,
    Generating,
    Succeeded,
    Failed,
}

impl ExportState {
    pub fn is_generating(&self) -> bool {
        matches!(self, ExportState::Generating)
    }

    /// Enter `Generating`. Returns false (and changes nothing) if an export is already running.
    pub fn start(&mut self) -> bool {
        if self.is_generating() {
            return false;
        }
        *self = ExportState::Generating;
        true
    }

    pub fn finish(&mut self, outcome: &ExportOutcome) {
        *self = if outcome.is_success() {
            ExportState::Succeeded
        } else {
            ExportState::Failed
        };
    }

    /// Return to `Idle` once the status indicator has been shown.
    pub fn clear(&mut self) {
        if !self.is_generating() {
            *self = ExportState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportArtifact;
    use std::path::PathBuf;

    fn success() -> ExportOutcome {
        ExportOutcome::Succeeded(ExportArtifact {
            path: PathBuf::from("tawjihi-result-1.pdf"),
            degraded: false,
        })
    }

    #[test]
    fn test_lifecycle() {
        let mut state = ExportState::default();
        assert_eq!(state, ExportState::Idle);
        assert!(state.start());
        assert!(state.is_generating());
        state.finish(&success());
        assert_eq!(state, ExportState::Succeeded);
        state.clear();
        assert_eq!(state, ExportState::Idle);
    }

    #[test]
    fn test_no_second_start_while_generating() {
        let mut state = ExportState::Idle;
        assert!(state.start());
        assert!(!state.start());
        assert_eq!(state, ExportState::Generating);
    }

    #[test]
    fn test_failed_can_restart() {
        let mut state = ExportState::Idle;
        state.start();
        state.finish(&ExportOutcome::Failed {
            message: "x".to_string(),
        });
        assert_eq!(state, ExportState::Failed);
        assert!(state.start());
    }

    #[test]
    fn test_clear_does_not_interrupt_generating() {
        let mut state = ExportState::Idle;
        state.start();
        state.clear();
        assert!(state.is_generating());
    }
}
