use crate::run::{RunId, RunOutcome};
use crate::sort::Algorithm;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunStatus {
    #[default]
    Idle,
    Running {
        run: RunId,
        algorithm: Algorithm,
    },
    Finished {
        run: RunId,
        algorithm: Algorithm,
        outcome: RunOutcome,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelState {
    /// Algorithm the next run will use.
    pub selected: Algorithm,
    pub status: RunStatus,
}

impl UiState for PanelState {}

impl PanelState {
    pub fn new(selected: Algorithm) -> Self {
        Self {
            selected,
            status: RunStatus::Idle,
        }
    }

    pub fn running(&self) -> Option<RunId> {
        match self.status {
            RunStatus::Running { run, .. } => Some(run),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running().is_some()
    }
}
