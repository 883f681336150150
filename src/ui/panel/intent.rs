use crate::run::{RunId, RunOutcome};
use crate::sort::Algorithm;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelIntent {
    Select(Algorithm),
    SelectNext,
    SelectPrev,
    /// A run was spawned for the array on screen.
    RunStarted { run: RunId, algorithm: Algorithm },
    /// A run task reported back. Ignored unless `run` is the one shown.
    RunFinished { run: RunId, outcome: RunOutcome },
    /// The user stopped the shown run.
    RunCancelled { run: RunId },
    /// A new array replaced the old one; any run status is stale.
    ArrayReplaced,
}

impl Intent for PanelIntent {}
