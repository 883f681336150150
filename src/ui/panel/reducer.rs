use crate::run::RunOutcome;
use crate::ui::mvi::Reducer;
use crate::ui::panel::intent::PanelIntent;
use crate::ui::panel::state::{PanelState, RunStatus};

pub struct PanelReducer;

impl Reducer for PanelReducer {
    type State = PanelState;
    type Intent = PanelIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PanelIntent::Select(selected) => PanelState { selected, ..state },
            PanelIntent::SelectNext => PanelState {
                selected: state.selected.next(),
                ..state
            },
            PanelIntent::SelectPrev => PanelState {
                selected: state.selected.prev(),
                ..state
            },
            PanelIntent::RunStarted { run, algorithm } => PanelState {
                status: RunStatus::Running { run, algorithm },
                ..state
            },
            PanelIntent::RunFinished { run, outcome } => match state.status {
                RunStatus::Running {
                    run: current,
                    algorithm,
                }
                | RunStatus::Finished {
                    run: current,
                    algorithm,
                    ..
                } if current == run => PanelState {
                    status: RunStatus::Finished {
                        run,
                        algorithm,
                        outcome,
                    },
                    ..state
                },
                // Stale report from a superseded run.
                _ => state,
            },
            PanelIntent::RunCancelled { run } => match state.status {
                RunStatus::Running {
                    run: current,
                    algorithm,
                } if current == run => PanelState {
                    status: RunStatus::Finished {
                        run,
                        algorithm,
                        // Frame count is filled in when the task reports.
                        outcome: RunOutcome::Cancelled { steps: 0 },
                    },
                    ..state
                },
                _ => state,
            },
            PanelIntent::ArrayReplaced => PanelState {
                status: RunStatus::Idle,
                ..state
            },
        }
    }
}
