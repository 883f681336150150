use super::intent::Intent;
use super::state::UiState;

/// The only place panel state changes.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Pure transition: `(state, intent) -> state`.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
