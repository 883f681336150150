//! Model-View-Intent primitives for the panel state.
//!
//! ```text
//! key / run event ──→ Intent ──→ Reducer ──→ State ──→ draw()
//! ```
//!
//! Run tasks never touch UI state directly; their reports arrive as
//! intents on the event loop thread.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
