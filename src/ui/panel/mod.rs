//! Control panel: algorithm selection and run status.

mod intent;
mod reducer;
mod state;

pub use intent::PanelIntent;
pub use reducer::PanelReducer;
pub use state::{PanelState, RunStatus};
