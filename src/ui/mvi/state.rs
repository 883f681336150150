/// Marker for state a view renders from. `Default` lets the app
/// `mem::take` the current value while a reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
