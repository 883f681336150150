/// Marker for values a reducer consumes: key presses turned into
/// commands, or reports from run tasks.
pub trait Intent: Send + 'static {}
