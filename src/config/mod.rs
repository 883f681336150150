mod loader;
mod types;

pub use loader::{ConfigError, MAX_ARRAY_LEN};
pub use types::{AnimationConfig, ArrayConfig, Config, Defaults};
