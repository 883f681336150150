use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::sort::Algorithm;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub array: ArrayConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub defaults: Defaults,
}

/// Shape of the generated arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayConfig {
    /// Number of elements (default: 20).
    #[serde(default = "default_length")]
    pub length: usize,
    /// Smallest value that can be drawn (default: 0).
    #[serde(default)]
    pub min_value: u32,
    /// Exclusive upper bound for drawn values (default: 100).
    #[serde(default = "default_max_value")]
    pub max_value: u32,
    /// Fixed RNG seed for reproducible arrays.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Animation pacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Pause after each step in milliseconds (default: 100).
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,
}

/// Startup selections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Defaults {
    /// Algorithm selected when the app opens (default: "bubble").
    #[serde(default)]
    pub algorithm: Algorithm,
}

fn default_length() -> usize {
    20
}

fn default_max_value() -> u32 {
    100
}

fn default_step_delay_ms() -> u64 {
    100
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            length: default_length(),
            min_value: 0,
            max_value: default_max_value(),
            seed: None,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: default_step_delay_ms(),
        }
    }
}

impl AnimationConfig {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}
