use crate::cli::OutputFormat;
use rxnrebuild::engine::config::{ConsistencyPolicy, DetectionMode};
use rxnrebuild::engine::direction::Direction;

pub struct DefaultsConfig {
    pub direction: Direction,
    pub detection_mode: DetectionMode,
    pub consistency: ConsistencyPolicy,
    pub allow_structureless: bool,
    pub output: OutputFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Reverse,
            detection_mode: DetectionMode::Precomputed,
            consistency: ConsistencyPolicy::Warn,
            allow_structureless: true,
            output: OutputFormat::Text,
        }
    }
}
