//! Configuration types for the simulation.

use serde::{Deserialize, Serialize};

/// Iteration tuning parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IterationConfig {
    /// Per-axis distance below which two organisms are considered close by
    pub proximity_threshold: f32,
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self {
            proximity_threshold: 0.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IterationConfig::default();
        assert_eq!(config.proximity_threshold, 0.6);
    }

    #[test]
    fn test_config_serialization() {
        let config = IterationConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: IterationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.proximity_threshold, deserialized.proximity_threshold);
    }
}
