use serde::{Deserialize, Serialize};

/// Engine settings, read from a JSON document. Missing keys take their defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of undoable commands kept before the oldest is dropped.
    pub max_history: usize,
    /// Default `env_logger` filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub default_fill: String,
    pub default_stroke: String,
    pub default_stroke_width: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_history: 100,
            log_level: "info".to_string(),
            default_fill: "#ffffff".to_string(),
            default_stroke: "#000000".to_string(),
            default_stroke_width: 1.0,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
