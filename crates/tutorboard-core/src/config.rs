//! Host-owned engine configuration.

use crate::actions::{ActionStyle, DEFAULT_LINE_WIDTH, Rgba};
use crate::caption::DEFAULT_CAPTION_MAX_LEN;
use crate::tools::ToolKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings the host keeps between whiteboard sessions.
///
/// The selected tool lives here rather than in the engine, so handing the same
/// config back on reopen restores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Tool selected when the whiteboard opens.
    pub tool: ToolKind,
    /// Ink color for pen and shapes.
    pub stroke_color: Rgba,
    /// Stroke width in CSS pixels.
    pub line_width: f64,
    /// Opaque color painted under every replay.
    pub background: Rgba,
    /// Maximum caption length in characters.
    pub caption_max_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tool: ToolKind::Pen,
            stroke_color: Rgba::black(),
            line_width: DEFAULT_LINE_WIDTH,
            background: Rgba::white(),
            caption_max_len: DEFAULT_CAPTION_MAX_LEN,
        }
    }
}

impl EngineConfig {
    /// Style applied to newly drawn actions.
    pub fn action_style(&self) -> ActionStyle {
        ActionStyle {
            color: self.stroke_color,
            line_width: self.line_width,
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the config to JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Write the config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json)
            .map_err(|e| ConfigError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }
}
