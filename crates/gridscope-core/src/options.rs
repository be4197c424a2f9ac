//! Configuration options for gridscope.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Viewer-wide configuration for grid painters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Color map for scalar standard/levelset rendering (diverging).
    pub scalar_color_map: String,

    /// Color map for magnitude/brightness rendering.
    pub ramp_color_map: String,

    /// Whether grid families start hidden.
    pub start_hidden: bool,

    /// Axis sliced by a freshly constructed painter (0..=2).
    pub initial_dim: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            scalar_color_map: "coolwarm".to_string(),
            ramp_color_map: "grayscale".to_string(),
            start_hidden: false,
            initial_dim: 2,
        }
    }
}

impl Options {
    /// Parses options from a JSON string.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes options to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let mut opts = Options::default();
        opts.scalar_color_map = "viridis".to_string();
        opts.start_hidden = true;

        let text = opts.to_json().unwrap();
        let back = Options::from_json(&text).unwrap();
        assert_eq!(back.scalar_color_map, "viridis");
        assert!(back.start_hidden);
        assert_eq!(back.initial_dim, 2);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(Options::from_json("{not json").is_err());
    }
}
