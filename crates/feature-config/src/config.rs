//! Rendering options for generated config blocks.
//!
//! Options only affect whitespace; field order and punctuation of the
//! rendered blocks are fixed.

use serde::{Deserialize, Serialize};

use crate::error::{FeatureError, Result};

/// Largest supported indent width
pub const MAX_INDENT_WIDTH: u8 = 8;

/// Layout options used when rendering feature blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct RenderConfig {
    /// Spaces per nesting level
    pub indent_width: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.indent_width == 0 || self.indent_width > MAX_INDENT_WIDTH {
            return Err(FeatureError::InvalidConfig(format!(
                "indent_width must be between 1 and {}, got {}",
                MAX_INDENT_WIDTH, self.indent_width
            )));
        }
        Ok(())
    }

    /// Indentation for the given nesting depth
    pub fn indent(&self, depth: usize) -> String {
        " ".repeat(self.indent_width as usize * depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.indent(2), "        ");
    }

    #[test]
    fn test_json_loading() {
        let config = RenderConfig::from_json(r#"{"indent_width": 2}"#).unwrap();
        assert_eq!(config.indent_width, 2);
        assert_eq!(config.indent(1), "  ");
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            RenderConfig::from_json(r#"{"indent_width": 0}"#),
            Err(FeatureError::InvalidConfig(_))
        ));
        let config = RenderConfig { indent_width: 12 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            RenderConfig::from_json("{indent_width: 2"),
            Err(FeatureError::Json(_))
        ));
    }
}
