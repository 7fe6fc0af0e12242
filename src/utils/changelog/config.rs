// changelog parsing configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DELIMITER: &str = "====================";
pub const DEFAULT_POSTSCRIPT_MARKER: &str = "PS:";
pub const DEFAULT_POSTSCRIPT_STRIP: &str = "PS: ";

/// configuration for splitting and classifying changelog input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// separator between the chinese and english halves
    pub delimiter: String,

    /// prefix that marks a line as a postscript item
    pub postscript_marker: String,

    /// substring removed (first occurrence only) from postscript items
    pub postscript_strip: String,
}

impl ChangelogConfig {
    /// create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn postscript_marker(mut self, marker: impl Into<String>) -> Self {
        self.postscript_marker = marker.into();
        self
    }

    pub fn postscript_strip(mut self, strip: impl Into<String>) -> Self {
        self.postscript_strip = strip.into();
        self
    }

    /// reject settings the parser cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(Error::InvalidConfig {
                reason: "changelog delimiter must not be empty".to_string(),
            });
        }
        if self.postscript_marker.is_empty() {
            return Err(Error::InvalidConfig {
                reason: "postscript marker must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            postscript_marker: DEFAULT_POSTSCRIPT_MARKER.to_string(),
            postscript_strip: DEFAULT_POSTSCRIPT_STRIP.to_string(),
        }
    }
}
