// feed rendering configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_PRODUCT_NAME: &str = "Adobe Downloader";

/// configuration for the rendered `<description>` fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// product name shown in both section headings
    pub product_name: String,
}

impl FeedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = name.into();
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
        }
    }
}
