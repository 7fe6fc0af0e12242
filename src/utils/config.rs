use super::changelog::ChangelogConfig;
use super::feed::FeedConfig;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "changenotes.toml";

/// main configuration for changenotes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangenotesConfig {
    /// input splitting and line classification
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// rendered description fragment
    #[serde(default)]
    pub feed: FeedConfig,
}

impl ChangenotesConfig {
    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::error::Error::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        let config: ChangenotesConfig =
            toml::from_str(&contents).map_err(|e| crate::error::Error::TomlParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        config.changelog.validate()?;
        debug!(path = %path.display(), "loaded configuration");

        Ok(config)
    }

    /// find and load configuration file in a directory
    ///
    /// looks for `changenotes.toml` in `dir`
    /// returns default config if the file is missing or broken
    pub fn load_or_default<P: AsRef<Path>>(dir: P) -> Self {
        match Self::find_config_file(&dir) {
            Some(config_path) => match Self::load_from_file(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    warn!("ignoring configuration file: {}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// find configuration file in a directory
    pub fn find_config_file<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
        let config_path = dir.as_ref().join(CONFIG_FILE_NAME);

        if config_path.exists() && config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[feed]\nproduct_name = \"Widget\"\n").unwrap();

        let config = ChangenotesConfig::load_from_file(&path).unwrap();
        assert_eq!(config.feed.product_name, "Widget");
        assert_eq!(config.changelog, ChangelogConfig::default());
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(
            &path,
            r#"
[changelog]
delimiter = "----"
postscript_marker = "NB:"
postscript_strip = "NB: "

[feed]
product_name = "Widget"
"#,
        )
        .unwrap();

        let config = ChangenotesConfig::load_from_file(&path).unwrap();
        assert_eq!(config.changelog.delimiter, "----");
        assert_eq!(config.changelog.postscript_marker, "NB:");
        assert_eq!(config.changelog.postscript_strip, "NB: ");
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = ChangenotesConfig::load_from_file(temp_dir.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::FileReadError { .. })));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[changelog\ndelimiter = ").unwrap();

        let result = ChangenotesConfig::load_from_file(&path);
        assert!(matches!(result, Err(Error::TomlParseError { .. })));
    }

    #[test]
    fn test_load_rejects_empty_delimiter() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[changelog]\ndelimiter = \"\"\n").unwrap();

        let result = ChangenotesConfig::load_from_file(&path);
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_load_or_default() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(
            ChangenotesConfig::load_or_default(temp_dir.path()),
            ChangenotesConfig::default()
        );

        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();
        assert_eq!(
            ChangenotesConfig::load_or_default(temp_dir.path()),
            ChangenotesConfig::default()
        );

        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[feed]\nproduct_name = \"Widget\"\n",
        )
        .unwrap();
        let config = ChangenotesConfig::load_or_default(temp_dir.path());
        assert_eq!(config.feed.product_name, "Widget");
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = ChangenotesConfig::default();
        let text = toml::to_string(&config).unwrap();
        let back: ChangenotesConfig = toml::from_str(&text).unwrap();
        assert_eq!(config, back);
    }
}
