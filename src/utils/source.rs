// changelog input sources

use crate::error::{Error, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// changelog used when no input is given
pub const BUILTIN_SAMPLE: &str = "1. 修复了清理工具执行清理时出现清理不全面的问题
2. 新增修复 Helper 的 sh 脚本和入口
3. 默认选中 SuperCafModels 包
4. 升级 Sparkle 到 2.8.1

====================

1. Fixed an issue where the cleanup tool would not clean up all files.
2. Added a sh script and entry for repairing Helper.
3. Selected SuperCafModels package by default.
4. Upgraded Sparkle to 2.8.1.";

/// where the raw changelog text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    BuiltIn,
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// map a command-line path to a source, `-` meaning standard input
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            None => InputSource::BuiltIn,
            Some(path) if path == Path::new("-") => InputSource::Stdin,
            Some(path) => InputSource::File(path.to_path_buf()),
        }
    }

    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::BuiltIn => Ok(BUILTIN_SAMPLE.to_string()),
            InputSource::File(path) => {
                debug!(path = %path.display(), "reading changelog file");
                std::fs::read_to_string(path).map_err(|e| Error::FileReadError {
                    path: path.clone(),
                    source: e,
                })
            }
            InputSource::Stdin => {
                debug!("reading changelog from stdin");
                Self::read_from(std::io::stdin().lock())
            }
        }
    }

    fn read_from<R: Read>(mut reader: R) -> Result<String> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(text)
    }
}
