// changelog data structures

use serde::{Deserialize, Serialize};

/// classification of a single trimmed, non-empty input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// regular change line, kept verbatim
    Change(String),
    /// postscript annotation, with the strip pattern already removed
    Postscript(String),
}

/// the four ordered sequences extracted from a bilingual changelog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedChangelog {
    pub changelog_cn: Vec<String>,
    pub changelog_en: Vec<String>,
    pub ps_cn: Vec<String>,
    pub ps_en: Vec<String>,
}

impl ParsedChangelog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_cn(&mut self, line: LineKind) {
        match line {
            LineKind::Change(text) => self.changelog_cn.push(text),
            LineKind::Postscript(text) => self.ps_cn.push(text),
        }
    }

    pub fn push_en(&mut self, line: LineKind) {
        match line {
            LineKind::Change(text) => self.changelog_en.push(text),
            LineKind::Postscript(text) => self.ps_en.push(text),
        }
    }

    /// number of non-empty lines consumed from the chinese block
    pub fn cn_line_count(&self) -> usize {
        self.changelog_cn.len() + self.ps_cn.len()
    }

    /// number of non-empty lines consumed from the english block
    pub fn en_line_count(&self) -> usize {
        self.changelog_en.len() + self.ps_en.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cn_line_count() == 0 && self.en_line_count() == 0
    }
}
