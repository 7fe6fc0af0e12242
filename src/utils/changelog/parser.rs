// changelog parser

use super::config::ChangelogConfig;
use super::types::{LineKind, ParsedChangelog};
use crate::error::{Error, Result};
use tracing::{debug, trace};

/// trimmed, non-empty lines of one language block, in input order
fn block_lines(block: &str) -> impl Iterator<Item = &str> {
    block
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// classify a trimmed line as a change or a postscript item
///
/// postscript items only lose the first literal occurrence of the strip
/// pattern, so `PS:foo` stays `PS:foo`
pub fn classify_line(line: &str, config: &ChangelogConfig) -> LineKind {
    if line.starts_with(config.postscript_marker.as_str()) {
        LineKind::Postscript(line.replacen(config.postscript_strip.as_str(), "", 1))
    } else {
        LineKind::Change(line.to_string())
    }
}

/// parse bilingual changelog text using the default delimiter and markers
pub fn parse(text: &str) -> Result<ParsedChangelog> {
    parse_with(text, &ChangelogConfig::default())
}

/// parse bilingual changelog text
///
/// the first segment before the delimiter is the chinese block, the second
/// one the english block; anything after a second delimiter is ignored
pub fn parse_with(text: &str, config: &ChangelogConfig) -> Result<ParsedChangelog> {
    config.validate()?;

    let mut sections = text.split(config.delimiter.as_str());
    let (cn_block, en_block) = match (sections.next(), sections.next()) {
        (Some(cn), Some(en)) => (cn, en),
        _ => {
            return Err(Error::MissingDelimiter {
                delimiter: config.delimiter.clone(),
            });
        }
    };

    let ignored = sections.count();
    if ignored > 0 {
        debug!(ignored, "ignoring sections after the english block");
    }

    let mut parsed = ParsedChangelog::new();

    for line in block_lines(cn_block) {
        let kind = classify_line(line, config);
        trace!(?kind, "cn line");
        parsed.push_cn(kind);
    }

    for line in block_lines(en_block) {
        let kind = classify_line(line, config);
        trace!(?kind, "en line");
        parsed.push_en(kind);
    }

    debug!(
        changes_cn = parsed.changelog_cn.len(),
        ps_cn = parsed.ps_cn.len(),
        changes_en = parsed.changelog_en.len(),
        ps_en = parsed.ps_en.len(),
        "parsed changelog"
    );

    Ok(parsed)
}
