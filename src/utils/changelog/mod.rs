// bilingual changelog parsing

pub mod config;
pub mod parser;
pub mod types;

pub use config::ChangelogConfig;
pub use parser::{classify_line, parse, parse_with};
pub use types::{LineKind, ParsedChangelog};
