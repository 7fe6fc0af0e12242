pub mod error;
pub mod utils;

pub use error::*;
pub use utils::changelog::{
    ChangelogConfig, LineKind, ParsedChangelog, classify_line, parse, parse_with,
};
pub use utils::config::ChangenotesConfig;
pub use utils::feed::{FeedConfig, FeedTemplate, render};
pub use utils::source::{BUILTIN_SAMPLE, InputSource};
