// appcast description rendering

pub mod config;
pub mod template;

pub use config::FeedConfig;
pub use template::{FeedTemplate, render};
