pub mod changelog;
pub mod config;
pub mod feed;
pub mod source;
