//! Resume screener library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod screening;

pub use config::Config;
pub use error::{Result, ResumeScreenerError};
pub use screening::matcher::{is_fake_resume, normalize, split_entities, MatchResult};
