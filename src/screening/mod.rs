//! Blacklist matching and resume screening

pub mod blacklist;
pub mod matcher;
pub mod screener;
