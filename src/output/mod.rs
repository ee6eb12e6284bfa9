//! Output module: screening reports, console/JSON rendering and CSV ledgers

pub mod formatter;
pub mod ledger;
pub mod report;
