//! Command implementations

pub mod check;
pub mod simple;
pub mod tiers;

pub use check::{CheckResult, check_answers};
pub use simple::run_simple;
pub use tiers::{TierSummary, tier_summaries};
