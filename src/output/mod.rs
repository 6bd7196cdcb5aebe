//! Terminal output formatting
//!
//! Line-oriented rendering of rounds, check results and the tier menu.

pub mod display;
pub mod formatters;

pub use display::{write_board, write_check_result, write_legend, write_tiers, write_verdicts};
