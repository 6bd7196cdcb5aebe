//! Core domain types for the word-family game
//!
//! Pure value types shared by the catalog, the evaluator and every front end.

mod error;
mod family;
mod slot;
mod tier;
mod verdict;

pub use error::GameError;
pub use family::{RECORD_SEPARATOR, WordFamily};
pub use slot::{Slot, SlotMap};
pub use tier::Tier;
pub use verdict::{Verdict, VerdictKind, is_win};
