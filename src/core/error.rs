//! Error types for the word-family game

use super::{Slot, Tier};
use thiserror::Error;

/// Errors raised by the catalog, the game facade and record parsing.
///
/// Evaluation and hint selection never fail; these errors only arise at the
/// boundaries where user or file input is turned into game values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The difficulty key is not one of `level1`, `level2`, `level3`.
    #[error("unknown difficulty tier '{0}' (expected level1, level2 or level3)")]
    UnknownTier(String),

    /// The part-of-speech key is not one of the four slots.
    #[error("unknown slot '{0}' (expected noun, verb, adjective or adverb)")]
    UnknownSlot(String),

    /// A tier has no word families. The embedded catalog never triggers this.
    #[error("tier {0} has no word families")]
    EmptyTier(Tier),

    /// One or more answers were blank when the player asked for a check.
    #[error("please fill in all four fields before checking (missing: {})", join_slots(.0))]
    IncompleteAnswer(Vec<Slot>),

    /// A catalog record could not be parsed.
    #[error("invalid word-family record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    /// No family with this root exists in the tier.
    #[error("no word family with root '{root}' in {tier}")]
    UnknownFamily { tier: Tier, root: String },
}

fn join_slots(slots: &[Slot]) -> String {
    slots
        .iter()
        .map(|slot| slot.name())
        .collect::<Vec<_>>()
        .join(", ")
}
