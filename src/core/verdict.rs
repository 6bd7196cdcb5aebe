//! Per-slot feedback
//!
//! A verdict pairs a classification with the message shown under the field.

use super::{Slot, SlotMap};
use serde::Serialize;

/// Classification of one submitted word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictKind {
    /// Exactly the canonical form for the slot (green)
    Correct,
    /// Part of the family, but the wrong form or the wrong column (yellow)
    Related,
    /// The bare root where a negative prefix is required (blue)
    PrefixMissing,
    /// Not a derivation of the root (red)
    Incorrect,
}

impl VerdictKind {
    /// Legend text for this kind, in display order
    pub const LEGEND: [(Self, &'static str); 4] = [
        (Self::Correct, "Correct"),
        (Self::Related, "Related / Wrong Column"),
        (Self::Incorrect, "Incorrect"),
        (Self::PrefixMissing, "Prefix Missing"),
    ];
}

/// Feedback for one slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub kind: VerdictKind,
    pub message: String,
}

impl Verdict {
    #[must_use]
    pub fn correct() -> Self {
        Self::new(VerdictKind::Correct, "Correct!")
    }

    #[must_use]
    pub fn wrong_column() -> Self {
        Self::new(
            VerdictKind::Related,
            "This word belongs in a different column",
        )
    }

    #[must_use]
    pub fn not_primary(slot: Slot) -> Self {
        Self::new(
            VerdictKind::Related,
            format!("Valid derivation, but not the primary {}", slot.name()),
        )
    }

    #[must_use]
    pub fn prefix_missing() -> Self {
        Self::new(
            VerdictKind::PrefixMissing,
            "This word needs a negative prefix (un-, dis-, il-, im-)",
        )
    }

    #[must_use]
    pub fn incorrect() -> Self {
        Self::new(VerdictKind::Incorrect, "Not a valid derivation")
    }

    fn new(kind: VerdictKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.kind == VerdictKind::Correct
    }
}

/// Whether every slot was answered correctly
#[must_use]
pub fn is_win(verdicts: &SlotMap<Verdict>) -> bool {
    verdicts.iter().all(|(_, verdict)| verdict.is_correct())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_primary_names_the_slot() {
        let verdict = Verdict::not_primary(Slot::Adverb);
        assert_eq!(verdict.kind, VerdictKind::Related);
        assert_eq!(verdict.message, "Valid derivation, but not the primary adverb");
    }

    #[test]
    fn win_requires_all_correct() {
        let all = SlotMap::from_fn(|_| Verdict::correct());
        assert!(is_win(&all));

        let mut one_off = all.clone();
        one_off[Slot::Verb] = Verdict::wrong_column();
        assert!(!is_win(&one_off));
    }

    #[test]
    fn verdict_serializes_with_snake_case_kind() {
        let json = serde_json::to_string(&Verdict::prefix_missing()).unwrap();
        assert!(json.contains("\"kind\":\"prefix_missing\""));
    }
}
