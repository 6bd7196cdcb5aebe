//! Letter hints
//!
//! A hint reveals one more letter of a slot the player has not solved yet.
//! Selection is pure: the caller records the returned position.

use super::RandomSource;
use crate::core::{Slot, SlotMap, WordFamily};
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

/// Revealed character positions per slot
pub type RevealedLetters = SlotMap<FxHashSet<usize>>;

/// One letter to reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hint {
    pub slot: Slot,
    pub position: usize,
}

/// Slots whose input does not match the canonical form yet
#[must_use]
pub fn incomplete_slots(family: &WordFamily, inputs: &SlotMap<String>) -> Vec<Slot> {
    inputs
        .iter()
        .filter(|(slot, input)| input.trim().to_uppercase() != family.form(*slot))
        .map(|(slot, _)| slot)
        .collect()
}

/// Choose the next letter to reveal
///
/// Picks an incomplete slot uniformly, then an unrevealed position of its
/// canonical form uniformly. Returns `None` when every slot is complete, or when
/// the chosen slot has no hidden letters left.
pub fn next_hint<S: RandomSource + ?Sized>(
    family: &WordFamily,
    inputs: &SlotMap<String>,
    revealed: &RevealedLetters,
    source: &mut S,
) -> Option<Hint> {
    let incomplete = incomplete_slots(family, inputs);
    if incomplete.is_empty() {
        return None;
    }

    let slot = incomplete[source.pick(incomplete.len())];
    let hidden: Vec<usize> = (0..family.form(slot).chars().count())
        .filter(|position| !revealed[slot].contains(position))
        .collect();
    if hidden.is_empty() {
        debug!(%slot, "no letters left to reveal");
        return None;
    }

    let position = hidden[source.pick(hidden.len())];
    debug!(%slot, position, "revealing letter");
    Some(Hint { slot, position })
}

/// Show revealed letters of `form` and `_` for the rest, space separated
///
/// # Examples
/// ```
/// use rustc_hash::FxHashSet;
/// use word_family::game::hint_mask;
///
/// let revealed: FxHashSet<usize> = [0, 2].into_iter().collect();
/// assert_eq!(hint_mask("DEEP", &revealed), "D _ E _");
/// ```
#[must_use]
pub fn hint_mask(form: &str, revealed: &FxHashSet<usize>) -> String {
    form.chars()
        .enumerate()
        .map(|(i, c)| if revealed.contains(&i) { c } else { '_' })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
