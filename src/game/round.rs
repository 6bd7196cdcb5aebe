//! Round state
//!
//! Everything a front end needs to draw one round. Transitions take `&self` and
//! return the next state, so adapters simply replace the value they hold.

use super::RandomSource;
use super::evaluator::evaluate;
use super::hint::{Hint, RevealedLetters, next_hint};
use crate::core::{GameError, Slot, SlotMap, Tier, Verdict, WordFamily, is_win};
use tracing::{debug, info};

/// State of the round in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    tier: Tier,
    family: WordFamily,
    inputs: SlotMap<String>,
    feedback: SlotMap<Option<Verdict>>,
    revealed: RevealedLetters,
    won: bool,
    round: u32,
    score: u32,
}

impl RoundState {
    /// First round of a game on `tier`
    #[must_use]
    pub fn new(tier: Tier, family: WordFamily) -> Self {
        Self {
            tier,
            family,
            inputs: SlotMap::default(),
            feedback: SlotMap::default(),
            revealed: RevealedLetters::default(),
            won: false,
            round: 1,
            score: 0,
        }
    }

    /// Replace one input; clears that slot's feedback. Ignored once the round is won.
    #[must_use]
    pub fn with_input(&self, slot: Slot, text: &str) -> Self {
        let mut next = self.clone();
        if self.won {
            return next;
        }
        next.inputs[slot] = text.to_uppercase();
        next.feedback[slot] = None;
        next
    }

    /// Replace all four inputs at once
    #[must_use]
    pub fn with_inputs(&self, inputs: &SlotMap<String>) -> Self {
        Slot::ALL
            .into_iter()
            .fold(self.clone(), |state, slot| state.with_input(slot, &inputs[slot]))
    }

    /// Evaluate the current inputs
    ///
    /// A win locks the round and adds one point. Checking a won round is a no-op.
    ///
    /// # Errors
    /// Returns `GameError::IncompleteAnswer` (and changes nothing) if any input is blank.
    pub fn checked(&self) -> Result<Self, GameError> {
        if self.won {
            return Ok(self.clone());
        }

        let blank = self.inputs.blank_slots();
        if !blank.is_empty() {
            return Err(GameError::IncompleteAnswer(blank));
        }

        let verdicts = evaluate(self.tier, &self.family, &self.inputs);
        let won = is_win(&verdicts);

        let mut next = self.clone();
        next.feedback = verdicts.map(|_, verdict| Some(verdict.clone()));
        if won {
            next.won = true;
            next.score += 1;
            info!(root = self.family.root(), round = self.round, score = next.score, "round won");
        }
        Ok(next)
    }

    /// Reveal one more letter, if any slot still needs help
    #[must_use]
    pub fn with_hint<S: RandomSource + ?Sized>(&self, source: &mut S) -> (Self, Option<Hint>) {
        let mut next = self.clone();
        let hint = next_hint(&self.family, &self.inputs, &self.revealed, source);
        if let Some(Hint { slot, position }) = hint {
            next.revealed[slot].insert(position);
        }
        (next, hint)
    }

    /// Clear inputs, feedback and hints; keeps the family, round and score
    #[must_use]
    pub fn reset(&self) -> Self {
        Self {
            inputs: SlotMap::default(),
            feedback: SlotMap::default(),
            revealed: RevealedLetters::default(),
            won: false,
            ..self.clone()
        }
    }

    /// Move on to the next round with a new family
    #[must_use]
    pub fn next_round(&self, family: WordFamily) -> Self {
        debug!(root = family.root(), round = self.round + 1, "starting next round");
        let mut next = Self::new(self.tier, family);
        next.round = self.round + 1;
        next.score = self.score;
        next
    }

    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    #[must_use]
    pub const fn family(&self) -> &WordFamily {
        &self.family
    }

    #[must_use]
    pub fn input(&self, slot: Slot) -> &str {
        &self.inputs[slot]
    }

    #[must_use]
    pub const fn inputs(&self) -> &SlotMap<String> {
        &self.inputs
    }

    #[must_use]
    pub fn feedback(&self, slot: Slot) -> Option<&Verdict> {
        self.feedback[slot].as_ref()
    }

    #[must_use]
    pub const fn revealed(&self) -> &RevealedLetters {
        &self.revealed
    }

    #[must_use]
    pub const fn won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VerdictKind;
    use crate::game::random::testing::ScriptedSource;

    fn beauty() -> WordFamily {
        WordFamily::new("beauty", ["BEAUTY", "BEAUTIFY", "BEAUTIFUL", "BEAUTIFULLY"]).unwrap()
    }

    fn deep() -> WordFamily {
        WordFamily::new("deep", ["DEPTH", "DEEPEN", "DEEP", "DEEPLY"]).unwrap()
    }

    fn answered(state: &RoundState, answers: [&str; 4]) -> RoundState {
        let [noun, verb, adjective, adverb] = answers;
        state.with_inputs(&SlotMap::from_answers(noun, verb, adjective, adverb))
    }

    #[test]
    fn new_round_starts_empty() {
        let state = RoundState::new(Tier::Level1, beauty());
        assert_eq!(state.round(), 1);
        assert_eq!(state.score(), 0);
        assert!(!state.won());
        assert!(Slot::ALL.iter().all(|&slot| state.input(slot).is_empty()));
        assert!(Slot::ALL.iter().all(|&slot| state.feedback(slot).is_none()));
    }

    #[test]
    fn input_is_uppercased_and_original_untouched() {
        let state = RoundState::new(Tier::Level1, beauty());
        let next = state.with_input(Slot::Noun, "beauty");
        assert_eq!(next.input(Slot::Noun), "BEAUTY");
        assert_eq!(state.input(Slot::Noun), "");
    }

    #[test]
    fn check_with_blank_fields_is_rejected() {
        let state = answered(
            &RoundState::new(Tier::Level1, beauty()),
            ["beauty", "", "beautiful", " "],
        );
        assert_eq!(
            state.checked(),
            Err(GameError::IncompleteAnswer(vec![Slot::Verb, Slot::Adverb]))
        );
    }

    #[test]
    fn winning_check_scores_and_locks() {
        let state = answered(
            &RoundState::new(Tier::Level1, beauty()),
            ["beauty", "beautify", "beautiful", "beautifully"],
        );
        let won = state.checked().unwrap();
        assert!(won.won());
        assert_eq!(won.score(), 1);

        // Locked: edits and re-checks change nothing
        let edited = won.with_input(Slot::Noun, "oops");
        assert_eq!(edited, won);
        assert_eq!(won.checked().unwrap().score(), 1);
    }

    #[test]
    fn partial_check_records_feedback() {
        let state = answered(
            &RoundState::new(Tier::Level1, beauty()),
            ["beautiful", "beautify", "beautiful", "xyz123"],
        );
        let checked = state.checked().unwrap();
        assert!(!checked.won());
        assert_eq!(checked.score(), 0);
        assert_eq!(checked.feedback(Slot::Noun).unwrap().kind, VerdictKind::Related);
        assert_eq!(checked.feedback(Slot::Adverb).unwrap().kind, VerdictKind::Incorrect);
    }

    #[test]
    fn editing_clears_only_that_slot_feedback() {
        let state = answered(
            &RoundState::new(Tier::Level1, beauty()),
            ["beautiful", "beautify", "beautiful", "xyz123"],
        )
        .checked()
        .unwrap();
        let edited = state.with_input(Slot::Adverb, "beautifully");
        assert!(edited.feedback(Slot::Adverb).is_none());
        assert!(edited.feedback(Slot::Noun).is_some());
    }

    #[test]
    fn hint_records_revealed_position() {
        let state = RoundState::new(Tier::Level2, deep());
        let mut source = ScriptedSource::new([2, 0]);
        let (next, hint) = state.with_hint(&mut source);

        assert_eq!(
            hint,
            Some(Hint {
                slot: Slot::Adjective,
                position: 0
            })
        );
        assert!(next.revealed()[Slot::Adjective].contains(&0));
        assert!(state.revealed()[Slot::Adjective].is_empty());
    }

    #[test]
    fn reset_keeps_round_score_and_family() {
        let (state, hint) =
            RoundState::new(Tier::Level1, beauty()).with_hint(&mut ScriptedSource::default());
        assert!(hint.is_some());
        let state = answered(&state, ["beauty", "beautify", "beautiful", "beautifully"])
            .checked()
            .unwrap();
        let reset = state.reset();

        assert!(!reset.won());
        assert_eq!(reset.score(), 1);
        assert_eq!(reset.round(), 1);
        assert_eq!(reset.family(), state.family());
        assert!(reset.input(Slot::Noun).is_empty());
        assert!(reset.feedback(Slot::Noun).is_none());
        assert!(Slot::ALL.iter().all(|&slot| reset.revealed()[slot].is_empty()));
    }

    #[test]
    fn next_round_advances_and_clears() {
        let state = answered(
            &RoundState::new(Tier::Level1, beauty()),
            ["beauty", "beautify", "beautiful", "beautifully"],
        )
        .checked()
        .unwrap();
        let next = state.next_round(deep());

        assert_eq!(next.round(), 2);
        assert_eq!(next.score(), 1);
        assert_eq!(next.tier(), Tier::Level1);
        assert_eq!(next.family().root(), "deep");
        assert!(!next.won());
        assert!(next.input(Slot::Verb).is_empty());
    }
}
