//! Game facade
//!
//! The boundary every front end talks to: tier listing, round start, answer
//! submission and hints, bound to one catalog and one random source.

use super::evaluator::evaluate;
use super::hint::{Hint, RevealedLetters, next_hint};
use super::random::{RandomSource, RngSource};
use super::round::RoundState;
use crate::catalog::Catalog;
use crate::core::{GameError, SlotMap, Tier, Verdict, WordFamily};
use rand::rngs::ThreadRng;
use tracing::debug;

/// The fixed set of difficulty tiers
#[must_use]
pub const fn list_tiers() -> [Tier; 3] {
    Tier::ALL
}

/// Word-family game bound to a catalog
///
/// Holds no round state; callers keep a [`RoundState`] (or their own
/// bookkeeping) and pass it in.
pub struct Game<'a, S: RandomSource = RngSource<ThreadRng>> {
    catalog: &'a Catalog,
    source: S,
}

impl<'a> Game<'a> {
    /// Game using the thread-local RNG
    #[must_use]
    pub fn with_thread_rng(catalog: &'a Catalog) -> Self {
        Self::new(catalog, RngSource::thread())
    }
}

impl<'a, S: RandomSource> Game<'a, S> {
    pub const fn new(catalog: &'a Catalog, source: S) -> Self {
        Self { catalog, source }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Pick the family for a new round
    ///
    /// # Errors
    /// Returns `GameError::EmptyTier` if the catalog has no families for `tier`.
    pub fn start_round(&mut self, tier: Tier) -> Result<WordFamily, GameError> {
        let family = self.catalog.pick_random(tier, &mut self.source)?.clone();
        debug!(%tier, root = family.root(), "picked word family");
        Ok(family)
    }

    /// Evaluate a full submission
    ///
    /// # Errors
    /// Returns `GameError::IncompleteAnswer` without evaluating anything if any
    /// answer is blank.
    pub fn submit_answers(
        &self,
        tier: Tier,
        family: &WordFamily,
        answers: &SlotMap<String>,
    ) -> Result<SlotMap<Verdict>, GameError> {
        let blank = answers.blank_slots();
        if !blank.is_empty() {
            return Err(GameError::IncompleteAnswer(blank));
        }
        Ok(evaluate(tier, family, answers))
    }

    /// Choose the next letter to reveal
    pub fn request_hint(
        &mut self,
        family: &WordFamily,
        inputs: &SlotMap<String>,
        revealed: &RevealedLetters,
    ) -> Option<Hint> {
        next_hint(family, inputs, revealed, &mut self.source)
    }

    /// First round on `tier`
    ///
    /// # Errors
    /// See [`Game::start_round`].
    pub fn new_round(&mut self, tier: Tier) -> Result<RoundState, GameError> {
        Ok(RoundState::new(tier, self.start_round(tier)?))
    }

    /// Round after `state`, on the same tier, keeping the score
    ///
    /// # Errors
    /// See [`Game::start_round`].
    pub fn next_round(&mut self, state: &RoundState) -> Result<RoundState, GameError> {
        Ok(state.next_round(self.start_round(state.tier())?))
    }

    /// Reveal a letter in `state`
    #[must_use]
    pub fn hint(&mut self, state: &RoundState) -> (RoundState, Option<Hint>) {
        state.with_hint(&mut self.source)
    }
}
