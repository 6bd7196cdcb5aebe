//! One-shot answer check
//!
//! Evaluates a single submission against a named word family without starting a
//! game. Used by the `check` command and handy for scripting.

use crate::catalog::Catalog;
use crate::core::{GameError, SlotMap, Tier, Verdict, is_win};
use crate::game::Game;
use serde::Serialize;

/// Verdicts for one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub tier: Tier,
    pub root: String,
    pub answers: SlotMap<String>,
    pub verdicts: SlotMap<Verdict>,
    pub won: bool,
}

/// Evaluate `answers` against the family of `tier` whose root is `root`
///
/// # Errors
///
/// Returns an error if:
/// - No family in the tier has this root
/// - Any answer is blank
pub fn check_answers(
    catalog: &Catalog,
    tier: Tier,
    root: &str,
    answers: SlotMap<String>,
) -> Result<CheckResult, GameError> {
    let family = catalog.find(tier, root)?;
    let game = Game::with_thread_rng(catalog);
    let verdicts = game.submit_answers(tier, family, &answers)?;

    Ok(CheckResult {
        tier,
        root: family.root().to_string(),
        answers: answers.map(|_, answer| answer.trim().to_uppercase()),
        won: is_win(&verdicts),
        verdicts,
    })
}
