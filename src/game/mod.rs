//! Game rules
//!
//! Answer evaluation, hint selection and round bookkeeping. Every function here is
//! pure with respect to the outside world; randomness comes in through
//! [`RandomSource`].

mod engine;
pub mod evaluator;
pub mod hint;
pub mod random;
mod round;

pub use engine::{Game, list_tiers};
pub use evaluator::{evaluate, evaluate_slot, is_related_word};
pub use hint::{Hint, RevealedLetters, hint_mask, next_hint};
pub use random::{RandomSource, RngSource};
pub use round::RoundState;
