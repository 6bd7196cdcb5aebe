//! Word Family
//!
//! A vocabulary game: given a root word, supply its noun, verb, adjective and
//! adverb forms. Each answer is judged on its own and the player can ask for
//! letter hints until all four columns are correct.
//!
//! # Quick Start
//!
//! ```rust
//! use word_family::catalog::Catalog;
//! use word_family::core::{SlotMap, Tier, is_win};
//! use word_family::game::Game;
//!
//! let catalog = Catalog::embedded();
//! let mut game = Game::with_thread_rng(&catalog);
//!
//! let family = game.start_round(Tier::Level1).unwrap();
//! let answers = family.forms().clone();
//! let verdicts = game.submit_answers(Tier::Level1, &family, &answers).unwrap();
//! assert!(is_win(&verdicts));
//!
//! let blank = SlotMap::from_answers("", "", "", "");
//! assert!(game.submit_answers(Tier::Level1, &family, &blank).is_err());
//! ```

// Core domain types
pub mod core;

// Word-family data
pub mod catalog;

// Evaluation, hints and round state
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
