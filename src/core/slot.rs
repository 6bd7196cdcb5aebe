//! Parts of speech and per-slot storage
//!
//! A word family has four columns, one per part of speech. `SlotMap` keeps one
//! value per column so callers never deal with missing keys.

use super::GameError;
use serde::Serialize;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// One of the four derivation columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl Slot {
    /// All slots in column order
    pub const ALL: [Self; 4] = [Self::Noun, Self::Verb, Self::Adjective, Self::Adverb];

    /// Lowercase key (`noun`, `verb`, ...)
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
        }
    }

    /// Column heading (`NOUN`, `VERB`, ...)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Noun => "NOUN",
            Self::Verb => "VERB",
            Self::Adjective => "ADJECTIVE",
            Self::Adverb => "ADVERB",
        }
    }

    /// Next column, wrapping to the first
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Noun => Self::Verb,
            Self::Verb => Self::Adjective,
            Self::Adjective => Self::Adverb,
            Self::Adverb => Self::Noun,
        }
    }

    /// Previous column, wrapping to the last
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Noun => Self::Adverb,
            Self::Verb => Self::Noun,
            Self::Adjective => Self::Verb,
            Self::Adverb => Self::Adjective,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Slot {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "noun" => Ok(Self::Noun),
            "verb" => Ok(Self::Verb),
            "adjective" => Ok(Self::Adjective),
            "adverb" => Ok(Self::Adverb),
            _ => Err(GameError::UnknownSlot(s.trim().to_string())),
        }
    }
}

/// Exactly one value per slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SlotMap<T> {
    noun: T,
    verb: T,
    adjective: T,
    adverb: T,
}

impl<T> SlotMap<T> {
    /// Build a map by calling `f` once per slot, in column order
    pub fn from_fn(mut f: impl FnMut(Slot) -> T) -> Self {
        Self {
            noun: f(Slot::Noun),
            verb: f(Slot::Verb),
            adjective: f(Slot::Adjective),
            adverb: f(Slot::Adverb),
        }
    }

    /// Iterate `(slot, value)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &T)> {
        Slot::ALL.into_iter().map(move |slot| (slot, &self[slot]))
    }

    /// Transform every value, keeping slot identity
    pub fn map<U>(&self, mut f: impl FnMut(Slot, &T) -> U) -> SlotMap<U> {
        SlotMap::from_fn(|slot| f(slot, &self[slot]))
    }
}

impl<T> Index<Slot> for SlotMap<T> {
    type Output = T;

    fn index(&self, slot: Slot) -> &T {
        match slot {
            Slot::Noun => &self.noun,
            Slot::Verb => &self.verb,
            Slot::Adjective => &self.adjective,
            Slot::Adverb => &self.adverb,
        }
    }
}

impl<T> IndexMut<Slot> for SlotMap<T> {
    fn index_mut(&mut self, slot: Slot) -> &mut T {
        match slot {
            Slot::Noun => &mut self.noun,
            Slot::Verb => &mut self.verb,
            Slot::Adjective => &mut self.adjective,
            Slot::Adverb => &mut self.adverb,
        }
    }
}

impl SlotMap<String> {
    /// Answers from four strings given in column order
    #[must_use]
    pub fn from_answers(
        noun: impl Into<String>,
        verb: impl Into<String>,
        adjective: impl Into<String>,
        adverb: impl Into<String>,
    ) -> Self {
        Self {
            noun: noun.into(),
            verb: verb.into(),
            adjective: adjective.into(),
            adverb: adverb.into(),
        }
    }

    /// Slots whose text is empty after trimming
    #[must_use]
    pub fn blank_slots(&self) -> Vec<Slot> {
        self.iter()
            .filter(|(_, text)| text.trim().is_empty())
            .map(|(slot, _)| slot)
            .collect()
    }
}
