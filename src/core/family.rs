//! Word-family records
//!
//! A `WordFamily` stores a root word and its four canonical derivations. Forms are
//! stored uppercase so every comparison in the game is case-insensitive.

use super::{GameError, Slot, SlotMap};
use std::fmt;

/// Field separator in catalog records
pub const RECORD_SEPARATOR: char = '|';

/// A root word plus its noun, verb, adjective and adverb forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFamily {
    root: String,
    forms: SlotMap<String>,
    note: Option<String>,
    requires_prefix: Option<Slot>,
}

impl WordFamily {
    /// Create a family from a root and its four forms in column order
    ///
    /// # Errors
    /// Returns `GameError::InvalidRecord` (line 0) if the root or any form is blank.
    ///
    /// # Examples
    /// ```
    /// use word_family::core::{Slot, WordFamily};
    ///
    /// let family = WordFamily::new("beauty", ["beauty", "beautify", "beautiful", "beautifully"]).unwrap();
    /// assert_eq!(family.form(Slot::Adjective), "BEAUTIFUL");
    /// assert_eq!(family.root_upper(), "BEAUTY");
    /// ```
    pub fn new(root: impl Into<String>, forms: [&str; 4]) -> Result<Self, GameError> {
        let root = root.into().trim().to_string();
        if root.is_empty() {
            return Err(invalid(0, "root is empty"));
        }

        let forms = SlotMap::from_fn(|slot| forms[slot_position(slot)].trim().to_uppercase());
        if let Some((slot, _)) = forms.iter().find(|(_, form)| form.is_empty()) {
            return Err(invalid(0, &format!("{slot} form is empty")));
        }

        Ok(Self {
            root,
            forms,
            note: None,
            requires_prefix: None,
        })
    }

    /// Attach a transformation note
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = (!note.trim().is_empty()).then(|| note.trim().to_string());
        self
    }

    /// Mark the slot whose canonical form carries a negative prefix
    #[must_use]
    pub fn with_required_prefix(mut self, slot: Slot) -> Self {
        self.requires_prefix = Some(slot);
        self
    }

    /// Parse one catalog record: `root | noun | verb | adjective | adverb [| note [| slot]]`
    ///
    /// `line` is only used for error reporting.
    ///
    /// # Errors
    /// Returns `GameError::InvalidRecord` if the record has the wrong number of
    /// fields, a blank root or form, or an unknown prefix slot.
    pub fn from_record(record: &str, line: usize) -> Result<Self, GameError> {
        let fields: Vec<&str> = record.split(RECORD_SEPARATOR).map(str::trim).collect();
        if !(5..=7).contains(&fields.len()) {
            return Err(invalid(
                line,
                &format!("expected 5 to 7 fields, found {}", fields.len()),
            ));
        }

        let mut family = Self::new(fields[0], [fields[1], fields[2], fields[3], fields[4]])
            .map_err(|e| match e {
                GameError::InvalidRecord { reason, .. } => GameError::InvalidRecord { line, reason },
                other => other,
            })?;

        if let Some(note) = fields.get(5) {
            family = family.with_note(*note);
        }

        if let Some(slot) = fields.get(6).filter(|s| !s.is_empty()) {
            let slot: Slot = slot
                .parse()
                .map_err(|e: GameError| invalid(line, &e.to_string()))?;
            family = family.with_required_prefix(slot);
        }

        Ok(family)
    }

    /// Root word as authored
    #[inline]
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Root word normalized for comparison
    #[must_use]
    pub fn root_upper(&self) -> String {
        self.root.to_uppercase()
    }

    /// Canonical (uppercase) form for a slot
    #[inline]
    #[must_use]
    pub fn form(&self, slot: Slot) -> &str {
        &self.forms[slot]
    }

    /// All four canonical forms
    #[inline]
    #[must_use]
    pub const fn forms(&self) -> &SlotMap<String> {
        &self.forms
    }

    #[inline]
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    #[inline]
    #[must_use]
    pub const fn requires_prefix(&self) -> Option<Slot> {
        self.requires_prefix
    }

    /// Slots other than `slot` whose canonical form equals `normalized`
    pub fn other_slots_matching<'a>(
        &'a self,
        slot: Slot,
        normalized: &'a str,
    ) -> impl Iterator<Item = Slot> + 'a {
        self.forms
            .iter()
            .filter(move |(other, form)| *other != slot && form.as_str() == normalized)
            .map(|(other, _)| other)
    }
}

impl fmt::Display for WordFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {sep} {} {sep} {} {sep} {} {sep} {}",
            self.root,
            self.forms[Slot::Noun],
            self.forms[Slot::Verb],
            self.forms[Slot::Adjective],
            self.forms[Slot::Adverb],
            sep = RECORD_SEPARATOR
        )?;
        match (&self.note, self.requires_prefix) {
            (note, Some(slot)) => write!(
                f,
                " {RECORD_SEPARATOR} {} {RECORD_SEPARATOR} {slot}",
                note.as_deref().unwrap_or_default()
            ),
            (Some(note), None) => write!(f, " {RECORD_SEPARATOR} {note}"),
            (None, None) => Ok(()),
        }
    }
}

const fn slot_position(slot: Slot) -> usize {
    match slot {
        Slot::Noun => 0,
        Slot::Verb => 1,
        Slot::Adjective => 2,
        Slot::Adverb => 3,
    }
}

fn invalid(line: usize, reason: &str) -> GameError {
    GameError::InvalidRecord {
        line,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uppercases_forms() {
        let family = WordFamily::new("deep", ["depth", "Deepen", "DEEP", "deeply"]).unwrap();
        assert_eq!(family.root(), "deep");
        assert_eq!(family.root_upper(), "DEEP");
        assert_eq!(family.form(Slot::Noun), "DEPTH");
        assert_eq!(family.form(Slot::Verb), "DEEPEN");
        assert_eq!(family.note(), None);
        assert_eq!(family.requires_prefix(), None);
    }

    #[test]
    fn new_rejects_blank_form() {
        assert!(matches!(
            WordFamily::new("deep", ["depth", "", "deep", "deeply"]),
            Err(GameError::InvalidRecord { reason, .. }) if reason == "verb form is empty"
        ));
        assert!(WordFamily::new("  ", ["a", "b", "c", "d"]).is_err());
    }

    #[test]
    fn record_minimal() {
        let family =
            WordFamily::from_record("beauty | BEAUTY | BEAUTIFY | BEAUTIFUL | BEAUTIFULLY", 1)
                .unwrap();
        assert_eq!(family.root(), "beauty");
        assert_eq!(family.form(Slot::Adverb), "BEAUTIFULLY");
        assert_eq!(family.note(), None);
    }

    #[test]
    fn record_with_note_and_prefix() {
        let family = WordFamily::from_record(
            "patient|PATIENCE|PATIENT|IMPATIENT|IMPATIENTLY|Requires negative prefix|adjective",
            3,
        )
        .unwrap();
        assert_eq!(family.note(), Some("Requires negative prefix"));
        assert_eq!(family.requires_prefix(), Some(Slot::Adjective));
    }

    #[test]
    fn record_with_empty_note_and_prefix() {
        let family = WordFamily::from_record(
            "agree | DISAGREEMENT | DISAGREE | DISAGREEABLE | DISAGREEABLY | | verb",
            1,
        )
        .unwrap();
        assert_eq!(family.note(), None);
        assert_eq!(family.requires_prefix(), Some(Slot::Verb));
    }

    #[test]
    fn record_wrong_field_count() {
        assert!(matches!(
            WordFamily::from_record("deep | DEPTH | DEEPEN", 12),
            Err(GameError::InvalidRecord { line: 12, .. })
        ));
    }

    #[test]
    fn record_blank_form_reports_line() {
        assert!(matches!(
            WordFamily::from_record("deep | DEPTH | | DEEP | DEEPLY", 4),
            Err(GameError::InvalidRecord { line: 4, .. })
        ));
    }

    #[test]
    fn record_unknown_prefix_slot() {
        let err = WordFamily::from_record(
            "just | INJUSTICE | INJUSTICE | UNJUST | UNJUSTLY | x | pronoun",
            9,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidRecord { line: 9, ref reason } if reason.contains("pronoun")
        ));
    }

    #[test]
    fn display_round_trips_through_record() {
        let original = WordFamily::from_record(
            "happy | UNHAPPINESS | UNHAPPY | UNHAPPY | UNHAPPILY | Requires negative prefix | adjective",
            1,
        )
        .unwrap();
        let reparsed = WordFamily::from_record(&original.to_string(), 1).unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn other_slots_matching_skips_own_slot() {
        let family =
            WordFamily::from_record("happy | UNHAPPINESS | UNHAPPY | UNHAPPY | UNHAPPILY", 1)
                .unwrap();
        let others: Vec<_> = family.other_slots_matching(Slot::Verb, "UNHAPPY").collect();
        assert_eq!(others, vec![Slot::Adjective]);

        let none: Vec<_> = family.other_slots_matching(Slot::Noun, "HAPPY").collect();
        assert!(none.is_empty());
    }
}
