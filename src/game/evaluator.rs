//! Answer classification
//!
//! Each slot is judged on its own against the family's canonical forms:
//!
//! 1. exact match (after trimming and uppercasing) is `Correct`
//! 2. on level 3, an answer containing the bare root without a negative prefix in
//!    front of it is `PrefixMissing` in the slot that needs one
//! 3. anything "related" to the family is `Related`, with the wrong-column message
//!    taking priority over the not-the-primary-form message
//! 4. on level 3 families that need a prefix, anything sharing the root is `PrefixMissing`
//! 5. everything else is `Incorrect`
//!
//! The relatedness test is substring-based and deliberately loose. Short answers
//! that prefix several forms count as related.

use crate::core::{Slot, SlotMap, Tier, Verdict, WordFamily};
use tracing::trace;

/// Prefixes that negate a root (un-, dis-, il-, im-, ir-, in-)
pub const NEGATIVE_PREFIXES: [&str; 6] = ["UN", "DIS", "IL", "IM", "IR", "IN"];

/// Classify all four answers
///
/// # Examples
/// ```
/// use word_family::core::{Slot, SlotMap, Tier, VerdictKind, WordFamily};
/// use word_family::game::evaluate;
///
/// let family = WordFamily::new("beauty", ["beauty", "beautify", "beautiful", "beautifully"]).unwrap();
/// let answers = SlotMap::from_answers("BEAUTIFUL", "beautify", "beautiful", "beautifully");
/// let verdicts = evaluate(Tier::Level1, &family, &answers);
///
/// assert_eq!(verdicts[Slot::Noun].kind, VerdictKind::Related);
/// assert_eq!(verdicts[Slot::Verb].kind, VerdictKind::Correct);
/// ```
#[must_use]
pub fn evaluate(tier: Tier, family: &WordFamily, answers: &SlotMap<String>) -> SlotMap<Verdict> {
    answers.map(|slot, answer| evaluate_slot(tier, family, slot, answer))
}

/// Classify one answer for one slot
#[must_use]
pub fn evaluate_slot(tier: Tier, family: &WordFamily, slot: Slot, answer: &str) -> Verdict {
    let normalized = normalize(answer);
    let verdict = classify(tier, family, slot, &normalized);
    trace!(%slot, answer = %normalized, kind = ?verdict.kind, "evaluated answer");
    verdict
}

fn classify(tier: Tier, family: &WordFamily, slot: Slot, normalized: &str) -> Verdict {
    if normalized.is_empty() {
        return Verdict::incorrect();
    }

    if normalized == family.form(slot) {
        return Verdict::correct();
    }

    let root = family.root_upper();
    let needs_prefix = tier.checks_prefixes() && family.requires_prefix().is_some();

    if needs_prefix
        && family.requires_prefix() == Some(slot)
        && normalized.contains(root.as_str())
        && !has_negative_prefix(normalized, &root)
    {
        return Verdict::prefix_missing();
    }

    if is_related_word(normalized, family) {
        if family.other_slots_matching(slot, normalized).next().is_some() {
            return Verdict::wrong_column();
        }
        return Verdict::not_primary(slot);
    }

    if needs_prefix && shares_root(normalized, &root) {
        return Verdict::prefix_missing();
    }

    Verdict::incorrect()
}

/// Whether `answer` looks like a member of the family
///
/// True when the answer contains the root, when the root contains the answer's
/// first `|root|` letters, or when for some canonical form `F` the answer equals
/// `F`, is contained in `F`, or contains the first `min(|answer|, |F|)` letters of `F`.
/// Blank answers are never related.
#[must_use]
pub fn is_related_word(answer: &str, family: &WordFamily) -> bool {
    let answer = normalize(answer);
    if answer.is_empty() {
        return false;
    }

    let root = family.root_upper();
    if answer.contains(root.as_str()) || root.contains(prefix(&answer, root.chars().count())) {
        return true;
    }

    family.forms().iter().any(|(_, form)| {
        let answer_len = answer.chars().count();
        let form_len = form.chars().count();
        answer == *form
            || form.contains(answer.as_str())
            || answer.contains(prefix(form, answer_len.min(form_len)))
    })
}

/// Whether the answer is a negative prefix followed by the root
///
/// Both arguments are expected uppercase. A root that itself starts with
/// `IN` or `UN` is not mistaken for a negated one.
#[must_use]
pub fn has_negative_prefix(normalized: &str, root: &str) -> bool {
    NEGATIVE_PREFIXES.iter().any(|negative| {
        normalized
            .strip_prefix(negative)
            .is_some_and(|rest| rest.contains(root))
    })
}

fn shares_root(normalized: &str, root: &str) -> bool {
    normalized.contains(root) || root.contains(normalized)
}

fn normalize(answer: &str) -> String {
    answer.trim().to_uppercase()
}

/// First `len` characters of `s` (all of `s` if shorter)
fn prefix(s: &str, len: usize) -> &str {
    s.char_indices().nth(len).map_or(s, |(end, _)| &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::core::{VerdictKind, is_win};

    fn beauty() -> WordFamily {
        WordFamily::new("beauty", ["BEAUTY", "BEAUTIFY", "BEAUTIFUL", "BEAUTIFULLY"]).unwrap()
    }

    fn patient() -> WordFamily {
        WordFamily::new("patient", ["PATIENCE", "PATIENT", "IMPATIENT", "IMPATIENTLY"])
            .unwrap()
            .with_note("Requires negative prefix")
            .with_required_prefix(Slot::Adjective)
    }

    fn kinds(verdicts: &SlotMap<Verdict>) -> [VerdictKind; 4] {
        Slot::ALL.map(|slot| verdicts[slot].kind)
    }

    #[test]
    fn all_correct_wins() {
        let answers = SlotMap::from_answers("beauty", "beautify", "beautiful", "beautifully");
        let verdicts = evaluate(Tier::Level1, &beauty(), &answers);

        assert_eq!(kinds(&verdicts), [VerdictKind::Correct; 4]);
        assert!(is_win(&verdicts));
        assert_eq!(verdicts[Slot::Noun].message, "Correct!");
    }

    #[test]
    fn other_columns_form_is_wrong_column() {
        let answers = SlotMap::from_answers("BEAUTIFUL", "beautify", "beautiful", "beautifully");
        let verdicts = evaluate(Tier::Level1, &beauty(), &answers);

        assert_eq!(verdicts[Slot::Noun], Verdict::wrong_column());
        for slot in [Slot::Verb, Slot::Adjective, Slot::Adverb] {
            assert!(verdicts[slot].is_correct(), "{slot}");
        }
        assert!(!is_win(&verdicts));
    }

    #[test]
    fn related_but_not_primary() {
        let verdict = evaluate_slot(Tier::Level1, &beauty(), Slot::Noun, "beautifulness");
        assert_eq!(verdict, Verdict::not_primary(Slot::Noun));
    }

    #[test]
    fn bare_root_needs_prefix_on_level3() {
        let verdict = evaluate_slot(Tier::Level3, &patient(), Slot::Adjective, "PATIENT");
        assert_eq!(verdict, Verdict::prefix_missing());
    }

    #[test]
    fn bare_root_outside_prefixed_slot_is_wrong_column() {
        // PATIENT is the verb; in the noun column it belongs elsewhere
        let verdict = evaluate_slot(Tier::Level3, &patient(), Slot::Noun, "patient");
        assert_eq!(verdict, Verdict::wrong_column());
    }

    #[test]
    fn bare_root_below_level3_is_related() {
        let verdict = evaluate_slot(Tier::Level2, &patient(), Slot::Adjective, "PATIENT");
        assert_eq!(verdict, Verdict::wrong_column());
    }

    #[test]
    fn wrong_negative_prefix_is_related() {
        let verdict = evaluate_slot(Tier::Level3, &patient(), Slot::Adjective, "UNPATIENT");
        assert_eq!(verdict, Verdict::not_primary(Slot::Adjective));
    }

    #[test]
    fn prefix_missing_for_verb_slot_family() {
        let catalog = Catalog::embedded();
        let agree = catalog.find(Tier::Level3, "agree").unwrap();
        let verdict = evaluate_slot(Tier::Level3, agree, Slot::Verb, "agree");
        assert_eq!(verdict.kind, VerdictKind::PrefixMissing);

        // The adjective slot of this family is not the flagged one
        let verdict = evaluate_slot(Tier::Level3, agree, Slot::Adjective, "agreeable");
        assert_eq!(verdict.kind, VerdictKind::Related);
    }

    #[test]
    fn nonsense_is_incorrect_everywhere() {
        let catalog = Catalog::embedded();
        for (tier, family) in catalog.iter() {
            for slot in Slot::ALL {
                let verdict = evaluate_slot(tier, family, slot, "xyz123");
                assert_eq!(verdict, Verdict::incorrect(), "{} {slot}", family.root());
            }
        }
    }

    #[test]
    fn blank_answer_is_incorrect() {
        assert_eq!(
            evaluate_slot(Tier::Level3, &patient(), Slot::Adjective, "   "),
            Verdict::incorrect()
        );
        assert!(!is_related_word("", &beauty()));
    }

    #[test]
    fn symbols_are_incorrect() {
        assert_eq!(
            evaluate_slot(Tier::Level1, &beauty(), Slot::Verb, "!!??"),
            Verdict::incorrect()
        );
    }

    #[test]
    fn catalog_forms_are_correct_in_any_case() {
        let catalog = Catalog::embedded();
        for (tier, family) in catalog.iter() {
            let upper = family.forms().clone();
            let lower = upper.map(|_, form| form.to_lowercase());
            let mixed = upper.map(|_, form| {
                form.chars()
                    .enumerate()
                    .map(|(i, c)| if i % 2 == 0 { c.to_ascii_lowercase() } else { c })
                    .collect::<String>()
            });
            let padded = upper.map(|_, form| format!("  {form}\t"));

            for answers in [upper, lower, mixed, padded] {
                let verdicts = evaluate(tier, family, &answers);
                assert!(is_win(&verdicts), "{} {answers:?}", family.root());
            }
        }
    }

    #[test]
    fn evaluation_is_idempotent() {
        let answers = SlotMap::from_answers("beautiful", "beauty", "beaut", "xyz");
        let family = beauty();
        let first = evaluate(Tier::Level1, &family, &answers);
        let second = evaluate(Tier::Level1, &family, &answers);
        assert_eq!(first, second);
    }

    #[test]
    fn relatedness_is_loose() {
        let family = beauty();
        // Root contained
        assert!(is_related_word("BEAUTYSHOP", &family));
        // Root contains the answer's root-length prefix
        assert!(is_related_word("beau", &family));
        // Answer contained in a form
        assert!(is_related_word("tiful", &family));
        // Answer starts with a whole form
        assert!(is_related_word("beautifullyish", &family));
        // Single letters that start a form are related
        assert!(is_related_word("b", &family));
        assert!(!is_related_word("quickly", &family));
    }

    #[test]
    fn prefix_handles_short_strings() {
        assert_eq!(prefix("DEEP", 2), "DE");
        assert_eq!(prefix("DEEP", 4), "DEEP");
        assert_eq!(prefix("DEEP", 10), "DEEP");
        assert_eq!(prefix("", 3), "");
    }

    #[test]
    fn negative_prefixes_detected() {
        for (word, root) in [
            ("UNJUST", "JUST"),
            ("DISAGREE", "AGREE"),
            ("ILLEGAL", "LEGAL"),
            ("IMPATIENT", "PATIENT"),
            ("IRREGULAR", "REGULAR"),
            ("INJUSTICE", "JUST"),
        ] {
            assert!(has_negative_prefix(word, root), "{word}");
        }
        assert!(!has_negative_prefix("PATIENT", "PATIENT"));
    }

    #[test]
    fn negative_prefix_must_precede_root() {
        // The root itself starts with IN
        assert!(!has_negative_prefix("INTEREST", "INTEREST"));
        assert!(!has_negative_prefix("INTERESTING", "INTEREST"));
        assert!(has_negative_prefix("UNINTERESTING", "INTEREST"));
    }

    #[test]
    fn bare_root_starting_with_in_needs_prefix() {
        let interest = WordFamily::new(
            "interest",
            ["DISINTEREST", "INTEREST", "UNINTERESTING", "UNINTERESTINGLY"],
        )
        .unwrap()
        .with_required_prefix(Slot::Adjective);

        assert_eq!(
            evaluate_slot(Tier::Level3, &interest, Slot::Adjective, "interesting"),
            Verdict::prefix_missing()
        );
        assert_eq!(
            evaluate_slot(Tier::Level3, &interest, Slot::Adjective, "uninteresting"),
            Verdict::correct()
        );
    }

    #[test]
    fn root_fragments_stay_related_on_level3() {
        let family = patient();
        for fragment in ["P", "E", "TIEN", "PATIEN"] {
            assert_eq!(
                evaluate_slot(Tier::Level3, &family, Slot::Adjective, fragment),
                Verdict::not_primary(Slot::Adjective),
                "{fragment}"
            );
        }
        assert_eq!(
            evaluate_slot(Tier::Level3, &family, Slot::Adjective, "PATIENT"),
            Verdict::prefix_missing()
        );
        assert_eq!(
            evaluate_slot(Tier::Level3, &family, Slot::Adjective, "patiently"),
            Verdict::prefix_missing()
        );
    }
}
