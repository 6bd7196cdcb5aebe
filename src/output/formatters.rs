//! Formatting utilities for terminal output

use crate::core::VerdictKind;
use crate::game::hint_mask;
use colored::{ColoredString, Colorize};
use rustc_hash::FxHashSet;

/// Colored square for a verdict
#[must_use]
pub const fn verdict_symbol(kind: VerdictKind) -> &'static str {
    match kind {
        VerdictKind::Correct => "🟩",
        VerdictKind::Related => "🟨",
        VerdictKind::Incorrect => "🟥",
        VerdictKind::PrefixMissing => "🟦",
    }
}

/// Paint text in the verdict's color
#[must_use]
pub fn paint(text: &str, kind: VerdictKind) -> ColoredString {
    match kind {
        VerdictKind::Correct => text.green().bold(),
        VerdictKind::Related => text.yellow().bold(),
        VerdictKind::Incorrect => text.red().bold(),
        VerdictKind::PrefixMissing => text.bright_blue().bold(),
    }
}

/// One-line color legend
#[must_use]
pub fn legend() -> String {
    VerdictKind::LEGEND
        .iter()
        .map(|&(kind, label)| format!("{} {label}", verdict_symbol(kind)))
        .collect::<Vec<_>>()
        .join("   ")
}

/// Hint line for an empty field, if any letters were revealed
#[must_use]
pub fn hint_line(form: &str, revealed: &FxHashSet<usize>) -> Option<String> {
    (!revealed.is_empty()).then(|| format!("Hint: {}", hint_mask(form, revealed)))
}
