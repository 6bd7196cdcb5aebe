//! Display functions for rounds and command results

use super::formatters::{hint_line, legend, paint, verdict_symbol};
use crate::commands::{CheckResult, TierSummary};
use crate::core::{Slot, SlotMap, Verdict};
use crate::game::RoundState;
use colored::Colorize;
use std::io::{self, Write};

const RULE_WIDTH: usize = 60;

/// Print the board for the round in progress
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_board(out: &mut impl Write, state: &RoundState) -> io::Result<()> {
    let tier = state.tier();
    let family = state.family();

    writeln!(out, "\n{}", "─".repeat(RULE_WIDTH).cyan())?;
    writeln!(
        out,
        "Round {} • Score {} • Level {}: {}",
        state.round(),
        state.score(),
        tier.number(),
        tier.title()
    )?;
    writeln!(out, "{}", "─".repeat(RULE_WIDTH).cyan())?;
    writeln!(
        out,
        "Root word: {}",
        family.root_upper().bright_yellow().bold()
    )?;
    if let Some(note) = family.note() {
        writeln!(out, "💡 {note}")?;
    }
    writeln!(out)?;

    for slot in Slot::ALL {
        let input = state.input(slot);
        let shown = if input.is_empty() { "…" } else { input };
        match state.feedback(slot) {
            Some(verdict) => writeln!(
                out,
                "  {:<10} {} {:<14} {}",
                slot.label(),
                verdict_symbol(verdict.kind),
                paint(shown, verdict.kind),
                verdict.message
            )?,
            None => writeln!(out, "  {:<10} ⬜ {shown}", slot.label())?,
        }
        if input.is_empty() {
            if let Some(hint) = hint_line(family.form(slot), &state.revealed()[slot]) {
                writeln!(out, "  {:<10}    {}", "", hint.bright_black())?;
            }
        }
    }

    if state.won() {
        writeln!(
            out,
            "\n{}",
            "🎉 Word family complete!".bright_green().bold()
        )?;
        for (slot, form) in family.forms().iter() {
            writeln!(out, "  {:<10} {}", slot.label(), form.green())?;
        }
    }

    Ok(())
}

/// Print the verdicts of a one-shot check
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_check_result(out: &mut impl Write, result: &CheckResult) -> io::Result<()> {
    writeln!(
        out,
        "Checking {} ({}: {})",
        result.root.to_uppercase().bright_yellow().bold(),
        result.tier,
        result.tier.title()
    )?;
    write_verdicts(out, &result.answers, &result.verdicts)?;

    if result.won {
        writeln!(out, "{}", "✅ All four forms correct!".green().bold())?;
    } else {
        let correct = result
            .verdicts
            .iter()
            .filter(|(_, verdict)| verdict.is_correct())
            .count();
        writeln!(out, "{}", format!("❌ {correct}/4 correct").red().bold())?;
    }
    Ok(())
}

/// Print one line per slot: label, symbol, answer and message
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_verdicts(
    out: &mut impl Write,
    answers: &SlotMap<String>,
    verdicts: &SlotMap<Verdict>,
) -> io::Result<()> {
    for (slot, verdict) in verdicts.iter() {
        writeln!(
            out,
            "  {:<10} {} {:<14} {}",
            slot.label(),
            verdict_symbol(verdict.kind),
            paint(&answers[slot], verdict.kind),
            verdict.message
        )?;
    }
    Ok(())
}

/// Print the tier menu
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_tiers(out: &mut impl Write, tiers: &[TierSummary]) -> io::Result<()> {
    for summary in tiers {
        writeln!(
            out,
            "  {}  {:<8} Level {}: {:<24} {} families",
            summary.tier.number().to_string().bright_cyan().bold(),
            summary.tier.key(),
            summary.tier.number(),
            summary.title,
            summary.families
        )?;
    }
    Ok(())
}

/// Print the feedback color legend
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_legend(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", legend())
}
