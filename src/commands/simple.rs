//! Simple interactive CLI mode
//!
//! Line-based game without TUI. Each line is either a command or the four
//! answers, separated by spaces or commas.

use super::tier_summaries;
use crate::core::{GameError, Slot, SlotMap, Tier};
use crate::game::{Game, RandomSource, RoundState};
use crate::output::{write_board, write_legend, write_tiers};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

const HELP: &str = "\
Type the four forms (noun verb adjective adverb) on one line, e.g.
  beauty beautify beautiful beautifully

Commands:
  hint   reveal one letter of an unsolved field
  reset  clear your answers and hints for this word family
  next   skip to a new word family
  back   return to level selection (resets round and score)
  help   show this help
  quit   exit";

/// How a round loop ended
enum Exit {
    Back,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// Starts on `tier` if given, otherwise asks for a level first. Returns when
/// the player quits or `input` is exhausted.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails, or if the
/// catalog has no families for the chosen tier.
pub fn run_simple<S: RandomSource>(
    game: &mut Game<'_, S>,
    tier: Option<Tier>,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "{}", "   Word Family - complete the word family".bold())?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    write_legend(&mut out)?;

    let mut tier = tier;
    loop {
        let chosen = match tier.take() {
            Some(chosen) => chosen,
            None => match choose_tier(game, &mut input, &mut out)? {
                Some(chosen) => chosen,
                None => break,
            },
        };

        match play_tier(game, chosen, &mut input, &mut out)? {
            Exit::Back => {}
            Exit::Quit => break,
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Ask for a level until a valid one is given; `None` means quit
fn choose_tier<S: RandomSource>(
    game: &Game<'_, S>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<Tier>> {
    writeln!(out, "\nSelect difficulty:")?;
    write_tiers(out, &tier_summaries(game.catalog()))?;

    loop {
        let Some(line) = read_line(input, out, "Level (1-3, or quit)")? else {
            return Ok(None);
        };
        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => return Ok(None),
            choice => match choice.parse::<Tier>() {
                Ok(tier) => return Ok(Some(tier)),
                Err(err) => writeln!(out, "❌ {err}")?,
            },
        }
    }
}

fn play_tier<S: RandomSource>(
    game: &mut Game<'_, S>,
    tier: Tier,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Exit> {
    let mut state = game.new_round(tier)?;
    write_board(out, &state)?;

    loop {
        let Some(line) = read_line(input, out, "Answers or command")? else {
            return Ok(Exit::Quit);
        };

        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => return Ok(Exit::Quit),
            "back" | "b" => return Ok(Exit::Back),
            "help" | "?" => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            "hint" | "h" => {
                let (next, hint) = game.hint(&state);
                if hint.is_none() {
                    writeln!(out, "No more letters to reveal there.")?;
                }
                state = next;
            }
            "reset" | "r" => state = state.reset(),
            "next" | "n" => state = game.next_round(&state)?,
            _ if state.won() => {
                writeln!(
                    out,
                    "Round complete! Type 'next' for a new word family or 'reset' to replay."
                )?;
                continue;
            }
            _ => match submit(&state, &line) {
                Ok(next) => state = next,
                Err(message) => {
                    writeln!(out, "{}", message.yellow())?;
                    continue;
                }
            },
        }

        write_board(out, &state)?;
    }
}

/// Fill the round with the answers on `line` and check them
fn submit(state: &RoundState, line: &str) -> Result<RoundState, String> {
    let answers = parse_answers(line)
        .ok_or_else(|| "Enter exactly four answers: noun verb adjective adverb".to_string())?;

    match state.with_inputs(&answers).checked() {
        Ok(next) => Ok(next),
        Err(GameError::IncompleteAnswer(missing)) => {
            let missing: Vec<&str> = missing.iter().map(|slot| slot.name()).collect();
            Err(format!(
                "Please fill in all four fields (missing: {}).",
                missing.join(", ")
            ))
        }
        Err(err) => Err(err.to_string()),
    }
}

/// Split a line into up to four answers; missing trailing answers stay blank
fn parse_answers(line: &str) -> Option<SlotMap<String>> {
    let words: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|word| !word.is_empty())
        .collect();
    if words.len() > Slot::ALL.len() {
        return None;
    }

    let mut answers = SlotMap::<String>::default();
    for (slot, word) in Slot::ALL.into_iter().zip(words) {
        answers[slot] = word.to_string();
    }
    Some(answers)
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::game::random::testing::ScriptedSource;
    use std::io::Cursor;

    fn play(tier: Option<Tier>, script: &str) -> String {
        colored::control::set_override(false);
        let catalog = Catalog::embedded();
        let mut game = Game::new(&catalog, ScriptedSource::default());
        let mut out = Vec::new();
        run_simple(&mut game, tier, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_answers_accepts_spaces_and_commas() {
        let answers = parse_answers("beauty, beautify,beautiful   beautifully").unwrap();
        assert_eq!(
            answers,
            SlotMap::from_answers("beauty", "beautify", "beautiful", "beautifully")
        );
    }

    #[test]
    fn parse_answers_leaves_missing_blank() {
        let answers = parse_answers("beauty beautify").unwrap();
        assert_eq!(answers.blank_slots(), vec![Slot::Adjective, Slot::Adverb]);
        assert!(parse_answers("a b c d e").is_none());
    }

    #[test]
    fn winning_round_scores() {
        let text = play(
            Some(Tier::Level1),
            "beauty beautify beautiful beautifully\nquit\n",
        );
        assert!(text.contains("Root word: BEAUTY"));
        assert!(text.contains("Word family complete!"));
        assert!(text.contains("Score 1"));
        assert!(text.contains("Thanks for playing"));
    }

    #[test]
    fn incomplete_answers_are_rejected() {
        let text = play(Some(Tier::Level1), "beauty beautify\n");
        assert!(text.contains("Please fill in all four fields (missing: adjective, adverb)."));
        assert!(!text.contains("Correct!"));
    }

    #[test]
    fn tier_is_chosen_from_menu() {
        let text = play(None, "7\n3\npatience patient patient impatiently\nq\n");
        assert!(text.contains("Negatives & Prefixes"));
        assert!(text.contains("❌ unknown difficulty tier '7'"));
        assert!(text.contains("This word needs a negative prefix"));
    }

    #[test]
    fn hint_reset_and_next() {
        let text = play(Some(Tier::Level2), "hint\nreset\nnext\nquit\n");
        assert!(text.contains("Hint: "));
        assert!(text.contains("Round 2 • Score 0"));
    }

    #[test]
    fn back_returns_to_menu_and_resets() {
        let text = play(
            Some(Tier::Level1),
            "beauty beautify beautiful beautifully\nback\n1\nquit\n",
        );
        assert!(text.contains("Select difficulty:"));
        assert!(text.ends_with("Thanks for playing!\n\n"));
        let last_board = text.rsplit("Round ").next().unwrap();
        assert!(last_board.starts_with("1 • Score 0"));
    }

    #[test]
    fn locked_after_win() {
        let text = play(
            Some(Tier::Level1),
            "beauty beautify beautiful beautifully\nxyz a b c\n",
        );
        assert!(text.contains("Round complete!"));
        assert!(!text.contains("Not a valid derivation"));
    }

    #[test]
    fn end_of_input_quits() {
        let text = play(None, "");
        assert!(text.contains("Thanks for playing"));
    }
}
