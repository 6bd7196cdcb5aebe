//! TUI application state and logic

use crate::core::{GameError, Slot, Tier};
use crate::game::{Game, RandomSource, RngSource, RoundState};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a, S: RandomSource = RngSource<ThreadRng>> {
    pub game: Game<'a, S>,
    pub screen: Screen,
    pub round: Option<RoundState>,
    pub focus: Slot,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    TierSelect,
    Board,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, S: RandomSource> App<'a, S> {
    /// New app on the tier menu, or straight into a round on `tier`
    #[must_use]
    pub fn new(game: Game<'a, S>, tier: Option<Tier>) -> Self {
        let mut app = Self {
            game,
            screen: Screen::TierSelect,
            round: None,
            focus: Slot::Noun,
            messages: Vec::new(),
            should_quit: false,
        };

        match tier {
            Some(tier) => app.select_tier(tier),
            None => app.add_message("Choose a level: press 1, 2 or 3", MessageStyle::Info),
        }
        app
    }

    /// Start round 1 on `tier`; score and round counter start over
    pub fn select_tier(&mut self, tier: Tier) {
        match self.game.new_round(tier) {
            Ok(state) => {
                self.round = Some(state);
                self.screen = Screen::Board;
                self.focus = Slot::Noun;
                self.messages.clear();
                self.add_message(
                    &format!("Level {}: {}", tier.number(), tier.title()),
                    MessageStyle::Info,
                );
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Back to the tier menu
    pub fn back_to_menu(&mut self) {
        self.round = None;
        self.screen = Screen::TierSelect;
        self.messages.clear();
        self.add_message("Choose a level: press 1, 2 or 3", MessageStyle::Info);
    }

    /// Append one letter to the focused field
    ///
    /// Letters whose uppercase is more than one character (`ß`) are ignored.
    pub fn type_char(&mut self, c: char) {
        let mut uppercase = c.to_uppercase();
        let (Some(upper), None) = (uppercase.next(), uppercase.next()) else {
            return;
        };
        if let Some(state) = &self.round {
            let text = format!("{}{upper}", state.input(self.focus));
            self.round = Some(state.with_input(self.focus, &text));
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(state) = &self.round {
            let mut text = state.input(self.focus).to_string();
            text.pop();
            self.round = Some(state.with_input(self.focus, &text));
        }
    }

    /// Evaluate the four fields
    pub fn check(&mut self) {
        let Some(state) = &self.round else {
            return;
        };
        if state.won() {
            return;
        }

        match state.checked() {
            Ok(next) => {
                if next.won() {
                    self.add_message(
                        "🎉 Word family complete! Press 'n' for the next round",
                        MessageStyle::Success,
                    );
                } else {
                    let correct = Slot::ALL
                        .iter()
                        .filter(|&&slot| next.feedback(slot).is_some_and(|v| v.is_correct()))
                        .count();
                    self.add_message(&format!("{correct}/4 correct"), MessageStyle::Info);
                }
                self.round = Some(next);
            }
            Err(GameError::IncompleteAnswer(_)) => {
                self.add_message("Please fill in all four fields", MessageStyle::Error);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Reveal one letter
    pub fn hint(&mut self) {
        let Some(state) = &self.round else {
            return;
        };

        let (next, hint) = self.game.hint(state);
        match hint {
            Some(hint) => self.add_message(
                &format!("Revealed a letter of the {}", hint.slot),
                MessageStyle::Info,
            ),
            None => self.add_message("No more letters to reveal there", MessageStyle::Error),
        }
        self.round = Some(next);
    }

    /// Clear the fields and hints of the current family
    pub fn reset(&mut self) {
        if let Some(state) = &self.round {
            self.round = Some(state.reset());
            self.focus = Slot::Noun;
            self.add_message("Round reset", MessageStyle::Info);
        }
    }

    /// New family on the same tier
    pub fn next_round(&mut self) {
        let Some(state) = &self.round else {
            return;
        };

        match self.game.next_round(state) {
            Ok(next) => {
                self.round = Some(next);
                self.focus = Slot::Noun;
                self.messages.clear();
                self.add_message("New word family!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.round.as_ref().is_some_and(RoundState::won)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('r') => self.reset(),
                KeyCode::Char('n') => self.next_round(),
                _ => {}
            }
            return;
        }

        match self.screen {
            Screen::TierSelect => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => {
                    if let Ok(tier) = c.to_string().parse::<Tier>() {
                        self.select_tier(tier);
                    }
                }
                _ => {}
            },
            Screen::Board if self.is_won() => match key.code {
                KeyCode::Char('n') | KeyCode::Enter => self.next_round(),
                KeyCode::Char('r') => self.reset(),
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc => self.back_to_menu(),
                _ => {}
            },
            Screen::Board => match key.code {
                KeyCode::Esc => self.back_to_menu(),
                KeyCode::Enter => self.check(),
                KeyCode::Char('?') => self.hint(),
                KeyCode::Tab | KeyCode::Down | KeyCode::Right => self.focus = self.focus.next(),
                KeyCode::BackTab | KeyCode::Up | KeyCode::Left => {
                    self.focus = self.focus.previous();
                }
                KeyCode::Backspace => self.delete_char(),
                KeyCode::Char(c) if c.is_alphabetic() || c == '-' => self.type_char(c),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: RandomSource>(app: App<'_, S>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: RandomSource>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
