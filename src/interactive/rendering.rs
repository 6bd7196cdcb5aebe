//! TUI rendering with ratatui
//!
//! Tier menu, the four-column board, feedback legend and messages.

use super::app::{App, MessageStyle, Screen};
use crate::core::{Slot, Tier, VerdictKind};
use crate::game::{RandomSource, RoundState, hint_mask};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: RandomSource>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(7), // Legend and messages
            Constraint::Length(1), // Help bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match (app.screen, &app.round) {
        (Screen::Board, Some(state)) => render_board(f, app, state, chunks[1]),
        _ => render_tier_menu(f, app, chunks[1]),
    }

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);
    render_legend(f, bottom[0]);
    render_messages(f, app, bottom[1]);

    render_help(f, app, chunks[3]);
}

/// Border and text color for a verdict
const fn verdict_color(kind: VerdictKind) -> Color {
    match kind {
        VerdictKind::Correct => Color::Green,
        VerdictKind::Related => Color::Yellow,
        VerdictKind::Incorrect => Color::Red,
        VerdictKind::PrefixMissing => Color::Blue,
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("📝 WORD FAMILY - Complete the word family")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_tier_menu<S: RandomSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let catalog = app.game.catalog();
    let mut lines = vec![Line::from("Select difficulty:"), Line::from("")];

    for tier in Tier::ALL {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  [{}] ", tier.number()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("Level {}: {}", tier.number(), tier.title()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({} families)", catalog.families(tier).len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let menu = Paragraph::new(lines).block(
        Block::default()
            .title(" Levels ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, area);
}

fn render_board<S: RandomSource>(f: &mut Frame, app: &App<'_, S>, state: &RoundState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Root word and progress
            Constraint::Min(6),    // Columns
            Constraint::Length(3), // Note or solution
        ])
        .split(area);

    render_root(f, state, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(chunks[1]);
    for (slot, column) in Slot::ALL.into_iter().zip(columns.iter()) {
        render_cell(f, state, slot, app.focus == slot, *column);
    }

    render_footer(f, state, chunks[2]);
}

fn render_root(f: &mut Frame, state: &RoundState, area: Rect) {
    let tier = state.tier();
    let content = vec![
        Line::from(vec![
            Span::raw("Root word: "),
            Span::styled(
                state.family().root_upper(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Round {} • Score {} • Level {}: {}",
            state.round(),
            state.score(),
            tier.number(),
            tier.title()
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_cell(f: &mut Frame, state: &RoundState, slot: Slot, focused: bool, area: Rect) {
    let verdict = state.feedback(slot);
    let color = verdict.map_or(Color::White, |v| verdict_color(v.kind));
    let input = state.input(slot);

    let mut lines = vec![Line::from(Span::styled(
        if focused && !state.won() {
            format!("{input}▏")
        } else {
            input.to_string()
        },
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];

    if let Some(verdict) = verdict {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            verdict.message.clone(),
            Style::default().fg(color),
        )));
    }

    let revealed = &state.revealed()[slot];
    if input.is_empty() && !revealed.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            hint_mask(state.family().form(slot), revealed),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let border = if focused && !state.won() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };

    let cell = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", slot.label()))
                .borders(Borders::ALL)
                .border_type(if focused {
                    BorderType::Double
                } else {
                    BorderType::Rounded
                })
                .border_style(border),
        );
    f.render_widget(cell, area);
}

fn render_footer(f: &mut Frame, state: &RoundState, area: Rect) {
    let family = state.family();
    let line = if state.won() {
        let forms: Vec<&str> = Slot::ALL.iter().map(|&slot| family.form(slot)).collect();
        Line::from(Span::styled(
            format!("🎉 {}", forms.join(" · ")),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
    } else if let Some(note) = family.note() {
        Line::from(format!("💡 {note}"))
    } else {
        Line::from("")
    };

    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

fn render_legend(f: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = VerdictKind::LEGEND
        .iter()
        .map(|&(kind, label)| {
            ListItem::new(Line::from(vec![
                Span::styled("■ ", Style::default().fg(verdict_color(kind))),
                Span::raw(label),
            ]))
        })
        .collect();

    let legend = List::new(items).block(
        Block::default()
            .title(" Feedback Colors ")
            .borders(Borders::ALL),
    );
    f.render_widget(legend, area);
}

fn render_messages<S: RandomSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help<S: RandomSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let help_text = match app.screen {
        Screen::TierSelect => "1-3: Choose level | q: Quit",
        Screen::Board if app.is_won() => "n: Next round | r: Replay | Esc: Levels | q: Quit",
        Screen::Board => {
            "Enter: Check | Tab/↑↓: Field | ?: Hint | ^R: Reset | ^N: Next | Esc: Levels | ^C: Quit"
        }
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::game::Game;
    use crate::game::random::testing::ScriptedSource;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App<'_, ScriptedSource>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn menu_lists_levels() {
        let catalog = Catalog::embedded();
        let app = App::new(Game::new(&catalog, ScriptedSource::default()), None);
        let text = screen_text(&app);

        assert!(text.contains("Basic Suffixes"));
        assert!(text.contains("Tricky Transformations"));
        assert!(text.contains("1-3: Choose level"));
    }

    #[test]
    fn board_shows_root_and_columns() {
        let catalog = Catalog::embedded();
        let app = App::new(
            Game::new(&catalog, ScriptedSource::default()),
            Some(Tier::Level3),
        );
        let text = screen_text(&app);

        assert!(text.contains("Root word: PATIENT"));
        assert!(text.contains("ADJECTIVE"));
        assert!(text.contains("Requires negative prefix"));
        assert!(text.contains("Prefix Missing"));
    }
}
