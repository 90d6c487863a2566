//! TUI rendering with ratatui
//!
//! Draws the gallows, the heart row, the masked word, both guess panels,
//! and the post-game dictionary popup.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GameStatus, MASK_GLYPH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// The hangman figure, one stage per drawable part
///
/// Part order follows the classic drawing: head, body, left arm, right arm,
/// left leg, right leg.
const GALLOWS: [&str; 7] = [
    r"
   +----+
   |    |
        |
        |
        |
        |
  =========",
    r"
   +----+
   |    |
   O    |
        |
        |
        |
  =========",
    r"
   +----+
   |    |
   O    |
   |    |
        |
        |
  =========",
    r"
   +----+
   |    |
   O    |
  /|    |
        |
        |
  =========",
    r"
   +----+
   |    |
   O    |
  /|\   |
        |
        |
  =========",
    r"
   +----+
   |    |
   O    |
  /|\   |
  /     |
        |
  =========",
    r"
   +----+
   |    |
   O    |
  /|\   |
  / \   |
        |
  =========",
];

/// Map misses onto a gallows stage
///
/// With the default budget of six this is one part per miss; other budgets
/// scale so the figure completes exactly at the last life.
#[must_use]
pub fn gallows_stage(misses: usize, budget: usize) -> usize {
    if budget == 0 {
        return GALLOWS.len() - 1;
    }
    (misses * (GALLOWS.len() - 1)).div_ceil(budget).min(GALLOWS.len() - 1)
}

/// One glyph per life: filled hearts remaining, hollow hearts spent
#[must_use]
pub fn hearts_line(lives: u8, budget: u8) -> String {
    let mut out = String::new();
    for i in 0..budget {
        if i > 0 {
            out.push(' ');
        }
        out.push(if i < lives { '♥' } else { '♡' });
    }
    out
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Gallows
            Constraint::Percentage(60), // Word and guesses
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_game_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.show_dictionary && app.game.is_over() {
        render_dictionary_popup(f, app, main_chunks[1]);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("h _ n g m a n")
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

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let stage = gallows_stage(app.game.wrong().len(), app.game.budget() as usize);

    let mut lines: Vec<Line> = GALLOWS[stage]
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            hearts_line(app.game.lives(), app.game.budget()),
            Style::default().fg(Color::Red),
        ),
    ]));

    let color = match app.game.status() {
        GameStatus::Lost => Color::Red,
        GameStatus::Won => Color::Green,
        GameStatus::InProgress => Color::White,
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Gallows ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );
    f.render_widget(paragraph, area);
}

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Word mask
            Constraint::Length(4), // Guessed letters
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_letters(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    // On a loss, reveal the whole word with the missed letters in red
    let spans: Vec<Span> = if app.game.status() == GameStatus::Lost {
        app.game
            .word()
            .text()
            .chars()
            .zip(app.game.revealed().chars())
            .flat_map(|(actual, shown)| {
                let style = if shown == MASK_GLYPH {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                };
                [Span::styled(actual.to_string(), style), Span::raw(" ")]
            })
            .collect()
    } else {
        app.game
            .revealed()
            .chars()
            .flat_map(|c| {
                [
                    Span::styled(
                        c.to_string(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect()
    };

    let word = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(word, area);
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let correct: String = app
        .game
        .correct()
        .iter()
        .map(|c| format!("{c} "))
        .collect();
    let wrong: String = app.game.wrong().iter().map(|c| format!("{c} ")).collect();

    let content = vec![
        Line::from(vec![
            Span::styled("Correct: ", Style::default().fg(Color::White)),
            Span::styled(correct, Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("Wrong:   ", Style::default().fg(Color::White)),
            Span::styled(wrong, Style::default().fg(Color::Red)),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game Over | 'n' new game, 'd' dictionary, 'q' quit ",
            "",
            match app.game.status() {
                GameStatus::Won => Color::Green,
                _ => Color::Red,
            },
        ),
        InputMode::Guessing => (
            " Guess a letter, Enter to submit | ESC to quit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let lives_text = format!("Lives: {} / {}", app.game.lives(), app.game.budget());
    let lives = Paragraph::new(lives_text).alignment(Alignment::Center);
    f.render_widget(lives, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "n: New Game | d: Dictionary | q: Quit",
        InputMode::Guessing => "Type a letter | Enter: Guess | ESC: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

/// Post-game dictionary popup, drawn over the right-hand panel
fn render_dictionary_popup(f: &mut Frame, app: &App, area: Rect) {
    let word = app.game.word().text();

    let content: Vec<Line> = match app.current_definitions() {
        None => vec![Line::from("Looking up definition...")],
        Some([]) => vec![Line::from("No dictionary data available.")],
        Some(entries) => {
            let entry = &entries[0];
            let mut lines = Vec::new();
            if let Some(phonetic) = &entry.phonetic {
                lines.push(Line::from(Span::styled(
                    phonetic.clone(),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            for meaning in &entry.meanings {
                lines.push(Line::from(Span::styled(
                    meaning.part_of_speech.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )));
                // Like the original popup: at most three senses per meaning
                for def in meaning.definitions.iter().take(3) {
                    lines.push(Line::from(format!("  • {}", def.definition)));
                }
                lines.push(Line::from(""));
            }
            if lines.is_empty() {
                lines.push(Line::from("No dictionary data available."));
            }
            lines
        }
    };

    let popup = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" {word} "))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallows_stage_one_part_per_miss_at_default_budget() {
        for misses in 0..=6 {
            assert_eq!(gallows_stage(misses, 6), misses);
        }
    }

    #[test]
    fn gallows_stage_completes_exactly_at_loss() {
        assert_eq!(gallows_stage(2, 2), 6);
        assert_eq!(gallows_stage(10, 10), 6);
        assert_eq!(gallows_stage(1, 1), 6);
    }

    #[test]
    fn gallows_stage_partial_budgets_scale_up() {
        assert_eq!(gallows_stage(0, 2), 0);
        assert_eq!(gallows_stage(1, 2), 3);
        assert_eq!(gallows_stage(1, 10), 1);
    }

    #[test]
    fn gallows_stage_never_overflows() {
        assert_eq!(gallows_stage(100, 6), 6);
        assert_eq!(gallows_stage(3, 0), 6);
    }

    #[test]
    fn hearts_line_tracks_lives() {
        assert_eq!(hearts_line(6, 6), "♥ ♥ ♥ ♥ ♥ ♥");
        assert_eq!(hearts_line(4, 6), "♥ ♥ ♥ ♥ ♡ ♡");
        assert_eq!(hearts_line(0, 6), "♡ ♡ ♡ ♡ ♡ ♡");
        assert_eq!(hearts_line(0, 2), "♡ ♡");
    }

    #[test]
    fn every_gallows_stage_has_same_height() {
        let heights: Vec<usize> = GALLOWS.iter().map(|s| s.lines().count()).collect();
        assert!(heights.windows(2).all(|w| w[0] == w[1]));
    }
}
