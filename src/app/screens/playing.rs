//! Playing screen implementation
//!
//! Shows the category, the round clock and the current word, with pass
//! and correct controls.

use super::help_bar;
use crate::app::state::{GameEvent, NavigationAction};
use crate::game::GameSession;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Playing screen component
#[derive(Debug, Default)]
pub struct PlayingScreen;

impl PlayingScreen {
    pub fn new() -> Self {
        Self
    }

    /// Left passes, right or Enter marks the word as guessed
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<GameEvent> {
        match NavigationAction::from_key(key) {
            NavigationAction::Left => Some(GameEvent::Pass),
            NavigationAction::Right | NavigationAction::Select => Some(GameEvent::MarkCorrect),
            _ => None,
        }
    }

    /// Render the playing screen
    pub fn render(&self, f: &mut Frame, session: &GameSession) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Category
                Constraint::Length(3), // Clock
                Constraint::Min(5),    // Word
                Constraint::Length(3), // Controls
            ])
            .split(f.size());

        let category = Paragraph::new(format!("Categoría: {}", session.category()))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(category, chunks[0]);

        self.render_clock(f, chunks[1], session);
        self.render_word(f, chunks[2], session);

        let help = help_bar(&[("←", "Pasar"), ("→/Enter", "Correcto"), ("Q", "Quit")]);
        f.render_widget(help, chunks[3]);
    }

    fn render_clock(&self, f: &mut Frame, area: Rect, session: &GameSession) {
        let remaining = session.remaining_seconds();
        let color = if remaining <= 10 {
            Color::Red
        } else {
            Color::Green
        };

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(color))
            .ratio(session.time_ratio().clamp(0.0, 1.0))
            .label(format!(
                "⏱ Tiempo: {} s | Puntaje: {}",
                remaining,
                session.score()
            ));
        f.render_widget(gauge, area);
    }

    fn render_word(&self, f: &mut Frame, area: Rect, session: &GameSession) {
        let word = session.current_word().unwrap_or_default();
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                word.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("{} / {}", session.current_index() + 1, session.words().len()),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            );
        f.render_widget(paragraph, area);
    }
}
