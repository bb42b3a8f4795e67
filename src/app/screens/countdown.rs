//! Countdown screen implementation
//!
//! Shows 3, 2, 1 and the go marker before a round. Takes no input.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Countdown screen component
#[derive(Debug, Default)]
pub struct CountdownScreen;

impl CountdownScreen {
    pub fn new() -> Self {
        Self
    }

    /// Render the current countdown label
    pub fn render(&self, f: &mut Frame, label: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(3),
                Constraint::Percentage(40),
            ])
            .split(f.size());

        let counter = Paragraph::new(label.to_string())
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            );
        f.render_widget(counter, chunks[1]);
    }
}
