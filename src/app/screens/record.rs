//! Round summary screen
//!
//! Renders both outcomes: a new record (green) or no record (red, with the
//! standing record shown).

use super::help_bar;
use crate::app::state::{AppState, GameEvent, NavigationAction, Screen};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Won/lost summary component
#[derive(Debug, Default)]
pub struct RecordScreen;

impl RecordScreen {
    pub fn new() -> Self {
        Self
    }

    /// Enter or Esc returns to the menu
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<GameEvent> {
        match NavigationAction::from_key(key) {
            NavigationAction::Select | NavigationAction::Back => Some(GameEvent::BackToMenu),
            _ => None,
        }
    }

    /// Render the summary for the state's current screen
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let won = state.screen == Screen::WonRecord;
        let color = if won { Color::Green } else { Color::Red };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(3)])
            .split(f.size());

        let headline = if won {
            "🎉 ¡Rompiste Récord!"
        } else {
            "😞 ¡No superaste el récord!"
        };

        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                headline,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Puntaje: {}", state.last_score)),
        ];
        if !won {
            text.push(Line::from(format!("Récord: {}", state.high_score)));
        }

        let summary = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .title("Resultado")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(summary, chunks[0]);

        let help = help_bar(&[("Enter", "Volver al Menú"), ("Q", "Quit")]);
        f.render_widget(help, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_back_to_menu_keys() {
        let mut screen = RecordScreen::new();
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(screen.handle_key_event(key(KeyCode::Enter)), Some(GameEvent::BackToMenu));
        assert_eq!(screen.handle_key_event(key(KeyCode::Esc)), Some(GameEvent::BackToMenu));
        assert_eq!(screen.handle_key_event(key(KeyCode::Left)), None);
    }
}
