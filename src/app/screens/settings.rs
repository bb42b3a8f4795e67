//! Settings screen implementation
//!
//! Adds words to a category and adjusts the round length. Works on raw
//! key events because the word field accepts free text.

use super::help_bar;
use crate::app::state::{AppState, GameEvent};
use crate::models::Category;
use crate::{MAX_ROUND_SECONDS, MIN_ROUND_SECONDS};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph, Tabs},
    Frame,
};

/// Settings screen component
#[derive(Debug, Default)]
pub struct SettingsScreen {
    category: Category,
    input: String,
}

impl SettingsScreen {
    /// Create a new settings screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Category new words go to
    pub fn category(&self) -> Category {
        self.category
    }

    /// Text typed so far
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Handle key events for the settings screen
    pub fn handle_key_event(&mut self, key: KeyEvent, state: &AppState) -> Option<GameEvent> {
        match key.code {
            KeyCode::Esc => Some(GameEvent::BackToMenu),
            KeyCode::Tab => {
                self.category = self.category.next();
                None
            }
            KeyCode::Left => Some(GameEvent::ChangeDuration(
                i64::from(state.round_duration_seconds) - 1,
            )),
            KeyCode::Right => Some(GameEvent::ChangeDuration(
                i64::from(state.round_duration_seconds) + 1,
            )),
            KeyCode::Enter => {
                let text = std::mem::take(&mut self.input);
                Some(GameEvent::AddWord(self.category, text))
            }
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
                None
            }
            _ => None,
        }
    }

    /// Render the settings screen
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Category tabs
                Constraint::Length(3), // Word input
                Constraint::Length(3), // Counts
                Constraint::Length(3), // Duration
                Constraint::Min(0),
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        let title = Paragraph::new("⚙ Ajustes")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        self.render_tabs(f, chunks[1]);

        let input = Paragraph::new(format!("{}▏", self.input)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Nueva palabra para {}", self.category.key())),
        );
        f.render_widget(input, chunks[2]);

        let counts = state.word_bank.counts_by_category();
        let summary = Category::all()
            .iter()
            .map(|c| format!("{}: {}", c.key(), counts.get(c).copied().unwrap_or(0)))
            .collect::<Vec<_>>()
            .join("   ");
        let counts = Paragraph::new(summary)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Palabras"));
        f.render_widget(counts, chunks[3]);

        self.render_duration(f, chunks[4], state.round_duration_seconds);

        let help = help_bar(&[
            ("Tab", "Categoría"),
            ("Enter", "Agregar palabra"),
            ("←→", "Duración"),
            ("Esc", "Volver al Menú"),
        ]);
        f.render_widget(help, chunks[6]);
    }

    fn render_tabs(&self, f: &mut Frame, area: Rect) {
        let titles: Vec<&str> = Category::all().iter().map(|c| c.key()).collect();
        let selected = Category::all()
            .iter()
            .position(|c| *c == self.category)
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL))
            .select(selected)
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White));
        f.render_widget(tabs, area);
    }

    fn render_duration(&self, f: &mut Frame, area: Rect, seconds: u32) {
        let span = f64::from(MAX_ROUND_SECONDS - MIN_ROUND_SECONDS);
        let ratio = f64::from(seconds.saturating_sub(MIN_ROUND_SECONDS)) / span;

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Yellow))
            .ratio(ratio.clamp(0.0, 1.0))
            .label(format!("⏱ Duración de la partida: {} s", seconds));
        f.render_widget(gauge, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_submit() {
        let state = AppState::default();
        let mut screen = SettingsScreen::new();
        for c in "Koala".chars() {
            assert_eq!(screen.handle_key_event(key(KeyCode::Char(c)), &state), None);
        }
        screen.handle_key_event(key(KeyCode::Backspace), &state);
        assert_eq!(screen.input(), "Koal");

        assert_eq!(
            screen.handle_key_event(key(KeyCode::Enter), &state),
            Some(GameEvent::AddWord(Category::Animals, "Koal".to_string()))
        );
        assert_eq!(screen.input(), "");
    }

    #[test]
    fn test_tab_cycles_category() {
        let state = AppState::default();
        let mut screen = SettingsScreen::new();
        screen.handle_key_event(key(KeyCode::Tab), &state);
        assert_eq!(screen.category(), Category::Movies);
        screen.handle_key_event(key(KeyCode::Char('q')), &state);
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Enter), &state),
            Some(GameEvent::AddWord(Category::Movies, "q".to_string()))
        );
    }

    #[test]
    fn test_arrows_request_duration_change() {
        let state = AppState::default();
        let mut screen = SettingsScreen::new();
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Left), &state),
            Some(GameEvent::ChangeDuration(59))
        );
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Right), &state),
            Some(GameEvent::ChangeDuration(61))
        );
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Esc), &state),
            Some(GameEvent::BackToMenu)
        );
    }
}
