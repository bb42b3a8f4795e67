//! Menu screen implementation
//!
//! Title, current record, the three categories and the settings entry.

use super::help_bar;
use crate::app::state::{AppState, GameEvent, NavigationAction};
use crate::models::Category;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Entries on the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play(Category),
    Settings,
}

impl MenuItem {
    fn all() -> [Self; 4] {
        [
            Self::Play(Category::Animals),
            Self::Play(Category::Movies),
            Self::Play(Category::Professions),
            Self::Settings,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Play(Category::Animals) => "🐶 Animales",
            Self::Play(Category::Movies) => "🎬 Películas",
            Self::Play(Category::Professions) => "👨‍⚕ Profesiones",
            Self::Settings => "⚙ Ajustes",
        }
    }

    fn event(&self) -> GameEvent {
        match self {
            Self::Play(category) => GameEvent::SelectCategory(*category),
            Self::Settings => GameEvent::OpenSettings,
        }
    }
}

/// Menu screen component
#[derive(Debug)]
pub struct MenuScreen {
    selected_index: usize,
    list_state: ListState,
}

impl MenuScreen {
    /// Create a new menu screen
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
        }
    }

    /// Currently highlighted entry
    pub fn selected_item(&self) -> MenuItem {
        MenuItem::all()[self.selected_index]
    }

    /// Move selection up, wrapping
    pub fn select_previous(&mut self) {
        let len = MenuItem::all().len();
        self.selected_index = (self.selected_index + len - 1) % len;
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down, wrapping
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % MenuItem::all().len();
        self.list_state.select(Some(self.selected_index));
    }

    /// Handle key events for the menu
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<GameEvent> {
        match key.code {
            KeyCode::Char('1') => return Some(GameEvent::SelectCategory(Category::Animals)),
            KeyCode::Char('2') => return Some(GameEvent::SelectCategory(Category::Movies)),
            KeyCode::Char('3') => return Some(GameEvent::SelectCategory(Category::Professions)),
            KeyCode::Char('s') => return Some(GameEvent::OpenSettings),
            _ => {}
        }

        match NavigationAction::from_key(key) {
            NavigationAction::Up => self.select_previous(),
            NavigationAction::Down | NavigationAction::Next => self.select_next(),
            NavigationAction::Select => return Some(self.selected_item().event()),
            _ => {}
        }
        None
    }

    /// Render the menu screen
    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(2), // Record
                Constraint::Min(6),    // Menu
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        let title = Paragraph::new("🎭 Juego de Charadas")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, chunks[0]);

        let record = Paragraph::new(format!("🏆 Tu récord es: {}", state.high_score))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(record, chunks[1]);

        self.render_menu(f, chunks[2]);

        let help = help_bar(&[
            ("↑↓", "Navigate"),
            ("Enter", "Select"),
            ("1-3", "Category"),
            ("S", "Settings"),
            ("Q", "Quit"),
        ]);
        f.render_widget(help, chunks[3]);
    }

    fn render_menu(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = MenuItem::all()
            .iter()
            .map(|item| ListItem::new(item.label()))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Elige una categoría"),
            )
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_menu_navigation_wraps() {
        let mut screen = MenuScreen::new();
        assert_eq!(screen.selected_item(), MenuItem::Play(Category::Animals));

        screen.select_previous();
        assert_eq!(screen.selected_item(), MenuItem::Settings);

        screen.select_next();
        screen.select_next();
        assert_eq!(screen.selected_item(), MenuItem::Play(Category::Movies));
    }

    #[test]
    fn test_enter_emits_selected_event() {
        let mut screen = MenuScreen::new();
        assert_eq!(screen.handle_key_event(key(KeyCode::Down)), None);
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Enter)),
            Some(GameEvent::SelectCategory(Category::Movies))
        );

        screen.handle_key_event(key(KeyCode::Up));
        screen.handle_key_event(key(KeyCode::Up));
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Enter)),
            Some(GameEvent::OpenSettings)
        );
    }

    #[test]
    fn test_shortcuts() {
        let mut screen = MenuScreen::new();
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Char('3'))),
            Some(GameEvent::SelectCategory(Category::Professions))
        );
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Char('s'))),
            Some(GameEvent::OpenSettings)
        );
    }
}
