//! TUI screen components
//!
//! One component per screen. Components translate keys into `GameEvent`s
//! and render from the controller's read-only state.

pub mod countdown;
pub mod menu;
pub mod playing;
pub mod record;
pub mod settings;

pub use countdown::CountdownScreen;
pub use menu::{MenuItem, MenuScreen};
pub use playing::PlayingScreen;
pub use record::RecordScreen;
pub use settings::SettingsScreen;

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Help bar built from (key, label) pairs
pub(crate) fn help_bar<'a>(entries: &[(&'a str, &'a str)]) -> Paragraph<'a> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let spans: Vec<Span> = entries
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, key_style),
                Span::raw(format!(" {}  ", label)),
            ]
        })
        .collect();

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
}
