//! TUI application module
//!
//! Contains the screen state machine, the terminal wrapper and the screen
//! components that render it.

pub mod app;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::App;
pub use screens::{CountdownScreen, MenuScreen, PlayingScreen, RecordScreen, SettingsScreen};
pub use state::{AppState, GameEvent, NavigationAction, Screen, ScreenController, Signal};
pub use tui::Tui;
