//! Main application controller
//!
//! Runs the render/input loop, forwards clock pulses to the state machine
//! and saves the session on exit.

use crate::{
    app::{
        screens::{CountdownScreen, MenuScreen, PlayingScreen, RecordScreen, SettingsScreen},
        state::{GameEvent, NavigationAction, Screen, ScreenController},
        tui::Tui,
    },
    config::{persistence::SessionStore, GameConfig},
    game::{Metronome, Pulse},
    CharadasError, Result,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Game state machine
    controller: ScreenController,
    config: GameConfig,
    /// Snapshot storage, when session restore is enabled
    session_store: Option<SessionStore>,
    /// Screen components
    menu_screen: MenuScreen,
    countdown_screen: CountdownScreen,
    playing_screen: PlayingScreen,
    record_screen: RecordScreen,
    settings_screen: SettingsScreen,
    /// One-second clock for the round timer
    metronome: Metronome,
    pulse_rx: mpsc::Receiver<Pulse>,
    should_quit: bool,
}

impl App {
    /// Create a new application instance from the config file
    pub fn new() -> Result<Self> {
        Self::with_config(GameConfig::load()?)
    }

    /// Create a new application instance with explicit settings
    pub fn with_config(config: GameConfig) -> Result<Self> {
        let session_store = if config.restore_session {
            Some(SessionStore::new()?)
        } else {
            None
        };
        let (metronome, pulse_rx) = Metronome::new(Duration::from_secs(1));
        let tui = Tui::new(config.tick_rate())
            .map_err(|e| CharadasError::TuiError(format!("Failed to open terminal: {}", e)))?;

        Ok(Self {
            tui,
            controller: ScreenController::from_config(&config),
            config,
            session_store,
            menu_screen: MenuScreen::new(),
            countdown_screen: CountdownScreen::new(),
            playing_screen: PlayingScreen::new(),
            record_screen: RecordScreen::new(),
            settings_screen: SettingsScreen::new(),
            metronome,
            pulse_rx,
            should_quit: false,
        })
    }

    /// Initialize the terminal and restore the previous session
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;

        if let Some(store) = &self.session_store {
            match store.load() {
                Ok(Some(snapshot)) => self.controller.restore(&snapshot),
                Ok(None) => {}
                Err(e) => tracing::warn!(error = %e, "ignoring saved session"),
            }
        }
        tracing::info!(
            round_seconds = self.controller.state().round_duration_seconds,
            countdown_seconds = self.config.countdown_seconds,
            "charadas started"
        );
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.should_quit {
            self.drain_pulses();
            self.metronome.follow(self.controller.timer_epoch());
            self.draw()?;
            self.handle_events()?;
        }
        self.shutdown()
    }

    /// Current game state machine
    pub fn controller(&self) -> &ScreenController {
        &self.controller
    }

    /// Forward pulses that belong to the running timer
    fn drain_pulses(&mut self) {
        while let Ok(pulse) = self.pulse_rx.try_recv() {
            if Some(pulse.epoch) == self.controller.timer_epoch() {
                self.dispatch(GameEvent::SecondElapsed);
            } else {
                tracing::debug!(epoch = pulse.epoch, "stale pulse dropped");
            }
        }
    }

    fn dispatch(&mut self, event: GameEvent) {
        for signal in self.controller.handle(event) {
            tracing::debug!(?signal, "signal");
        }
        // a new timer must not wait for the next loop pass to get its clock
        self.metronome.follow(self.controller.timer_epoch());
    }

    /// Draw the current screen
    fn draw(&mut self) -> Result<()> {
        let controller = &self.controller;
        let menu_screen = &mut self.menu_screen;
        let countdown_screen = &self.countdown_screen;
        let playing_screen = &self.playing_screen;
        let record_screen = &self.record_screen;
        let settings_screen = &self.settings_screen;

        self.tui.draw(|f| {
            let state = controller.state();
            match state.screen {
                Screen::Menu => menu_screen.render(f, state),
                Screen::Countdown => {
                    let label = controller.countdown_label().unwrap_or_default();
                    countdown_screen.render(f, &label);
                }
                Screen::Playing => {
                    if let Some(session) = controller.session() {
                        playing_screen.render(f, session);
                    }
                }
                Screen::WonRecord | Screen::LostRecord => record_screen.render(f, state),
                Screen::Settings => settings_screen.render(f, state),
            }
        })?;
        Ok(())
    }

    /// Handle keyboard events and update state
    fn handle_events(&mut self) -> Result<()> {
        let Some(key) = self.tui.next_key()? else {
            return Ok(());
        };

        if self.is_quit_key(key) {
            self.should_quit = true;
            return Ok(());
        }

        let event = match self.controller.screen() {
            Screen::Menu => self.menu_screen.handle_key_event(key),
            Screen::Countdown => None,
            Screen::Playing => self.playing_screen.handle_key_event(key),
            Screen::WonRecord | Screen::LostRecord => self.record_screen.handle_key_event(key),
            Screen::Settings => self
                .settings_screen
                .handle_key_event(key, self.controller.state()),
        };

        if let Some(event) = event {
            self.dispatch(event);
        }
        Ok(())
    }

    /// Settings takes free text, so only Ctrl+C quits there
    fn is_quit_key(&self, key: KeyEvent) -> bool {
        if self.controller.screen() == Screen::Settings {
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
        } else {
            NavigationAction::from_key(key) == NavigationAction::Quit
        }
    }

    /// Stop the clock, save the session and give the terminal back
    fn shutdown(&mut self) -> Result<()> {
        self.metronome.stop();

        if let Some(store) = &self.session_store {
            if let Err(e) = store.save(&self.controller.snapshot()) {
                tracing::warn!(error = %e, "failed to save session");
            }
        }
        tracing::info!(
            high_score = self.controller.state().high_score,
            "charadas finished"
        );

        self.tui.restore()?;
        Ok(())
    }
}
