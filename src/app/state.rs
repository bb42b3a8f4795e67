//! Application state management
//!
//! Owns the game state and routes every transition between screens. The
//! presentation layer only reads `AppState` and feeds `GameEvent`s in; each
//! call to `ScreenController::handle` returns the `Signal`s it produced.

use crate::config::persistence::SessionSnapshot;
use crate::config::{clamp_round_duration, GameConfig};
use crate::game::{GameSession, RoundTimer, TimerEvent};
use crate::models::{Category, WordBank};
use crate::{COUNTDOWN_SECONDS, MAX_ROUND_SECONDS};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Text shown when the countdown reaches zero
pub const GO_MARKER: &str = "¡YA!";

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Category picker with the current record
    Menu,
    /// 3, 2, 1 before a round
    Countdown,
    /// Timed round presenting one word at a time
    Playing,
    /// Round finished above the previous record
    WonRecord,
    /// Round finished without beating the record
    LostRecord,
    /// Round length and custom words
    Settings,
}

impl Default for Screen {
    fn default() -> Self {
        Self::Menu
    }
}

impl Screen {
    fn all() -> [Self; 6] {
        [
            Self::Menu,
            Self::Countdown,
            Self::Playing,
            Self::WonRecord,
            Self::LostRecord,
            Self::Settings,
        ]
    }

    /// Stable key used in session snapshots
    pub fn key(&self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Countdown => "cuenta",
            Self::Playing => "juego",
            Self::WonRecord => "nuevoRecord",
            Self::LostRecord => "sinRecord",
            Self::Settings => "ajustes",
        }
    }

    /// Look a screen up by its snapshot key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.key() == key)
    }
}

/// Everything the screens render from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub screen: Screen,
    /// Best score this lifetime; only ever increases
    pub high_score: u32,
    /// Final score of the latest round
    pub last_score: u32,
    pub selected_category: Category,
    /// Always within 30..=60
    pub round_duration_seconds: u32,
    pub word_bank: WordBank,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::Menu,
            high_score: 0,
            last_score: 0,
            selected_category: Category::default(),
            round_duration_seconds: MAX_ROUND_SECONDS,
            word_bank: WordBank::new(),
        }
    }
}

/// Inputs to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    SelectCategory(Category),
    OpenSettings,
    /// Normally produced internally when the countdown expires
    CountdownFinished,
    /// One second of wall time passed for the running timer
    SecondElapsed,
    Pass,
    MarkCorrect,
    /// Normally produced internally when the clock runs out or the words do
    RoundEnded(u32),
    BackToMenu,
    /// Requested round length; clamped into range
    ChangeDuration(i64),
    AddWord(Category, String),
}

/// What a handled event caused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    ScreenChanged { from: Screen, to: Screen },
    CountdownTick(u32),
    CountdownGo,
    CountdownFinished,
    ShowWord(String),
    ClockTick(u32),
    RoundEnded { score: u32, new_record: bool },
    HighScoreChanged(u32),
    DurationChanged(u32),
    WordAdded { category: Category, text: String },
}

/// The screen state machine
#[derive(Debug)]
pub struct ScreenController {
    state: AppState,
    timer: RoundTimer,
    session: Option<GameSession>,
    countdown_seconds: u32,
    countdown_display: Option<u32>,
}

impl ScreenController {
    /// Start at the menu with default settings and word lists
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Start from an existing state
    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            timer: RoundTimer::new(),
            session: None,
            countdown_seconds: COUNTDOWN_SECONDS,
            countdown_display: None,
        }
    }

    /// Start at the menu using the configured round and countdown lengths
    pub fn from_config(config: &GameConfig) -> Self {
        let mut controller = Self::new();
        controller.state.round_duration_seconds =
            clamp_round_duration(i64::from(config.round_duration_seconds));
        controller.countdown_seconds = config.countdown_seconds.max(1);
        controller
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen
    }

    /// The round in progress, if any
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Countdown numeral, or the go marker once it reaches zero
    pub fn countdown_label(&self) -> Option<String> {
        match self.countdown_display? {
            0 => Some(GO_MARKER.to_string()),
            n => Some(n.to_string()),
        }
    }

    /// Identifier of the running timer; `SecondElapsed` events belong to it
    pub fn timer_epoch(&self) -> Option<u64> {
        self.timer.active_epoch()
    }

    /// Capture the restorable fields
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.state)
    }

    /// Replace screen-level fields with a saved snapshot. Any countdown or
    /// round in progress is dropped.
    pub fn restore(&mut self, snapshot: &SessionSnapshot) {
        self.timer.cancel();
        self.session = None;
        self.countdown_display = None;
        snapshot.apply_to(&mut self.state);
        tracing::info!(
            screen = ?self.state.screen,
            high_score = self.state.high_score,
            "session restored"
        );
    }

    /// Apply one event and report what happened
    pub fn handle(&mut self, event: GameEvent) -> Vec<Signal> {
        let mut signals = Vec::new();

        match (self.state.screen, event) {
            (Screen::Menu, GameEvent::SelectCategory(category)) => {
                self.state.selected_category = category;
                self.state.last_score = 0;
                self.enter_countdown(&mut signals);
            }
            (Screen::Menu, GameEvent::OpenSettings) => {
                self.transition_to(Screen::Settings, &mut signals);
            }

            (Screen::Countdown, GameEvent::SecondElapsed) => match self.timer.second_elapsed() {
                Some(TimerEvent::Tick { remaining }) => {
                    self.countdown_display = Some(remaining);
                    signals.push(Signal::CountdownTick(remaining));
                }
                Some(TimerEvent::Expired) => self.finish_countdown(&mut signals),
                None => {}
            },
            (Screen::Countdown, GameEvent::CountdownFinished) => {
                self.timer.cancel();
                self.finish_countdown(&mut signals);
            }

            (Screen::Playing, GameEvent::SecondElapsed) => self.round_second(&mut signals),
            (Screen::Playing, GameEvent::Pass) => {
                if let Some(session) = self.session.as_mut() {
                    session.pass();
                }
                self.after_word_action(&mut signals);
            }
            (Screen::Playing, GameEvent::MarkCorrect) => {
                if let Some(session) = self.session.as_mut() {
                    session.mark_correct();
                }
                self.after_word_action(&mut signals);
            }
            (Screen::Playing, GameEvent::RoundEnded(score)) => {
                self.timer.cancel();
                if let Some(mut session) = self.session.take() {
                    session.finish();
                }
                self.end_round(score, &mut signals);
            }

            (Screen::WonRecord | Screen::LostRecord | Screen::Settings, GameEvent::BackToMenu) => {
                self.transition_to(Screen::Menu, &mut signals);
            }

            (Screen::Settings, GameEvent::ChangeDuration(seconds)) => {
                let duration = clamp_round_duration(seconds);
                if duration != self.state.round_duration_seconds {
                    self.state.round_duration_seconds = duration;
                    signals.push(Signal::DurationChanged(duration));
                }
            }
            (Screen::Settings, GameEvent::AddWord(category, text)) => {
                if let Some(word) = self.state.word_bank.add_word(category, &text) {
                    tracing::info!(category = category.key(), word = %word, "word added");
                    signals.push(Signal::WordAdded {
                        category,
                        text: word,
                    });
                }
            }

            (screen, event) => {
                tracing::debug!(?screen, ?event, "event ignored");
            }
        }

        signals
    }

    fn transition_to(&mut self, to: Screen, signals: &mut Vec<Signal>) {
        let from = self.state.screen;
        if from != to {
            self.state.screen = to;
            tracing::info!(?from, ?to, "screen changed");
            signals.push(Signal::ScreenChanged { from, to });
        }
    }

    fn enter_countdown(&mut self, signals: &mut Vec<Signal>) {
        self.transition_to(Screen::Countdown, signals);
        match self.timer.start(self.countdown_seconds) {
            TimerEvent::Tick { remaining } => {
                self.countdown_display = Some(remaining);
                signals.push(Signal::CountdownTick(remaining));
            }
            TimerEvent::Expired => self.finish_countdown(signals),
        }
    }

    fn finish_countdown(&mut self, signals: &mut Vec<Signal>) {
        self.countdown_display = Some(0);
        signals.push(Signal::CountdownGo);
        signals.push(Signal::CountdownFinished);
        self.enter_playing(signals);
    }

    fn enter_playing(&mut self, signals: &mut Vec<Signal>) {
        self.countdown_display = None;
        self.transition_to(Screen::Playing, signals);

        let category = self.state.selected_category;
        let words = self.state.word_bank.words_for(category);
        let mut session = GameSession::new(category, words, self.state.round_duration_seconds);

        // An empty list ends the round before anything is shown
        if session.is_exhausted() {
            tracing::info!(category = category.key(), "no words to play");
            let score = session.finish().unwrap_or(0);
            self.end_round(score, signals);
            return;
        }

        if let Some(word) = session.current_word() {
            signals.push(Signal::ShowWord(word.to_string()));
        }
        tracing::info!(
            category = category.key(),
            words = session.words().len(),
            seconds = session.round_duration_seconds(),
            "round started"
        );
        self.session = Some(session);

        match self.timer.start(self.state.round_duration_seconds) {
            TimerEvent::Tick { remaining } => signals.push(Signal::ClockTick(remaining)),
            TimerEvent::Expired => self.close_round(signals),
        }
    }

    fn round_second(&mut self, signals: &mut Vec<Signal>) {
        let Some(event) = self.timer.second_elapsed() else {
            return;
        };
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.tick();

        match event {
            TimerEvent::Tick { remaining } => signals.push(Signal::ClockTick(remaining)),
            TimerEvent::Expired => {
                signals.push(Signal::ClockTick(0));
                self.close_round(signals);
            }
        }
    }

    fn after_word_action(&mut self, signals: &mut Vec<Signal>) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        if session.is_exhausted() {
            self.timer.cancel();
            self.close_round(signals);
        } else if let Some(word) = session.current_word() {
            signals.push(Signal::ShowWord(word.to_string()));
        }
    }

    /// Tear the session down and report its score, once
    fn close_round(&mut self, signals: &mut Vec<Signal>) {
        self.timer.cancel();
        if let Some(mut session) = self.session.take() {
            if let Some(score) = session.finish() {
                self.end_round(score, signals);
            }
        }
    }

    fn end_round(&mut self, score: u32, signals: &mut Vec<Signal>) {
        let new_record = score > self.state.high_score;
        self.state.last_score = score;
        if new_record {
            self.state.high_score = score;
            signals.push(Signal::HighScoreChanged(score));
        }
        tracing::info!(score, new_record, high_score = self.state.high_score, "round ended");
        signals.push(Signal::RoundEnded { score, new_record });

        let next = if new_record {
            Screen::WonRecord
        } else {
            Screen::LostRecord
        };
        self.transition_to(next, signals);
    }
}

impl Default for ScreenController {
    fn default() -> Self {
        Self::new()
    }
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Pass / decrease (arrow left, h)
    Left,
    /// Correct / increase (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back (Esc)
    Back,
    /// Next item (Tab)
    Next,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

impl NavigationAction {
    /// Convert keyboard event to navigation action
    pub fn from_key(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => Self::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::Quit,

            KeyCode::Up | KeyCode::Char('k') => Self::Up,
            KeyCode::Down | KeyCode::Char('j') => Self::Down,
            KeyCode::Left | KeyCode::Char('h') => Self::Left,
            KeyCode::Right | KeyCode::Char('l') => Self::Right,

            KeyCode::Enter | KeyCode::Char(' ') => Self::Select,
            KeyCode::Esc => Self::Back,
            KeyCode::Tab => Self::Next,

            _ => Self::None,
        }
    }
}
