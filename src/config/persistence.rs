//! Session persistence module
//!
//! Saves and restores the screen-level game state between runs. Values are
//! stored as primitives and names so old snapshots stay readable; the word
//! bank and any round in flight are not persisted.

use crate::app::state::{AppState, Screen};
use crate::config::clamp_round_duration;
use crate::models::Category;
use crate::{CharadasError, Result, APP_NAME, SESSION_FILE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Current snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Restorable view of `AppState`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub screen: String,
    pub high_score: u32,
    #[serde(default)]
    pub last_score: u32,
    pub selected_category: String,
    pub round_duration_seconds: u32,
}

impl SessionSnapshot {
    /// Capture the restorable fields of the app state
    pub fn capture(state: &AppState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            screen: state.screen.key().to_string(),
            high_score: state.high_score,
            last_score: state.last_score,
            selected_category: state.selected_category.key().to_string(),
            round_duration_seconds: state.round_duration_seconds,
        }
    }

    /// Screen to resume on. Rounds in flight are not persisted, so the
    /// countdown and playing screens resume at the menu.
    pub fn resume_screen(&self) -> Screen {
        match Screen::from_key(&self.screen) {
            Some(Screen::Countdown) | Some(Screen::Playing) | None => Screen::Menu,
            Some(screen) => screen,
        }
    }

    /// Write the snapshot into an app state
    pub fn apply_to(&self, state: &mut AppState) {
        state.screen = self.resume_screen();
        state.high_score = self.high_score;
        state.last_score = self.last_score;
        state.selected_category = Category::from_key(&self.selected_category).unwrap_or_else(|| {
            tracing::warn!(
                category = %self.selected_category,
                "unknown category in snapshot"
            );
            Category::default()
        });
        state.round_duration_seconds = clamp_round_duration(i64::from(self.round_duration_seconds));
    }
}

/// Session snapshot storage
#[derive(Debug)]
pub struct SessionStore {
    session_path: PathBuf,
}

impl SessionStore {
    /// Create a store at the standard location
    pub fn new() -> Result<Self> {
        Ok(Self::at(Self::session_file_path()?))
    }

    /// Create a store backed by a specific file
    pub fn at(session_path: PathBuf) -> Self {
        Self { session_path }
    }

    /// Get the standard session file path
    /// Uses $DATA_HOME/charadas/session.json
    pub fn session_file_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            CharadasError::PersistenceError("Unable to determine data directory".to_string())
        })?;

        Ok(data_dir.join(APP_NAME).join(SESSION_FILE))
    }

    /// Load the saved snapshot, if there is one
    pub fn load(&self) -> Result<Option<SessionSnapshot>> {
        if !self.session_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.session_path).map_err(|e| {
            CharadasError::PersistenceError(format!(
                "Failed to read session file {}: {}",
                self.session_path.display(),
                e
            ))
        })?;

        let snapshot: SessionSnapshot = serde_json::from_str(&content).map_err(|e| {
            CharadasError::PersistenceError(format!(
                "Failed to parse session file {}: {}",
                self.session_path.display(),
                e
            ))
        })?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(CharadasError::PersistenceError(format!(
                "Unsupported session version {} in {}",
                snapshot.version,
                self.session_path.display()
            )));
        }

        Ok(Some(snapshot))
    }

    /// Save a snapshot, replacing any previous one
    pub fn save(&self, snapshot: &SessionSnapshot) -> Result<()> {
        if let Some(parent) = self.session_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CharadasError::PersistenceError(format!(
                    "Failed to create session directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = serde_json::to_string_pretty(snapshot)?;

        fs::write(&self.session_path, content).map_err(|e| {
            CharadasError::PersistenceError(format!(
                "Failed to write session file {}: {}",
                self.session_path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %self.session_path.display(), "session saved");
        Ok(())
    }

    /// Delete the saved snapshot
    pub fn clear(&self) -> Result<()> {
        if self.session_path.exists() {
            fs::remove_file(&self.session_path).map_err(|e| {
                CharadasError::PersistenceError(format!(
                    "Failed to remove session file {}: {}",
                    self.session_path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Session file location
    pub fn path(&self) -> &Path {
        &self.session_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_state() -> AppState {
        let mut state = AppState::default();
        state.screen = Screen::LostRecord;
        state.high_score = 7;
        state.last_score = 4;
        state.selected_category = Category::Movies;
        state.round_duration_seconds = 45;
        state
    }

    #[test]
    fn test_load_missing_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::at(temp_dir.path().join("session.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_and_restore() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::at(temp_dir.path().join("charadas").join("session.json"));

        let snapshot = SessionSnapshot::capture(&sample_state());
        assert_eq!(snapshot.screen, "sinRecord");
        assert_eq!(snapshot.selected_category, "Peliculas");
        store.save(&snapshot).unwrap();

        let loaded = store.load().unwrap().expect("snapshot");
        assert_eq!(loaded, snapshot);

        let mut restored = AppState::default();
        loaded.apply_to(&mut restored);
        assert_eq!(restored.screen, Screen::LostRecord);
        assert_eq!(restored.high_score, 7);
        assert_eq!(restored.last_score, 4);
        assert_eq!(restored.selected_category, Category::Movies);
        assert_eq!(restored.round_duration_seconds, 45);
    }

    #[test]
    fn test_transient_screens_resume_at_menu() {
        let mut state = sample_state();
        state.screen = Screen::Playing;
        assert_eq!(SessionSnapshot::capture(&state).resume_screen(), Screen::Menu);
        state.screen = Screen::Countdown;
        assert_eq!(SessionSnapshot::capture(&state).resume_screen(), Screen::Menu);
        state.screen = Screen::Settings;
        assert_eq!(SessionSnapshot::capture(&state).resume_screen(), Screen::Settings);
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let mut snapshot = SessionSnapshot::capture(&sample_state());
        snapshot.screen = "pausa".to_string();
        snapshot.selected_category = "Deportes".to_string();
        snapshot.round_duration_seconds = 5;

        let mut state = AppState::default();
        snapshot.apply_to(&mut state);
        assert_eq!(state.screen, Screen::Menu);
        assert_eq!(state.selected_category, Category::Animals);
        assert_eq!(state.round_duration_seconds, 30);
    }

    #[test]
    fn test_version_mismatch_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::at(temp_dir.path().join("session.json"));
        let mut snapshot = SessionSnapshot::capture(&sample_state());
        snapshot.version = 99;
        store.save(&snapshot).unwrap();

        assert!(matches!(store.load(), Err(CharadasError::PersistenceError(_))));
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        let store = SessionStore::at(path);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_clear() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::at(temp_dir.path().join("session.json"));
        store.save(&SessionSnapshot::capture(&sample_state())).unwrap();
        assert!(store.path().exists());

        store.clear().unwrap();
        assert!(!store.path().exists());
        assert_eq!(store.load().unwrap(), None);
        // clearing twice is fine
        store.clear().unwrap();
    }
}
