//! Per-round game session
//!
//! Tracks the word position, score and remaining time for one round. A
//! round is over on whichever comes first: the clock reaching zero or the
//! word list running out. The final score is handed out exactly once.

use crate::models::Category;

/// State of a single round
#[derive(Debug, Clone)]
pub struct GameSession {
    category: Category,
    words: Vec<String>,
    current_index: usize,
    score: u32,
    remaining_seconds: u32,
    round_duration_seconds: u32,
    reported: bool,
}

impl GameSession {
    /// Start a round over a snapshot of the category's words
    pub fn new(category: Category, words: Vec<String>, duration_seconds: u32) -> Self {
        Self {
            category,
            words,
            current_index: 0,
            score: 0,
            remaining_seconds: duration_seconds,
            round_duration_seconds: duration_seconds,
            reported: false,
        }
    }

    /// Skip the current word without scoring
    pub fn pass(&mut self) {
        self.current_index += 1;
    }

    /// Score the current word and move on
    pub fn mark_correct(&mut self) {
        self.score += 1;
        self.current_index += 1;
    }

    /// One second of the round elapsed. Returns true once the clock is out.
    pub fn tick(&mut self) -> bool {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.is_expired()
    }

    /// No words left to show
    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.words.len()
    }

    /// Clock reached zero
    pub fn is_expired(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Hand out the final score. Only the first call returns it.
    pub fn finish(&mut self) -> Option<u32> {
        if self.reported {
            return None;
        }
        self.reported = true;
        Some(self.score)
    }

    /// Whether the final score was already reported
    pub fn is_finished(&self) -> bool {
        self.reported
    }

    /// Word currently on screen
    pub fn current_word(&self) -> Option<&str> {
        self.words.get(self.current_index).map(String::as_str)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn round_duration_seconds(&self) -> u32 {
        self.round_duration_seconds
    }

    /// Fraction of the round still left, 0.0 to 1.0
    pub fn time_ratio(&self) -> f64 {
        if self.round_duration_seconds == 0 {
            0.0
        } else {
            f64::from(self.remaining_seconds) / f64::from(self.round_duration_seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("word{}", i)).collect()
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new(Category::Movies, words(3), 45);
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.remaining_seconds(), 45);
        assert_eq!(session.current_word(), Some("word0"));
        assert!(!session.is_exhausted());
    }

    #[test]
    fn test_score_counts_correct_marks() {
        let mut session = GameSession::new(Category::Animals, words(10), 60);
        let actions = [true, false, true, true, false, false, true];
        for correct in actions {
            if correct {
                session.mark_correct();
            } else {
                session.pass();
            }
        }
        assert_eq!(session.score(), 4);
        assert_eq!(session.current_index(), actions.len());
        assert_eq!(session.current_word(), Some("word7"));
    }

    #[test]
    fn test_exhaustion() {
        let mut session = GameSession::new(Category::Animals, words(2), 60);
        session.pass();
        assert!(!session.is_exhausted());
        session.mark_correct();
        assert!(session.is_exhausted());
        assert_eq!(session.current_word(), None);
    }

    #[test]
    fn test_empty_words_exhausted_from_start() {
        let session = GameSession::new(Category::Professions, Vec::new(), 60);
        assert!(session.is_exhausted());
        assert_eq!(session.current_word(), None);
    }

    #[test]
    fn test_tick_until_expired() {
        let mut session = GameSession::new(Category::Animals, words(1), 2);
        assert!(!session.tick());
        assert_eq!(session.remaining_seconds(), 1);
        assert!(session.tick());
        assert!(session.is_expired());
        // stays at zero
        assert!(session.tick());
        assert_eq!(session.remaining_seconds(), 0);
    }

    #[test]
    fn test_finish_reports_once() {
        let mut session = GameSession::new(Category::Animals, words(5), 60);
        session.mark_correct();
        assert_eq!(session.finish(), Some(1));
        assert!(session.is_finished());
        assert_eq!(session.finish(), None);
    }

    #[test]
    fn test_time_ratio() {
        let mut session = GameSession::new(Category::Animals, words(5), 40);
        assert_eq!(session.time_ratio(), 1.0);
        for _ in 0..10 {
            session.tick();
        }
        assert!((session.time_ratio() - 0.75).abs() < f64::EPSILON);
    }
}
