use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Presentation state that outlives a single run: which round the
/// operator was looking at and how far a reveal has progressed.
///
/// Explicit, versioned, keyed by quiz name. Views receive values read
/// from here as plain arguments; nothing reads it implicitly mid-render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub version: u32,
    #[serde(default)]
    pub quizzes: HashMap<String, QuizSession>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    #[serde(default)]
    pub selected_round: Option<u64>,
    #[serde(default)]
    pub revealed_count: usize,
    pub updated_at: DateTime<Utc>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Create a new empty session state with version 1
    pub fn new() -> Self {
        Self {
            version: 1,
            quizzes: HashMap::new(),
        }
    }

    /// The round the operator last selected for this quiz, if any.
    pub fn selected_round(&self, quiz_name: &str) -> Option<u64> {
        self.quizzes.get(quiz_name).and_then(|q| q.selected_round)
    }

    /// How many teams a previous reveal session already disclosed.
    pub fn reveal_progress(&self, quiz_name: &str) -> usize {
        self.quizzes
            .get(quiz_name)
            .map(|q| q.revealed_count)
            .unwrap_or(0)
    }

    pub fn set_selected_round(&mut self, quiz_name: &str, round_id: u64) {
        self.entry(quiz_name).selected_round = Some(round_id);
    }

    pub fn set_reveal_progress(&mut self, quiz_name: &str, revealed_count: usize) {
        self.entry(quiz_name).revealed_count = revealed_count;
    }

    /// Drop everything stored for a quiz.
    /// Returns true if there was anything to drop.
    pub fn clear_quiz(&mut self, quiz_name: &str) -> bool {
        self.quizzes.remove(quiz_name).is_some()
    }

    fn entry(&mut self, quiz_name: &str) -> &mut QuizSession {
        let entry = self
            .quizzes
            .entry(quiz_name.to_string())
            .or_insert_with(|| QuizSession {
                selected_round: None,
                revealed_count: 0,
                updated_at: Utc::now(),
            });
        entry.updated_at = Utc::now();
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_empty() {
        let state = SessionState::new();
        assert_eq!(state.version, 1);
        assert!(state.quizzes.is_empty());
        assert_eq!(state.reveal_progress("any"), 0);
        assert_eq!(state.selected_round("any"), None);
    }

    #[test]
    fn test_set_and_read_back() {
        let mut state = SessionState::new();
        state.set_selected_round("Finals", 3);
        state.set_reveal_progress("Finals", 4);
        assert_eq!(state.selected_round("Finals"), Some(3));
        assert_eq!(state.reveal_progress("Finals"), 4);
        // Other quizzes stay untouched
        assert_eq!(state.selected_round("Semis"), None);
    }

    #[test]
    fn test_progress_does_not_clobber_selected_round() {
        let mut state = SessionState::new();
        state.set_selected_round("Finals", 3);
        state.set_reveal_progress("Finals", 2);
        assert_eq!(state.selected_round("Finals"), Some(3));
    }

    #[test]
    fn test_clear_quiz() {
        let mut state = SessionState::new();
        state.set_reveal_progress("Finals", 2);
        assert!(state.clear_quiz("Finals"));
        assert_eq!(state.reveal_progress("Finals"), 0);
        assert!(!state.clear_quiz("Finals"));
    }

    #[test]
    fn test_updated_at_is_touched_on_write() {
        let mut state = SessionState::new();
        state.set_reveal_progress("Finals", 1);
        let first = state.quizzes["Finals"].updated_at;
        state.set_reveal_progress("Finals", 2);
        let second = state.quizzes["Finals"].updated_at;
        assert!(second >= first);
    }
}
