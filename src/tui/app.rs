use crate::reveal::RevealSequencer;
use crate::scoring::TeamResult;
use crate::session::{save_session_state, SessionState};
use crate::snapshot::QuizSettings;
use crate::tui::theme::ThemeColors;
use std::path::PathBuf;
use std::time::Instant;

pub struct App {
    pub quiz_name: String,
    pub results: Vec<TeamResult>,
    pub settings: QuizSettings,
    pub sequencer: RevealSequencer,
    pub theme: ThemeColors,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub session: SessionState,
    pub session_path: PathBuf,
}

impl App {
    pub fn new(
        quiz_name: String,
        results: Vec<TeamResult>,
        settings: QuizSettings,
        sequencer: RevealSequencer,
        theme: ThemeColors,
        session: SessionState,
        session_path: PathBuf,
    ) -> Self {
        Self {
            quiz_name,
            results,
            settings,
            sequencer,
            theme,
            flash_message: None,
            should_quit: false,
            session,
            session_path,
        }
    }

    /// Revealed teams in rank order (the layout the audience reads),
    /// regardless of the order they appeared in.
    pub fn revealed_results(&self) -> Vec<&TeamResult> {
        self.results
            .iter()
            .filter(|r| self.sequencer.is_revealed(r.rank))
            .collect()
    }

    /// Reveal the next team and persist the new progress so a crashed
    /// or closed session resumes where it left off.
    pub fn advance_reveal(&mut self) {
        if self.sequencer.advance() {
            self.persist_progress();
        }
    }

    /// Start the reveal over from a blank screen.
    pub fn restart_reveal(&mut self) {
        self.sequencer.reset();
        self.persist_progress();
        self.show_flash("Reveal restarted".to_string());
    }

    fn persist_progress(&mut self) {
        self.session
            .set_reveal_progress(&self.quiz_name, self.sequencer.revealed_count());
        if let Err(e) = save_session_state(&self.session_path, &self.session) {
            self.show_flash(format!("Could not save progress: {}", e));
        }
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }
}
