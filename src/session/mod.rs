mod state;
mod storage;

pub use state::{QuizSession, SessionState};
pub use storage::{get_session_path, load_session_state, save_session_state};
