mod order;
mod schema;

pub use order::{resequence, rounds_in_order};
pub use schema::{Quiz, QuizSettings, Round, Score, Team};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/quizboard/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("quizboard")
}

/// Get the default snapshot file path (~/.config/quizboard/quiz.yaml)
pub fn get_default_snapshot_path() -> PathBuf {
    get_config_dir().join("quiz.yaml")
}

/// Ensure the config directory exists
pub fn ensure_config_dir() -> Result<()> {
    let config_dir = get_config_dir();
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir).with_context(|| {
            format!(
                "Failed to create config directory at {}",
                config_dir.display()
            )
        })?;
    }
    Ok(())
}

/// Load a quiz snapshot from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to the snapshot. If None, uses the default
///   path (~/.config/quizboard/quiz.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - The snapshot file does not exist
/// - The snapshot file cannot be read
/// - The YAML cannot be parsed
pub fn load_snapshot(path: Option<PathBuf>) -> Result<Quiz> {
    let snapshot_path = path.unwrap_or_else(get_default_snapshot_path);

    if !snapshot_path.exists() {
        anyhow::bail!(
            "Snapshot not found at {}. Pass --snapshot or create ~/.config/quizboard/quiz.yaml",
            snapshot_path.display()
        );
    }

    let content = fs::read_to_string(&snapshot_path)
        .with_context(|| format!("Failed to read snapshot at {}", snapshot_path.display()))?;

    let quiz: Quiz = serde_saphyr::from_str(&content).with_context(|| {
        format!(
            "Failed to parse snapshot: invalid YAML in {}",
            snapshot_path.display()
        )
    })?;

    Ok(quiz)
}
