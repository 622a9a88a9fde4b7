use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Full scoreboard table (default if no subcommand)
    Board {
        /// Round id to highlight (remembered across runs)
        #[arg(short, long)]
        round: Option<u64>,
    },
    /// Bar chart of team totals against the maximum possible
    Chart,
    /// Podium listing of the best teams
    Top {
        /// How many teams to show
        #[arg(short, long, default_value_t = 3)]
        count: usize,
    },
    /// Interactive reveal: one keypress per team, winner last
    Reveal {
        /// Size of the dramatic top tier
        #[arg(short, long, default_value_t = quizboard::reveal::DEFAULT_TOP_TIER)]
        tier: usize,
        /// Ignore persisted reveal progress and start from zero
        #[arg(long)]
        fresh: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "quizboard")]
#[command(about = "Quiz scoreboard: normalize, rank, and reveal team scores", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the quiz snapshot (defaults to ~/.config/quizboard/quiz.yaml)
    #[arg(short, long, global = true)]
    snapshot: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Board { round: None });

    // Load the snapshot
    let snapshot_path = cli.snapshot.map(PathBuf::from);
    let quiz = match quizboard::snapshot::load_snapshot(snapshot_path) {
        Ok(q) => q,
        Err(e) => {
            eprintln!("Snapshot error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate before the engine sees any of it
    if let Err(errors) = quizboard::scoring::validate_quiz(&quiz) {
        eprintln!("Snapshot validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        eprintln!(
            "Loaded quiz '{}': {} rounds, {} teams, {} score records",
            quiz.name,
            quiz.rounds.len(),
            quiz.teams.len(),
            quiz.scores.len()
        );
        if let Some(created) = quiz.creation_date {
            eprintln!("  created {}", created.format("%Y-%m-%d"));
        }
        if let Some(tiebreak) = quiz.tiebreak_round() {
            eprintln!("  tiebreak round: {}", tiebreak.title);
        }
    }

    // One ranking pass feeds every view
    let results = quizboard::scoring::rank(&quiz.teams, &quiz.rounds, &quiz.scores, &quiz.settings);

    if cli.verbose {
        let field = quizboard::scoring::field_size(&quiz.teams);
        eprintln!(
            "Ranked field of {} teams ({} excluded)",
            field,
            quiz.teams.len() - field
        );
    }

    let session_path = quizboard::session::get_session_path();
    let use_colors = quizboard::output::should_use_colors();

    match command {
        Commands::Board { round } => {
            // Session remembers the round being scored between runs; an
            // unreadable session file never blocks the board.
            let mut session = match quizboard::session::load_session_state(&session_path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Warning: ignoring session state: {}", e);
                    quizboard::session::SessionState::new()
                }
            };

            let highlight = round.or_else(|| session.selected_round(&quiz.name));
            if let Some(round_id) = round {
                session.set_selected_round(&quiz.name, round_id);
                if let Err(e) = quizboard::session::save_session_state(&session_path, &session) {
                    eprintln!("Warning: could not save session state: {}", e);
                }
            }

            let output = quizboard::output::format_board(&quiz, &results, highlight, use_colors);
            println!("{}", output);
        }
        Commands::Chart => {
            let output = quizboard::output::format_chart(&quiz, &results, use_colors);
            println!("{}", output);
        }
        Commands::Top { count } => {
            let output =
                quizboard::output::format_top(&results, count, &quiz.settings, use_colors);
            println!("{}", output);
        }
        Commands::Reveal { tier, fresh } => {
            let session = match quizboard::session::load_session_state(&session_path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Warning: ignoring session state: {}", e);
                    quizboard::session::SessionState::new()
                }
            };

            let revealed = if fresh {
                0
            } else {
                session.reveal_progress(&quiz.name)
            };
            let sequencer =
                quizboard::reveal::RevealSequencer::with_progress(results.len(), tier, revealed);

            if cli.verbose && revealed > 0 {
                eprintln!("Resuming reveal at {} teams; use --fresh to restart", revealed);
            }

            let theme = quizboard::tui::ThemeColors::for_theme(quizboard::tui::resolve_theme());
            let app = quizboard::tui::App::new(
                quiz.name.clone(),
                results,
                quiz.settings.clone(),
                sequencer,
                theme,
                session,
                session_path,
            );

            if let Err(e) = quizboard::tui::run_tui(app).await {
                eprintln!("TUI error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
