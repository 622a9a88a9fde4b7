use owo_colors::OwoColorize;

use super::formatter::{format_points, get_terminal_width, truncate_name};
use crate::gradient;
use crate::scoring::{field_max_total, TeamResult};
use crate::snapshot::Quiz;

const DEFAULT_BAR_WIDTH: usize = 40;
const MAX_LABEL_NAME: usize = 20;

/// Format totals as a horizontal bar chart, one bar per team in rank
/// order, scaled against the theoretical maximum total so half-full
/// bars mean something. Bars take the same gradient color as the board.
pub fn format_chart(quiz: &Quiz, results: &[TeamResult], use_colors: bool) -> String {
    if results.is_empty() {
        return "No teams to chart yet.".to_string();
    }

    let settings = &quiz.settings;
    let max_total = field_max_total(&quiz.rounds, settings);
    let field_size = results.len();

    let labels: Vec<String> = results
        .iter()
        .map(|r| {
            format!(
                "{:>2}. #{:<2} {}",
                r.rank,
                r.display_nr,
                truncate_name(&r.name, MAX_LABEL_NAME)
            )
        })
        .collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let value_width = results
        .iter()
        .map(|r| format_points(r.total, settings.scale_conversion_enabled).chars().count())
        .max()
        .unwrap_or(0);

    // Fit the bar into whatever terminal is left after label and value
    let bar_width = get_terminal_width()
        .map(|w| w.saturating_sub(label_width + value_width + 4).clamp(10, 80))
        .unwrap_or(DEFAULT_BAR_WIDTH);

    let mut lines = Vec::with_capacity(results.len() + 2);
    for (result, label) in results.iter().zip(&labels) {
        let fraction = if max_total > 0.0 {
            (result.total / max_total).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let filled = (fraction * bar_width as f64).round() as usize;
        let bar: String = "█".repeat(filled) + &"░".repeat(bar_width - filled);
        let value = format_points(result.total, settings.scale_conversion_enabled);

        let line = if use_colors {
            let c = gradient::color_for(result.rank, field_size, settings.gradient_enabled);
            format!(
                "{:<label_width$}  {} {:>value_width$}",
                label,
                bar.truecolor(c.r, c.g, c.b),
                value,
            )
        } else {
            format!("{:<label_width$}  {} {:>value_width$}", label, bar, value)
        };
        lines.push(line);
    }

    lines.push(String::new());
    lines.push(format!(
        "Max possible total: {}",
        format_points(max_total, settings.scale_conversion_enabled)
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring;
    use crate::snapshot::{QuizSettings, Round, Score, Team};

    fn quiz_with_two_teams() -> Quiz {
        Quiz {
            name: "Finals".to_string(),
            creation_date: None,
            settings: QuizSettings::default(),
            rounds: vec![Round {
                id: 1,
                title: "General".to_string(),
                sequence_nr: 1,
                max_score: 20.0,
                exclude_from_scale: false,
                is_tiebreak: false,
            }],
            teams: vec![
                Team {
                    id: 1,
                    display_nr: 1,
                    name: "Full Marks".to_string(),
                    excluded: false,
                },
                Team {
                    id: 2,
                    display_nr: 2,
                    name: "Half Marks".to_string(),
                    excluded: false,
                },
            ],
            scores: vec![
                Score {
                    round_id: 1,
                    team_id: 1,
                    points: 20.0,
                },
                Score {
                    round_id: 1,
                    team_id: 2,
                    points: 10.0,
                },
            ],
        }
    }

    #[test]
    fn test_chart_empty_field() {
        let mut quiz = quiz_with_two_teams();
        quiz.teams.clear();
        assert_eq!(format_chart(&quiz, &[], false), "No teams to chart yet.");
    }

    #[test]
    fn test_chart_bars_scale_with_totals() {
        let quiz = quiz_with_two_teams();
        let results = scoring::rank(&quiz.teams, &quiz.rounds, &quiz.scores, &quiz.settings);
        let chart = format_chart(&quiz, &results, false);

        let lines: Vec<&str> = chart.lines().collect();
        let full_blocks = lines[0].matches('█').count();
        let half_blocks = lines[1].matches('█').count();
        // A full score fills the bar; half the score fills about half
        assert!(full_blocks > half_blocks);
        assert!(half_blocks > 0);
        assert!(lines[0].contains("Full Marks"));
        assert!(chart.contains("Max possible total: 20"));
    }

    #[test]
    fn test_chart_zero_max_total_renders_empty_bars() {
        let mut quiz = quiz_with_two_teams();
        // Only a tiebreak round: nothing contributes to the max total
        quiz.rounds[0].is_tiebreak = true;
        quiz.scores.clear();
        let results = scoring::rank(&quiz.teams, &quiz.rounds, &quiz.scores, &quiz.settings);
        let chart = format_chart(&quiz, &results, false);
        assert_eq!(chart.lines().next().unwrap().matches('█').count(), 0);
    }
}
