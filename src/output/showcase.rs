use owo_colors::OwoColorize;

use super::formatter::{format_points, ordinal};
use crate::gradient;
use crate::scoring::TeamResult;
use crate::snapshot::QuizSettings;

/// Format the top of the field as a podium listing: ordinal, team
/// number, name, and total, best first. The top three get their
/// gold/silver/bronze accents when the gradient is enabled; everyone
/// else (and everything with the gradient off) uses the neutral accent.
pub fn format_top(
    results: &[TeamResult],
    count: usize,
    settings: &QuizSettings,
    use_colors: bool,
) -> String {
    if results.is_empty() {
        return "No teams available yet.".to_string();
    }

    let shown = &results[..count.min(results.len())];
    let name_width = shown.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(shown.len());
    for result in shown {
        let trophy = if result.rank == 1 { " 🏆" } else { "" };
        let line = format!(
            "{:>4}  #{:<3} {:<name_width$}  {} points{}",
            ordinal(result.rank),
            result.display_nr,
            result.name,
            format_points(result.total, settings.scale_conversion_enabled),
            trophy,
        );

        if use_colors {
            let accent = if settings.gradient_enabled {
                gradient::podium_color(result.rank).unwrap_or(gradient::NEUTRAL)
            } else {
                gradient::NEUTRAL
            };
            lines.push(line.truecolor(accent.r, accent.g, accent.b).bold().to_string());
        } else {
            lines.push(line);
        }
    }

    lines.join("\n")
}
