use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::gradient;
use crate::scoring::{conversion_applies, convert, converted_max_score, raw_points, TeamResult};
use crate::snapshot::{rounds_in_order, Quiz};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
pub fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Format a point value for display. Converted values always get two
/// decimals (they are rarely whole); raw values print the way they were
/// entered, whole numbers without a decimal tail.
pub fn format_points(value: f64, scaled: bool) -> String {
    if scaled || value.fract().abs() > 1e-9 {
        format!("{:.2}", value)
    } else {
        format!("{:.0}", value)
    }
}

/// Ordinal label for a rank: 1st, 2nd, 3rd, Nth.
pub fn ordinal(rank: u32) -> String {
    match rank {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        n => format!("{}th", n),
    }
}

/// Truncate a team name to fit a column, accounting for Unicode
pub fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

const MAX_NAME_WIDTH: usize = 24;

/// Format the full scoreboard table: rank, team nr, name, one column
/// per round in running order, and the converted total.
///
/// The rank cell carries the gradient color so the table agrees with
/// the chart. `highlight_round` marks one round column (the round
/// currently being scored); the marker is a plain `*` so it survives
/// pipes without colors.
pub fn format_board(
    quiz: &Quiz,
    results: &[TeamResult],
    highlight_round: Option<u64>,
    use_colors: bool,
) -> String {
    if results.is_empty() {
        return "No teams to rank yet.".to_string();
    }

    let settings = &quiz.settings;
    let rounds = rounds_in_order(&quiz.rounds);
    let field_size = results.len();

    let mut headers: Vec<String> = vec!["Rank".into(), "Nr".into(), "Team".into()];
    for round in &rounds {
        let marker = if highlight_round == Some(round.id) {
            "*"
        } else {
            ""
        };
        let max = converted_max_score(round, settings);
        headers.push(format!(
            "{}{} (max {})",
            round.title,
            marker,
            format_points(max, false)
        ));
    }
    headers.push("Total".into());

    // Plain cell text first; widths are computed before any color codes
    // are wrapped around the padded cells.
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(results.len());
    for result in results {
        let mut row = vec![
            result.rank.to_string(),
            result.display_nr.to_string(),
            truncate_name(&result.name, MAX_NAME_WIDTH),
        ];
        for round in &rounds {
            let raw = raw_points(result.team_id, round.id, &quiz.scores);
            let scaled = conversion_applies(round, settings);
            row.push(format_points(convert(raw, round, settings), scaled));
        }
        row.push(format_points(
            result.total,
            settings.scale_conversion_enabled,
        ));
        rows.push(row);
    }

    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i], i >= 3))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(if use_colors {
        header_line.bold().to_string()
    } else {
        header_line
    });
    lines.push("-".repeat(widths.iter().sum::<usize>() + 2 * (columns - 1)));

    for (result, row) in results.iter().zip(&rows) {
        let mut cells = Vec::with_capacity(columns);
        for (i, cell) in row.iter().enumerate() {
            let padded = pad(cell, widths[i], i >= 3);
            if !use_colors {
                cells.push(padded);
                continue;
            }
            if i == 0 {
                let c = gradient::color_for(result.rank, field_size, settings.gradient_enabled);
                cells.push(padded.truecolor(c.r, c.g, c.b).bold().to_string());
            } else if i == 2 || i == columns - 1 {
                cells.push(padded.bold().to_string());
            } else {
                cells.push(padded);
            }
        }
        lines.push(cells.join("  "));
    }

    lines.join("\n")
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    let len = text.chars().count();
    let fill = " ".repeat(width.saturating_sub(len));
    if right_align {
        format!("{}{}", fill, text)
    } else {
        format!("{}{}", text, fill)
    }
}
