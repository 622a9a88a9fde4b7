use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::output::{format_points, ordinal};
use crate::tui::app::App;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 6 || area.width < 30 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + List(fill) + Hint(1) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_reveal_list(frame, chunks[1], app);
    render_hint(frame, chunks[2], app);
    render_status_bar(frame, chunks[3], app);
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!(
        "{}/{} revealed",
        app.sequencer.revealed_count(),
        app.sequencer.field_size()
    );
    let left_len = app.quiz_name.chars().count();
    let padding = (area.width as usize).saturating_sub(left_len + progress.len());

    let line = Line::from(vec![
        Span::styled(app.quiz_name.clone(), app.theme.title_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(progress, Style::default().fg(app.theme.muted)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_reveal_list(frame: &mut Frame, area: Rect, app: &App) {
    let revealed = app.revealed_results();

    if revealed.is_empty() {
        let placeholder = Paragraph::new("Nothing revealed yet. Press space to begin...")
            .style(app.theme.hint_style)
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, area);
        return;
    }

    let name_width = revealed
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = Vec::with_capacity(revealed.len() + 1);
    for result in &revealed {
        let color = app
            .theme
            .row_color(result.rank, app.settings.gradient_enabled);
        let is_winner = result.rank == 1;

        let rank_style = if is_winner {
            Style::default().fg(color).bold()
        } else {
            Style::default().fg(color)
        };
        let name_style = if is_winner {
            Style::default().fg(app.theme.text).bold()
        } else {
            Style::default().fg(app.theme.text)
        };

        let trophy = if is_winner { "  🏆" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>5}", ordinal(result.rank)), rank_style),
            Span::styled(format!("  #{:<3}", result.display_nr), rank_style),
            Span::styled(format!("{:<name_width$}", result.name), name_style),
            Span::styled(
                format!(
                    "  {} points",
                    format_points(result.total, app.settings.scale_conversion_enabled)
                ),
                rank_style,
            ),
            Span::raw(trophy),
        ]));
    }

    if app.sequencer.is_complete() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "All teams revealed! 🎉",
            app.theme.hint_style,
        ));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_hint(frame: &mut Frame, area: Rect, app: &App) {
    if app.sequencer.is_complete() {
        return;
    }
    let hint = Paragraph::new("Press space to reveal the next team...")
        .style(app.theme.hint_style)
        .alignment(Alignment::Center);
    frame.render_widget(hint, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    // A flash message takes over the whole bar until it expires
    if let Some((msg, _)) = &app.flash_message {
        let flash = Paragraph::new(msg.clone())
            .style(Style::default().fg(app.theme.flash_error))
            .bg(app.theme.status_bar_bg);
        frame.render_widget(flash, area);
        return;
    }

    let key_style = Style::default().fg(app.theme.status_key_color).bold();
    let text_style = Style::default().fg(app.theme.muted);
    let line = Line::from(vec![
        Span::styled(" space", key_style),
        Span::styled(" reveal  ", text_style),
        Span::styled("r", key_style),
        Span::styled(" restart  ", text_style),
        Span::styled("q", key_style),
        Span::styled(" quit", text_style),
    ]);
    frame.render_widget(Paragraph::new(line).bg(app.theme.status_bar_bg), area);
}
