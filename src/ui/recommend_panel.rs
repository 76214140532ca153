//! Framework recommender questionnaire

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::layout::centered_rect;
use crate::app::state::RecommendFormState;
use crate::recommend::Recommendation;
use crate::theme::Theme;

/// Draw the recommender form as a centered overlay
pub fn draw(frame: &mut Frame, area: Rect, form: &RecommendFormState, theme: &Theme) {
    let overlay_area = centered_rect(70, 70, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Framework Recommender ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let mut lines = vec![Line::from("")];

    for (row, (criterion, choice)) in form.table.criteria().iter().zip(&form.choices).enumerate() {
        let focused = row == form.row;
        let label_style = if focused {
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_primary)
        };

        let value = choice
            .and_then(|i| criterion.values.get(i))
            .map_or("(choose)", |v| v.name.as_str());
        let value_style = if choice.is_some() {
            Style::default().fg(theme.fg_primary)
        } else {
            Style::default().fg(theme.fg_muted)
        };

        lines.push(Line::from(vec![
            Span::styled(if focused { " > " } else { "   " }, label_style),
            Span::styled(format!("{:<14}", humanize(&criterion.name)), label_style),
            Span::styled(format!("< {value} >"), value_style),
        ]));
    }

    lines.push(Line::from(""));

    match &form.outcome {
        Some(Ok(rec)) => lines.extend(ranking_lines(rec, theme)),
        Some(Err(e)) => {
            lines.push(Line::from(Span::styled(e.to_string(), Style::default().fg(theme.error))));
        }
        None => {}
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[j/k] Field    [h/l] Change    [Enter] Recommend    [Esc] Back",
        Style::default().fg(theme.fg_muted),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Ranked candidates with their confidence, best first
fn ranking_lines<'a>(rec: &Recommendation, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    if let Some((best, _)) = rec.best() {
        lines.push(Line::from(Span::styled(
            format!("Recommended: {best}"),
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )));
    }

    for (candidate, score) in &rec.ranked {
        let confidence = (rec.confidence(*score) * 100.0).round();
        lines.push(Line::from(Span::styled(
            format!("   {candidate:<10} {score:>2} pts  {confidence:>3.0}%"),
            Style::default().fg(theme.fg_secondary),
        )));
    }

    lines
}

/// `projectSize` -> `Project size`
fn humanize(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    for (i, c) in name.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else if c == '_' || c == '-' {
            out.push(' ');
        } else if c.is_uppercase() {
            out.push(' ');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
