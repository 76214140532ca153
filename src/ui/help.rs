//! Key binding reference overlay

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::layout::centered_rect;
use crate::theme::Theme;

const BINDINGS: &[(&str, &str)] = &[
    ("j/k, ↑/↓", "Move or scroll"),
    ("Ctrl-d/u", "Half page down/up"),
    ("g/G", "Top/bottom"),
    ("{ / }", "Previous/next section"),
    ("Enter", "Open or confirm"),
    ("Esc, h", "Back"),
    ("[", "Toggle contents"),
    ("t", "Take the quiz"),
    ("r", "Open the recommender"),
    ("m", "Mark topic complete"),
    ("1-9", "Answer a quiz question"),
    ("?", "This help"),
    ("q", "Quit"),
];

/// Draw the help overlay
pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    let overlay_area = centered_rect(50, 60, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let mut lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(
                    format!(" {keys:<12}"),
                    Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*what, Style::default().fg(theme.fg_primary)),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Any key closes", Style::default().fg(theme.fg_muted))));

    frame.render_widget(Paragraph::new(lines), inner);
}
