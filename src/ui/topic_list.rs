//! Topic picker shown on startup

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::state::AppState;
use crate::progress::{ProgressRecord, ProgressStore};
use crate::storage::KeyValueStore;
use crate::theme::Theme;

/// Status indicators for topics
const STATUS_NOT_STARTED: &str = "○";
const STATUS_IN_PROGRESS: &str = "●";
const STATUS_COMPLETED: &str = "✓";

/// Draw the list of topics with their stored progress
pub fn draw<S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    store: &ProgressStore<S>,
    theme: &Theme,
) {
    let block = Block::default()
        .title(" Topics ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.catalog.is_empty() {
        let msg = Paragraph::new("No topics available")
            .style(Style::default().fg(theme.fg_muted))
            .wrap(Wrap { trim: true });
        frame.render_widget(msg, inner);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();

    for (index, topic) in state.catalog.topics().iter().enumerate() {
        let record = store.load(&topic.id);
        let status = topic_status(record.as_ref());
        let percent = record.as_ref().map_or(0.0, |r| r.scroll_percent);
        let selected = index == state.topic_list.selected;

        let title_style = if selected {
            Style::default().fg(theme.bg_primary).bg(theme.accent_primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_primary)
        };
        let status_style = match status {
            STATUS_COMPLETED => Style::default().fg(theme.success),
            STATUS_IN_PROGRESS => Style::default().fg(theme.accent_secondary),
            _ => Style::default().fg(theme.fg_muted),
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {status} "), status_style),
            Span::styled(format!("{} ", topic.title), title_style),
            Span::styled(format!(" {percent:.0}%"), Style::default().fg(theme.fg_muted)),
        ]));
        if !topic.summary.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("   {}", topic.summary),
                Style::default().fg(theme.fg_secondary),
            )));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Get the status indicator for a topic based on its record
pub fn topic_status(record: Option<&ProgressRecord>) -> &'static str {
    match record {
        Some(r) if r.completed => STATUS_COMPLETED,
        Some(r) if r.is_started() => STATUS_IN_PROGRESS,
        _ => STATUS_NOT_STARTED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_not_started_without_record() {
        assert_eq!(topic_status(None), STATUS_NOT_STARTED);
    }

    #[test]
    fn status_follows_record() {
        let mut record = ProgressRecord::new("dns");
        assert_eq!(topic_status(Some(&record)), STATUS_NOT_STARTED);

        record.scroll_percent = 40.0;
        assert_eq!(topic_status(Some(&record)), STATUS_IN_PROGRESS);

        record.completed = true;
        assert_eq!(topic_status(Some(&record)), STATUS_COMPLETED);
    }
}
