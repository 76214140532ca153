//! Topic content panel
//!
//! Sections are laid out into wrapped lines once per draw. The line index
//! where each section starts, and how many lines it spans, is the geometry
//! fed back into scroll tracking.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph},
};

use crate::app::state::AppState;
use crate::theme::Theme;
use crate::toc::SectionGeometry;
use crate::topic::TopicDefinition;

/// Role of a laid-out line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Body,
    Blank,
}

/// A topic flattened into lines for a given width
#[derive(Debug, Clone, Default)]
pub struct TopicLayout {
    pub lines: Vec<(LineKind, String)>,
    pub sections: Vec<SectionGeometry>,
}

/// Lay out every section of `topic` wrapped to `width` columns
pub fn layout_topic(topic: &TopicDefinition, width: usize) -> TopicLayout {
    let width = width.max(10);
    let mut layout = TopicLayout::default();

    for section in &topic.sections {
        let start = layout.lines.len();

        for title_line in textwrap::wrap(&section.title, width) {
            layout.lines.push((LineKind::Title, title_line.into_owned()));
        }
        layout.lines.push((LineKind::Blank, String::new()));

        for paragraph in section.paragraphs() {
            for line in textwrap::wrap(paragraph, width) {
                layout.lines.push((LineKind::Body, line.into_owned()));
            }
            layout.lines.push((LineKind::Blank, String::new()));
        }

        let height = layout.lines.len() - start;
        layout.sections.push(SectionGeometry::new(section.id.clone(), start as f64, height as f64));
    }

    layout
}

/// Draw the content panel for the open topic
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let Some(page) = &state.page else {
        return;
    };

    let title = match page.current_section().and_then(|id| page.toc().group_of(id)) {
        Some(group) => format!(" {} · {} ", page.topic().title, group),
        None => format!(" {} ", page.topic().title),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [text_area, gauge_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    // Reserve 1 column for scrollbar, 1 for padding
    let content_width = text_area.width.saturating_sub(2) as usize;
    let layout = layout_topic(page.topic(), content_width);
    let percent = page.record().scroll_percent;

    // Update state with content metrics for scroll tracking
    state.content.total_lines = layout.lines.len();
    state.content.visible_height = text_area.height as usize;
    state.content.sections = layout.sections;
    state.content.apply_resume();
    state.content.clamp_scroll();

    let scroll_offset = state.content.scroll_offset;
    let visible_lines: Vec<Line> = layout
        .lines
        .iter()
        .skip(scroll_offset)
        .take(text_area.height as usize)
        .map(|(kind, text)| styled_line(*kind, text, theme))
        .collect();

    let text_rect = Rect { width: text_area.width.saturating_sub(1), ..text_area };
    frame.render_widget(Paragraph::new(visible_lines), text_rect);

    draw_scrollbar(
        frame,
        text_area.x + text_area.width.saturating_sub(1),
        text_area.y,
        text_area.height,
        scroll_offset,
        state.content.max_scroll(),
        theme,
    );

    let gauge = LineGauge::default()
        .filled_style(Style::default().fg(theme.accent_primary))
        .unfilled_style(Style::default().fg(theme.bg_tertiary))
        .label(format!("{:>3.0}% ", percent))
        .ratio((percent / 100.0).clamp(0.0, 1.0));
    frame.render_widget(gauge, gauge_area);
}

fn styled_line<'a>(kind: LineKind, text: &'a str, theme: &Theme) -> Line<'a> {
    let style = match kind {
        LineKind::Title => Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        LineKind::Body => Style::default().fg(theme.fg_primary),
        LineKind::Blank => Style::default(),
    };
    Line::from(Span::styled(text, style))
}

/// Draw a scrollbar indicator
fn draw_scrollbar(
    frame: &mut Frame,
    x: u16,
    y: u16,
    height: u16,
    scroll_offset: usize,
    max_scroll: usize,
    theme: &Theme,
) {
    if max_scroll == 0 || height == 0 {
        return;
    }

    let height = height as usize;
    let thumb_top =
        ((height - 1) as f64 * (scroll_offset as f64 / max_scroll as f64)).round() as usize;

    for i in 0..height {
        let (ch, style) = if i == thumb_top {
            ("█", Style::default().fg(theme.accent_secondary))
        } else {
            ("░", Style::default().fg(theme.bg_tertiary))
        };

        frame.render_widget(
            Paragraph::new(ch).style(style),
            Rect { x, y: y.saturating_add(i as u16), width: 1, height: 1 },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topic::TopicSection;

    fn topic() -> TopicDefinition {
        TopicDefinition {
            id: "t".into(),
            title: "T".into(),
            summary: String::new(),
            toc: vec![],
            sections: vec![
                TopicSection::new("a", "Alpha", "one two three four five six\n\nseven"),
                TopicSection::new("b", "Beta", "short"),
            ],
            quiz: vec![],
            recommender: false,
        }
    }

    #[test]
    fn sections_are_contiguous() {
        let layout = layout_topic(&topic(), 80);
        let a = &layout.sections[0];
        let b = &layout.sections[1];

        assert_eq!(a.offset_top, 0.0);
        assert_eq!(b.offset_top, a.offset_top + a.height);
        assert_eq!((b.offset_top + b.height) as usize, layout.lines.len());
    }

    #[test]
    fn wide_layout_line_counts() {
        let layout = layout_topic(&topic(), 80);
        // title, blank, para, blank, para, blank
        assert_eq!(layout.sections[0].height, 6.0);
        // title, blank, para, blank
        assert_eq!(layout.sections[1].height, 4.0);
        assert_eq!(layout.lines[0], (LineKind::Title, "Alpha".to_string()));
    }

    #[test]
    fn narrow_layout_wraps_body() {
        let wide = layout_topic(&topic(), 80);
        let narrow = layout_topic(&topic(), 10);
        assert!(narrow.lines.len() > wide.lines.len());
        assert!(narrow.lines.iter().all(|(_, l)| l.chars().count() <= 10));
    }
}
