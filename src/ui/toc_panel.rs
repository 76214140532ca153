//! Table of contents panel

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme::Theme;
use crate::topic::TopicPage;

/// One visible row of the table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TocRow {
    Group { name: String, expanded: bool },
    Section { title: String, current: bool },
}

/// Rows to show for `page`: every group header, plus the sections of the
/// expanded group
pub fn toc_rows(page: &TopicPage) -> Vec<TocRow> {
    let mut rows = Vec::new();
    let current = page.current_section();

    for group in page.toc().groups() {
        let expanded = page.accordion().is_expanded(&group.name);
        rows.push(TocRow::Group { name: group.name.clone(), expanded });

        if expanded {
            for id in group.section_ids() {
                let title = page.topic().section(id).map_or(id, |s| s.title.as_str());
                rows.push(TocRow::Section { title: title.to_string(), current: current == Some(id) });
            }
        }
    }

    rows
}

/// Draw the table of contents for the open topic
pub fn draw(frame: &mut Frame, area: Rect, page: &TopicPage, theme: &Theme) {
    let block = Block::default()
        .title(" Contents ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = toc_rows(page)
        .into_iter()
        .map(|row| match row {
            TocRow::Group { name, expanded } => {
                let icon = if expanded { "▼" } else { "▶" };
                let style = if expanded {
                    Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.fg_secondary)
                };
                Line::from(Span::styled(format!("{icon} {name}"), style))
            }
            TocRow::Section { title, current } => {
                let style = if current {
                    Style::default()
                        .fg(theme.bg_primary)
                        .bg(theme.accent_primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.fg_secondary)
                };
                Line::from(Span::styled(format!("   {title}"), style))
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::ProgressStore;
    use crate::storage::MemoryStore;
    use crate::topic::TopicCatalog;

    fn dns_page() -> TopicPage {
        let catalog = TopicCatalog::builtin().unwrap();
        let topic = catalog.get("dns").unwrap().clone();
        TopicPage::open(topic, &ProgressStore::new(MemoryStore::new()), 70)
    }

    #[test]
    fn only_expanded_group_lists_sections() {
        let page = dns_page();
        let rows = toc_rows(&page);

        assert_eq!(rows[0], TocRow::Group { name: "Basics".into(), expanded: true });
        assert!(matches!(&rows[1], TocRow::Section { current: true, .. }));
        assert!(matches!(&rows[2], TocRow::Section { current: false, .. }));
        assert_eq!(rows[3], TocRow::Group { name: "Resolution".into(), expanded: false });
        assert_eq!(rows.len(), 5);
    }
}
