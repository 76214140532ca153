//! Topic reading screen: table of contents beside the content

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::{content, toc_panel};
use crate::app::state::AppState;
use crate::theme::Theme;

/// Minimum width for the contents panel
const TOC_MIN_WIDTH: u16 = 22;

/// Draw the reading screen into `area`
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let chunks = create_layout(area, state.content.show_toc);

    if chunks.len() == 2 {
        if let Some(page) = &state.page {
            toc_panel::draw(frame, chunks[0], page, theme);
        }
    }

    if let Some(content_area) = chunks.last() {
        content::draw(frame, *content_area, state, theme);
    }
}

/// Create the layout constraints based on whether the contents panel shows
fn create_layout(area: Rect, show_toc: bool) -> Vec<Rect> {
    let mut constraints = Vec::new();

    // Contents panel (left): 25% width, min 22 cols
    if show_toc {
        constraints.push(Constraint::Length((area.width / 4).max(TOC_MIN_WIDTH)));
    }

    constraints.push(Constraint::Min(30));

    Layout::default().direction(Direction::Horizontal).constraints(constraints).split(area).to_vec()
}
