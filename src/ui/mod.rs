//! UI rendering components

pub mod content;
pub mod help;
pub mod layout;
pub mod quiz_panel;
pub mod recommend_panel;
pub mod toc_panel;
pub mod topic_list;
pub mod topic_view;

use ratatui::Frame;

use crate::app::state::{AppState, Screen};
use crate::config::Config;
use crate::progress::ProgressStore;
use crate::storage::KeyValueStore;
use crate::topic::TopicPage;

const LIST_HINT: &str = "[j/k] Move    [Enter] Open    [?] Help    [q] Quit";

/// Key hints for the open topic, naming only what the topic offers
fn topic_hint(page: Option<&TopicPage>) -> String {
    let mut hint = String::from("[{/}] Section");
    if page.is_some_and(|p| p.topic().has_quiz()) {
        hint.push_str("    [t] Quiz");
    }
    if page.is_some_and(|p| p.topic().recommender) {
        hint.push_str("    [r] Recommender");
    }
    hint.push_str("    [m] Complete    [Esc] Topics    [?] Help");
    hint
}

/// Main draw function
pub fn draw<S: KeyValueStore>(
    frame: &mut Frame,
    state: &mut AppState,
    store: &ProgressStore<S>,
    config: &Config,
) {
    let theme = config.active_theme();
    let (main_area, status_area) = layout::split_status(frame.area());

    match state.screen {
        Screen::TopicList => {
            topic_list::draw(frame, main_area, state, store, &theme);
            layout::draw_status(frame, status_area, &state.status, LIST_HINT, &theme);
        }
        Screen::Topic | Screen::Quiz | Screen::Recommend => {
            topic_view::draw(frame, main_area, state, &theme);
            let hint = topic_hint(state.page.as_ref());
            layout::draw_status(frame, status_area, &state.status, &hint, &theme);
        }
    }

    match state.screen {
        Screen::Quiz => {
            if let Some(page) = &state.page {
                if let Some(quiz) = page.quiz() {
                    quiz_panel::draw(
                        frame,
                        main_area,
                        quiz,
                        &state.quiz,
                        page.pass_percentage(),
                        &theme,
                    );
                }
            }
        }
        Screen::Recommend => recommend_panel::draw(frame, main_area, &state.recommender, &theme),
        Screen::TopicList | Screen::Topic => {}
    }

    if state.show_help {
        help::draw(frame, main_area, &theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::topic::TopicCatalog;

    fn page(id: &str) -> TopicPage {
        let catalog = TopicCatalog::builtin().unwrap();
        let store = ProgressStore::new(MemoryStore::new());
        TopicPage::open(catalog.get(id).unwrap().clone(), &store, 70)
    }

    #[test]
    fn hint_lists_quiz_for_quiz_topics() {
        let hint = topic_hint(Some(&page("dns")));
        assert!(hint.contains("[t] Quiz"));
        assert!(!hint.contains("[r] Recommender"));
    }

    #[test]
    fn hint_lists_recommender_only_where_hosted() {
        assert!(topic_hint(Some(&page("frameworks"))).contains("[r] Recommender"));
        assert!(!topic_hint(None).contains("[t] Quiz"));
    }
}
