//! Action dispatch
//!
//! Applies an [`Action`] to the application state. Kept free of terminal
//! types so the whole interaction flow can be driven from tests.

use super::input::Action;
use super::state::{AppState, ContentState, QuizUiState, RecommendFormState, Screen};
use crate::config::Config;
use crate::progress::ProgressStore;
use crate::quiz::{AnswerOutcome, QuizState};
use crate::storage::KeyValueStore;
use crate::topic::{ScrollView, TopicPage};

/// Apply `action`, returning true if the app should exit
pub fn handle_action<S: KeyValueStore>(
    state: &mut AppState,
    action: Action,
    store: &mut ProgressStore<S>,
    config: &Config,
) -> bool {
    if action == Action::Quit {
        return true;
    }

    if state.show_help {
        state.show_help = false;
        return false;
    }
    if action == Action::Help {
        state.show_help = true;
        return false;
    }

    match state.screen {
        Screen::TopicList => topic_list_action(state, action, store, config),
        Screen::Topic => topic_action(state, action, store),
        Screen::Quiz => quiz_action(state, action, store),
        Screen::Recommend => recommend_action(state, action),
    }
    false
}

fn topic_list_action<S: KeyValueStore>(
    state: &mut AppState,
    action: Action,
    store: &mut ProgressStore<S>,
    config: &Config,
) {
    let count = state.catalog.len();
    if count == 0 {
        return;
    }

    let list = &mut state.topic_list;
    match action {
        Action::Down => list.selected = (list.selected + 1).min(count - 1),
        Action::Up => list.selected = list.selected.saturating_sub(1),
        Action::Top => list.selected = 0,
        Action::Bottom => list.selected = count - 1,
        Action::Select | Action::Right => open_topic(state, store, config),
        _ => {}
    }
}

/// Open the topic selected in the list
pub fn open_topic<S: KeyValueStore>(
    state: &mut AppState,
    store: &mut ProgressStore<S>,
    config: &Config,
) {
    let Some(topic) = state.catalog.topics().get(state.topic_list.selected).cloned() else {
        return;
    };

    let page = TopicPage::open(topic, store, config.pass_percentage);
    let resume = page.record().scroll_percent;

    state.content = ContentState {
        show_toc: state.content.show_toc,
        resume_percent: (resume > 0.0).then_some(resume),
        ..ContentState::new()
    };
    state.quiz = QuizUiState::default();
    state.recommender = RecommendFormState::default();

    if resume > 0.0 {
        state.status.set_message(format!("Resuming {} at {:.0}%", page.topic().title, resume));
    } else {
        state.status.set_message(page.topic().summary.clone());
    }

    state.page = Some(page);
    state.screen = Screen::Topic;
}

fn topic_action<S: KeyValueStore>(
    state: &mut AppState,
    action: Action,
    store: &mut ProgressStore<S>,
) {
    let half_page = (state.content.visible_height / 2).max(1) as isize;
    let page = state.content.visible_height.max(1) as isize;

    let scrolled = match action {
        Action::Down => state.content.scroll_by(1),
        Action::Up => state.content.scroll_by(-1),
        Action::HalfPageDown => state.content.scroll_by(half_page),
        Action::HalfPageUp => state.content.scroll_by(-half_page),
        Action::PageDown => state.content.scroll_by(page),
        Action::PageUp => state.content.scroll_by(-page),
        Action::Top => state.content.scroll_by(isize::MIN),
        Action::Bottom => state.content.scroll_by(isize::MAX),
        Action::NextSection => jump_section(state, true),
        Action::PrevSection => jump_section(state, false),
        _ => false,
    };

    if scrolled {
        notify_scroll(state, store);
        return;
    }

    match action {
        Action::Back | Action::Left => {
            state.page = None;
            state.status.clear();
            state.screen = Screen::TopicList;
        }
        Action::ToggleToc => state.content.show_toc = !state.content.show_toc,
        Action::TakeQuiz => open_quiz(state),
        Action::OpenRecommender => {
            let hosts = state.page.as_ref().is_some_and(|p| p.topic().recommender);
            if hosts {
                state.screen = Screen::Recommend;
            } else {
                state.status.set_error("This topic has no recommender");
            }
        }
        Action::MarkComplete => {
            if let Some(page) = state.page.as_mut() {
                page.mark_complete(store);
                state.status.set_message(format!("Marked {} complete", page.topic().title));
            }
        }
        _ => {}
    }
}

/// Feed the current scroll position to the open page
pub fn notify_scroll<S: KeyValueStore>(state: &mut AppState, store: &mut ProgressStore<S>) {
    let Some(page) = state.page.as_mut() else {
        return;
    };

    let view = ScrollView {
        scroll_top: state.content.scroll_offset as f64,
        viewport_height: state.content.visible_height as f64,
        document_height: state.content.total_lines as f64,
    };
    page.on_scroll(view, &state.content.sections, store);
}

/// Tell the page about an offset the renderer moved on its own, such as a
/// restored reading position. Returns whether anything was pending.
pub fn sync_pending_scroll<S: KeyValueStore>(
    state: &mut AppState,
    store: &mut ProgressStore<S>,
) -> bool {
    if !std::mem::take(&mut state.content.sync_pending) {
        return false;
    }
    notify_scroll(state, store);
    true
}

fn jump_section(state: &mut AppState, forward: bool) -> bool {
    let Some(page) = state.page.as_ref() else {
        return false;
    };
    let sections = &state.content.sections;
    let current = page
        .current_section()
        .and_then(|id| sections.iter().position(|s| s.id == id))
        .unwrap_or(0);

    let target = if forward {
        (current + 1).min(sections.len().saturating_sub(1))
    } else {
        current.saturating_sub(1)
    };

    let Some(id) = sections.get(target).map(|s| s.id.clone()) else {
        return false;
    };
    state.content.scroll_to_section(&id)
}

fn open_quiz(state: &mut AppState) {
    let Some(quiz) = state.page.as_ref().and_then(|p| p.quiz()) else {
        state.status.set_error("This topic has no quiz");
        return;
    };

    state.quiz = QuizUiState { cursor: 0, feedback: quiz.feedback(quiz.current_index()) };
    state.screen = Screen::Quiz;
}

fn quiz_action<S: KeyValueStore>(
    state: &mut AppState,
    action: Action,
    store: &mut ProgressStore<S>,
) {
    if action == Action::Back {
        state.screen = Screen::Topic;
        return;
    }

    let Some(page) = state.page.as_mut() else {
        state.screen = Screen::TopicList;
        return;
    };
    let Some(quiz) = page.quiz_mut() else {
        state.screen = Screen::Topic;
        return;
    };

    if quiz.is_completed() {
        if action == Action::Select {
            page.retake_quiz();
            state.quiz = QuizUiState::default();
        }
        return;
    }

    if state.quiz.feedback.is_some() {
        if matches!(action, Action::Select | Action::Right) {
            match quiz.advance() {
                Ok(QuizState::Completed(_)) => {
                    if let Some(result) = page.record_quiz_result(store) {
                        let verdict = if result.passed(page.pass_percentage()) {
                            "passed"
                        } else {
                            "not passed yet"
                        };
                        state.status.set_message(format!(
                            "Quiz {}: {}/{} ({}%)",
                            verdict,
                            result.score,
                            result.total,
                            result.percentage()
                        ));
                    }
                }
                Ok(QuizState::InProgress { .. }) => {}
                Err(e) => {
                    tracing::warn!("Failed to advance quiz: {}", e);
                    state.status.set_error(e.to_string());
                }
            }
            state.quiz = QuizUiState::default();
        }
        return;
    }

    let option_count = quiz.current_question().map_or(0, |q| q.options().len());
    let choice = match action {
        Action::Down => {
            state.quiz.cursor = (state.quiz.cursor + 1).min(option_count.saturating_sub(1));
            None
        }
        Action::Up => {
            state.quiz.cursor = state.quiz.cursor.saturating_sub(1);
            None
        }
        Action::Select => Some(state.quiz.cursor),
        Action::Choose(i) => Some(i),
        _ => None,
    };

    if let Some(option) = choice {
        match quiz.select_answer(option) {
            Ok(AnswerOutcome::Answered(feedback)) => {
                state.quiz.cursor = option;
                state.quiz.feedback = Some(feedback);
            }
            Ok(AnswerOutcome::AlreadyAnswered) => {
                state.quiz.feedback = quiz.feedback(quiz.current_index());
            }
            Err(e) => {
                tracing::warn!("Rejected quiz answer {}: {}", option, e);
                state.status.set_error(e.to_string());
            }
        }
    }
}

fn recommend_action(state: &mut AppState, action: Action) {
    let form = &mut state.recommender;
    let rows = form.choices.len();

    match action {
        Action::Down => form.row = (form.row + 1).min(rows.saturating_sub(1)),
        Action::Up => form.row = form.row.saturating_sub(1),
        Action::Right => form.cycle(true),
        Action::Left => form.cycle(false),
        Action::Select => form.submit(),
        Action::Back => state.screen = Screen::Topic,
        _ => {}
    }
}
