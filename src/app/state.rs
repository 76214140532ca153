//! Application state definitions

use crate::quiz::AnswerFeedback;
use crate::recommend::{Answers, Recommendation, RecommendError, WeightTable, framework_table};
use crate::toc::SectionGeometry;
use crate::topic::{TopicCatalog, TopicPage};

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    TopicList,
    Topic,
    Quiz,
    Recommend,
}

/// Selection in the topic list
#[derive(Debug, Clone, Default)]
pub struct TopicListState {
    pub selected: usize,
}

/// State for content rendering
#[derive(Debug, Clone, Default)]
pub struct ContentState {
    /// Current scroll position (lines from top)
    pub scroll_offset: usize,
    /// Total rendered lines (updated on render)
    pub total_lines: usize,
    /// Visible height in lines (updated on render)
    pub visible_height: usize,
    /// Line geometry of each section (updated on render)
    pub sections: Vec<SectionGeometry>,
    /// Show the table of contents panel
    pub show_toc: bool,
    /// Stored percentage to restore once the layout is known
    pub resume_percent: Option<f64>,
    /// Offset moved without a scroll action; the page has not seen it yet
    pub sync_pending: bool,
}

impl ContentState {
    pub fn new() -> Self {
        Self { show_toc: true, ..Default::default() }
    }

    /// Get the maximum allowed scroll offset
    pub fn max_scroll(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_height)
    }

    /// Clamp scroll offset to valid range
    pub fn clamp_scroll(&mut self) {
        let max = self.max_scroll();
        if self.scroll_offset > max {
            self.scroll_offset = max;
        }
    }

    /// Scroll by `delta` lines, returning whether the offset moved
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let before = self.scroll_offset;
        self.scroll_offset = before.saturating_add_signed(delta).min(self.max_scroll());
        self.scroll_offset != before
    }

    /// Restore a stored percentage now that line counts are known.
    ///
    /// Returns whether the offset moved, in which case `sync_pending` is set
    /// until the page is told about the new position.
    pub fn apply_resume(&mut self) -> bool {
        if self.total_lines == 0 {
            return false;
        }
        let Some(percent) = self.resume_percent.take() else {
            return false;
        };

        let before = self.scroll_offset;
        let max = self.max_scroll();
        self.scroll_offset = ((percent / 100.0) * max as f64).round() as usize;
        self.clamp_scroll();

        let moved = self.scroll_offset != before;
        self.sync_pending |= moved;
        moved
    }

    /// Jump to the line where section `id` starts
    pub fn scroll_to_section(&mut self, id: &str) -> bool {
        let Some(section) = self.sections.iter().find(|s| s.id == id) else {
            return false;
        };
        let before = self.scroll_offset;
        self.scroll_offset = (section.offset_top as usize).min(self.max_scroll());
        self.scroll_offset != before
    }
}

/// Quiz overlay state on top of the session held by the topic page
#[derive(Debug, Clone, Default)]
pub struct QuizUiState {
    /// Highlighted option
    pub cursor: usize,
    /// Feedback for the answer just given, cleared on advance
    pub feedback: Option<AnswerFeedback>,
}

/// Recommender questionnaire state
#[derive(Debug, Clone)]
pub struct RecommendFormState {
    pub table: WeightTable,
    /// Highlighted criterion row
    pub row: usize,
    /// Chosen value index per criterion
    pub choices: Vec<Option<usize>>,
    /// Result of the last submit
    pub outcome: Option<Result<Recommendation, RecommendError>>,
}

impl Default for RecommendFormState {
    fn default() -> Self {
        Self::new(framework_table())
    }
}

impl RecommendFormState {
    pub fn new(table: WeightTable) -> Self {
        let choices = vec![None; table.criteria().len()];
        Self { table, row: 0, choices, outcome: None }
    }

    /// Step the value of the highlighted criterion forwards or backwards
    pub fn cycle(&mut self, forward: bool) {
        let Some(criterion) = self.table.criteria().get(self.row) else {
            return;
        };
        let count = criterion.values.len();
        if count == 0 {
            return;
        }

        let next = match (self.choices[self.row], forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        };
        self.choices[self.row] = Some(next);
        self.outcome = None;
    }

    /// Current choices as criterion name to value name
    pub fn answers(&self) -> Answers {
        self.table
            .criteria()
            .iter()
            .zip(&self.choices)
            .filter_map(|(criterion, choice)| {
                let value = criterion.values.get((*choice)?)?;
                Some((criterion.name.clone(), value.name.clone()))
            })
            .collect()
    }

    pub fn submit(&mut self) {
        self.outcome = Some(crate::recommend::recommend(&self.answers(), &self.table));
    }
}

/// Status/error message shown on the bottom line
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    pub message: Option<String>,
    pub is_error: bool,
}

impl StatusLine {
    /// Set a status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    /// Clear the message
    pub fn clear(&mut self) {
        self.message = None;
    }
}

/// Full application state
#[derive(Debug)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,

    /// Help overlay visible
    pub show_help: bool,

    /// All available topics
    pub catalog: TopicCatalog,

    /// Topic list selection
    pub topic_list: TopicListState,

    /// Currently open topic (if any)
    pub page: Option<TopicPage>,

    /// Content rendering state
    pub content: ContentState,

    /// Quiz overlay state
    pub quiz: QuizUiState,

    /// Recommender form state
    pub recommender: RecommendFormState,

    /// Bottom status line
    pub status: StatusLine,
}

impl AppState {
    pub fn new(catalog: TopicCatalog) -> Self {
        Self {
            screen: Screen::default(),
            show_help: false,
            catalog,
            topic_list: TopicListState::default(),
            page: None,
            content: ContentState::new(),
            quiz: QuizUiState::default(),
            recommender: RecommendFormState::default(),
            status: StatusLine::default(),
        }
    }
}
