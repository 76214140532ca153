//! Live state of one open topic
//!
//! A page owns everything the reader can change while viewing a topic: the
//! ToC expansion, the quiz session and the progress record. Each scroll
//! recomputes progress, moves the ToC highlight and persists the record.
//! Persistence failures are logged; they never interrupt reading.

use super::model::TopicDefinition;
use crate::progress::{ProgressRecord, ProgressStore, compute_scroll_percent};
use crate::quiz::{QuizResult, QuizSession, QuizState};
use crate::storage::KeyValueStore;
use crate::toc::{Accordion, SectionGeometry, TableOfContents, find_current_section};

/// Viewport position within the rendered topic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollView {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// What changed after a scroll
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollUpdate {
    pub percent: f64,
    pub current_section: Option<String>,
    /// Did a different ToC group get expanded?
    pub toc_changed: bool,
}

#[derive(Debug)]
pub struct TopicPage {
    topic: TopicDefinition,
    toc: TableOfContents,
    accordion: Accordion,
    quiz: Option<QuizSession>,
    record: ProgressRecord,
    current_section: Option<String>,
    pass_percentage: u8,
}

impl TopicPage {
    /// Open `topic`, resuming from its stored progress if there is any
    pub fn open<S: KeyValueStore>(
        topic: TopicDefinition,
        store: &ProgressStore<S>,
        pass_percentage: u8,
    ) -> Self {
        let record = store.load(&topic.id).unwrap_or_else(|| ProgressRecord::new(&topic.id));
        let quiz = QuizSession::new(topic.quiz.clone()).ok();
        let toc = TableOfContents::new(topic.toc.clone());

        let mut accordion = Accordion::default();
        let current_section = topic.sections.first().map(|s| s.id.clone());
        if let Some(first) = &current_section {
            accordion.highlight_current_section(first, toc.mapping());
        }

        Self { topic, toc, accordion, quiz, record, current_section, pass_percentage }
    }

    pub fn topic(&self) -> &TopicDefinition {
        &self.topic
    }

    pub fn toc(&self) -> &TableOfContents {
        &self.toc
    }

    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    pub fn current_section(&self) -> Option<&str> {
        self.current_section.as_deref()
    }

    pub fn pass_percentage(&self) -> u8 {
        self.pass_percentage
    }

    pub fn quiz(&self) -> Option<&QuizSession> {
        self.quiz.as_ref()
    }

    pub fn quiz_mut(&mut self) -> Option<&mut QuizSession> {
        self.quiz.as_mut()
    }

    /// React to the reader scrolling to `view`
    pub fn on_scroll<S: KeyValueStore>(
        &mut self,
        view: ScrollView,
        sections: &[SectionGeometry],
        store: &mut ProgressStore<S>,
    ) -> ScrollUpdate {
        let percent =
            compute_scroll_percent(view.scroll_top, view.viewport_height, view.document_height);

        let mut toc_changed = false;
        if let Some(id) = find_current_section(sections, view.scroll_top) {
            toc_changed = self.accordion.highlight_current_section(id, self.toc.mapping());
            self.current_section = Some(id.to_string());
        }

        self.record.scroll_percent = percent;
        self.save(store);

        ScrollUpdate { percent, current_section: self.current_section.clone(), toc_changed }
    }

    /// Store the result of a completed quiz.
    ///
    /// A passing score also marks the topic completed. Returns `None` while
    /// the quiz is still running or when the topic has no quiz.
    pub fn record_quiz_result<S: KeyValueStore>(
        &mut self,
        store: &mut ProgressStore<S>,
    ) -> Option<QuizResult> {
        let QuizState::Completed(result) = self.quiz.as_ref()?.state() else {
            return None;
        };

        self.record.quiz_score = result.score as u32;
        if result.passed(self.pass_percentage) {
            self.record.completed = true;
        }
        self.save(store);
        Some(result)
    }

    /// Mark the topic completed regardless of quiz results
    pub fn mark_complete<S: KeyValueStore>(&mut self, store: &mut ProgressStore<S>) {
        self.record.completed = true;
        self.save(store);
    }

    /// Restart the quiz without touching stored progress
    pub fn retake_quiz(&mut self) {
        if let Some(quiz) = self.quiz.as_mut() {
            quiz.reset();
        }
    }

    fn save<S: KeyValueStore>(&mut self, store: &mut ProgressStore<S>) {
        self.record.touch();
        if let Err(e) = store.save(&self.topic.id, &self.record) {
            tracing::warn!("Failed to save progress for {}: {:#}", self.topic.id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuizQuestion;
    use crate::storage::MemoryStore;
    use crate::toc::TocGroup;
    use crate::topic::TopicSection;

    fn topic() -> TopicDefinition {
        TopicDefinition {
            id: "t1".into(),
            title: "Test".into(),
            summary: String::new(),
            toc: vec![TocGroup::new("Intro", &["#s1", "#s2"]), TocGroup::new("Advanced", &["#s3"])],
            sections: vec![
                TopicSection::new("s1", "One", "a"),
                TopicSection::new("s2", "Two", "b"),
                TopicSection::new("s3", "Three", "c"),
            ],
            quiz: vec![
                QuizQuestion::new("q1", vec!["a".into(), "b".into()], 0).unwrap(),
                QuizQuestion::new("q2", vec!["a".into(), "b".into()], 1).unwrap(),
            ],
            recommender: false,
        }
    }

    fn geometry() -> Vec<SectionGeometry> {
        vec![
            SectionGeometry::new("s1", 0.0, 10.0),
            SectionGeometry::new("s2", 10.0, 10.0),
            SectionGeometry::new("s3", 20.0, 30.0),
        ]
    }

    fn view(scroll_top: f64) -> ScrollView {
        ScrollView { scroll_top, viewport_height: 10.0, document_height: 50.0 }
    }

    #[test]
    fn opens_with_first_group_expanded() {
        let store = ProgressStore::new(MemoryStore::new());
        let page = TopicPage::open(topic(), &store, 70);
        assert_eq!(page.accordion().expanded(), Some("Intro"));
        assert_eq!(page.current_section(), Some("s1"));
        assert!(page.quiz().is_some());
    }

    #[test]
    fn scroll_moves_highlight_and_persists() {
        let mut store = ProgressStore::new(MemoryStore::new());
        let mut page = TopicPage::open(topic(), &store, 70);

        let update = page.on_scroll(view(25.0), &geometry(), &mut store);
        assert_eq!(update.current_section.as_deref(), Some("s3"));
        assert!(update.toc_changed);
        assert_eq!(update.percent, 62.5);
        assert_eq!(page.accordion().expanded(), Some("Advanced"));

        assert_eq!(store.load("t1").unwrap().scroll_percent, 62.5);
    }

    #[test]
    fn resumes_stored_progress() {
        let mut store = ProgressStore::new(MemoryStore::new());
        let mut page = TopicPage::open(topic(), &store, 70);
        page.on_scroll(view(40.0), &geometry(), &mut store);

        let reopened = TopicPage::open(topic(), &store, 70);
        assert_eq!(reopened.record().scroll_percent, 100.0);
    }

    #[test]
    fn passing_quiz_completes_topic() {
        let mut store = ProgressStore::new(MemoryStore::new());
        let mut page = TopicPage::open(topic(), &store, 70);

        assert!(page.record_quiz_result(&mut store).is_none());

        let quiz = page.quiz_mut().unwrap();
        quiz.select_answer(0).unwrap();
        quiz.advance().unwrap();
        quiz.select_answer(1).unwrap();
        quiz.advance().unwrap();

        let result = page.record_quiz_result(&mut store).unwrap();
        assert_eq!(result.percentage(), 100);

        let saved = store.load("t1").unwrap();
        assert_eq!(saved.quiz_score, 2);
        assert!(saved.completed);
    }

    #[test]
    fn failing_quiz_keeps_topic_open() {
        let mut store = ProgressStore::new(MemoryStore::new());
        let mut page = TopicPage::open(topic(), &store, 70);

        let quiz = page.quiz_mut().unwrap();
        quiz.select_answer(1).unwrap();
        quiz.advance().unwrap();
        quiz.select_answer(1).unwrap();
        quiz.advance().unwrap();

        page.record_quiz_result(&mut store).unwrap();
        let saved = store.load("t1").unwrap();
        assert_eq!(saved.quiz_score, 1);
        assert!(!saved.completed);

        page.retake_quiz();
        assert_eq!(page.quiz().unwrap().score(), 0);
        assert_eq!(store.load("t1").unwrap().quiz_score, 1);
    }

    #[test]
    fn topic_without_questions_has_no_quiz() {
        let store = ProgressStore::new(MemoryStore::new());
        let mut definition = topic();
        definition.quiz.clear();
        let page = TopicPage::open(definition, &store, 70);
        assert!(page.quiz().is_none());
    }
}
