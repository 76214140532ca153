//! Quiz session state machine

use super::QuizError;
use super::question::QuizQuestion;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// Working through the question at `index`
    InProgress { index: usize },
    /// Every question has been answered and advanced past
    Completed(QuizResult),
}

/// Final tally of a completed quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
}

impl QuizResult {
    /// Score as a whole percentage, rounding halves up
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((200 * self.score + self.total) / (2 * self.total)) as u32
    }

    /// Did the score reach `threshold` percent?
    pub fn passed(&self, threshold: u8) -> bool {
        self.percentage() >= u32::from(threshold)
    }
}

/// What the presentation layer needs after an answer is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub question_index: usize,
    pub chosen: usize,
    pub correct: usize,
    pub explanation: Option<String>,
}

impl AnswerFeedback {
    pub fn is_correct(&self) -> bool {
        self.chosen == self.correct
    }
}

/// Result of [`QuizSession::select_answer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// First answer to this question
    Answered(AnswerFeedback),
    /// The question was already answered; nothing changed
    AlreadyAnswered,
}

/// A run through an ordered list of questions
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current_index: usize,
    score: usize,
    /// Chosen option per question, `Some` once answered
    answers: Vec<Option<usize>>,
}

impl QuizSession {
    /// Start a session. An empty question list is rejected.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        let answers = vec![None; questions.len()];
        Ok(Self { questions, current_index: 0, score: 0, answers })
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_completed(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    pub fn state(&self) -> QuizState {
        if self.is_completed() {
            QuizState::Completed(QuizResult { score: self.score, total: self.total() })
        } else {
            QuizState::InProgress { index: self.current_index }
        }
    }

    /// The question being asked, `None` once completed
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.answer(index).is_some()
    }

    /// Option chosen for question `index`
    pub fn answer(&self, index: usize) -> Option<usize> {
        self.answers.get(index).copied().flatten()
    }

    /// Answer the current question.
    ///
    /// Only the first answer to each question counts; later calls report
    /// [`AnswerOutcome::AlreadyAnswered`] and change nothing.
    pub fn select_answer(&mut self, option: usize) -> Result<AnswerOutcome, QuizError> {
        let index = self.current_index;
        let Some(question) = self.questions.get(index) else {
            return Err(QuizError::Completed);
        };

        if self.answers[index].is_some() {
            return Ok(AnswerOutcome::AlreadyAnswered);
        }

        if option >= question.options().len() {
            return Err(QuizError::OptionOutOfRange {
                option,
                option_count: question.options().len(),
            });
        }

        self.answers[index] = Some(option);
        if question.is_correct(option) {
            self.score += 1;
        }

        match self.feedback(index) {
            Some(feedback) => Ok(AnswerOutcome::Answered(feedback)),
            None => Ok(AnswerOutcome::AlreadyAnswered),
        }
    }

    /// Feedback for an answered question
    pub fn feedback(&self, index: usize) -> Option<AnswerFeedback> {
        let question = self.questions.get(index)?;
        let chosen = self.answer(index)?;
        Some(AnswerFeedback {
            question_index: index,
            chosen,
            correct: question.correct_index(),
            explanation: question.explanation().map(str::to_string),
        })
    }

    /// Move past the current, answered question
    pub fn advance(&mut self) -> Result<QuizState, QuizError> {
        if self.is_completed() {
            return Err(QuizError::Completed);
        }
        if !self.is_answered(self.current_index) {
            return Err(QuizError::NotAnswered(self.current_index));
        }

        self.current_index += 1;
        Ok(self.state())
    }

    /// Start over with nothing answered
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.answers.iter_mut().for_each(|a| *a = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn question(correct: usize) -> QuizQuestion {
        QuizQuestion::new("Pick one", vec!["a".into(), "b".into(), "c".into()], correct)
            .unwrap()
            .with_explanation("because")
    }

    fn session(n: usize) -> QuizSession {
        QuizSession::new((0..n).map(|i| question(i % 3)).collect()).unwrap()
    }

    #[test]
    fn empty_quiz_is_rejected() {
        assert!(matches!(QuizSession::new(vec![]), Err(QuizError::NoQuestions)));
    }

    #[test]
    fn starts_in_progress() {
        let quiz = session(2);
        assert_eq!(quiz.state(), QuizState::InProgress { index: 0 });
        assert_eq!(quiz.score(), 0);
        assert!(!quiz.is_answered(0));
    }

    #[test]
    fn all_correct_completes_with_full_marks() {
        let mut quiz = session(4);
        for i in 0..4 {
            quiz.select_answer(i % 3).unwrap();
            quiz.advance().unwrap();
        }

        let QuizState::Completed(result) = quiz.state() else {
            panic!("expected completed quiz");
        };
        assert_eq!(result.score, 4);
        assert_eq!(result.total, 4);
        assert_eq!(result.percentage(), 100);
    }

    #[test]
    fn second_answer_is_ignored() {
        let mut once = session(1);
        let first = once.select_answer(1).unwrap();

        let mut twice = session(1);
        twice.select_answer(1).unwrap();
        let second = twice.select_answer(0).unwrap();

        assert_eq!(second, AnswerOutcome::AlreadyAnswered);
        assert_eq!(once.score(), twice.score());
        assert_eq!(once.answer(0), twice.answer(0));
        assert!(matches!(first, AnswerOutcome::Answered(ref f) if !f.is_correct()));
    }

    #[test]
    fn feedback_reveals_correct_option() {
        let mut quiz = session(1);
        let AnswerOutcome::Answered(feedback) = quiz.select_answer(2).unwrap() else {
            panic!("expected feedback");
        };
        assert_eq!(
            feedback,
            AnswerFeedback {
                question_index: 0,
                chosen: 2,
                correct: 0,
                explanation: Some("because".into()),
            }
        );
    }

    #[test]
    fn out_of_range_option_leaves_question_open() {
        let mut quiz = session(1);
        assert!(matches!(quiz.select_answer(7), Err(QuizError::OptionOutOfRange { .. })));
        assert!(!quiz.is_answered(0));
    }

    #[test]
    fn cannot_advance_before_answering() {
        let mut quiz = session(2);
        assert!(matches!(quiz.advance(), Err(QuizError::NotAnswered(0))));
    }

    #[test]
    fn completed_quiz_rejects_answers() {
        let mut quiz = session(1);
        quiz.select_answer(0).unwrap();
        quiz.advance().unwrap();
        assert!(matches!(quiz.select_answer(0), Err(QuizError::Completed)));
        assert!(matches!(quiz.advance(), Err(QuizError::Completed)));
    }

    #[test]
    fn reset_returns_to_start() {
        let mut quiz = session(2);
        quiz.select_answer(0).unwrap();
        quiz.advance().unwrap();
        quiz.select_answer(1).unwrap();
        quiz.advance().unwrap();
        assert!(quiz.is_completed());

        quiz.reset();
        assert_eq!(quiz.state(), QuizState::InProgress { index: 0 });
        assert_eq!(quiz.score(), 0);
        assert!(!quiz.is_answered(0));
        assert!(!quiz.is_answered(1));
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(QuizResult { score: 1, total: 8 }.percentage(), 13);
        assert_eq!(QuizResult { score: 1, total: 3 }.percentage(), 33);
        assert_eq!(QuizResult { score: 2, total: 3 }.percentage(), 67);
        assert_eq!(QuizResult { score: 0, total: 5 }.percentage(), 0);
    }

    #[test]
    fn pass_threshold() {
        let result = QuizResult { score: 7, total: 10 };
        assert!(result.passed(70));
        assert!(!result.passed(71));
    }
}
