//! Multiple-choice quizzes attached to topics

pub mod question;
pub mod session;

use thiserror::Error;

pub use question::QuizQuestion;
pub use session::{AnswerFeedback, AnswerOutcome, QuizResult, QuizSession, QuizState};

/// Errors raised by quiz construction and state transitions
#[derive(Debug, Error)]
pub enum QuizError {
    /// A quiz needs at least one question
    #[error("A quiz needs at least one question")]
    NoQuestions,

    /// Correct answer index does not point at an option
    #[error("Question {prompt:?} marks option {correct_index} correct but has {option_count} options")]
    InvalidCorrectIndex { prompt: String, correct_index: usize, option_count: usize },

    /// Chosen option does not exist
    #[error("Option {option} does not exist; question has {option_count} options")]
    OptionOutOfRange { option: usize, option_count: usize },

    /// Tried to move on before answering
    #[error("Question {} has not been answered yet", .0 + 1)]
    NotAnswered(usize),

    /// The quiz has no current question
    #[error("Quiz is already completed")]
    Completed,
}
