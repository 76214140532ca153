//! Quiz question model

use serde::{Deserialize, Serialize};

use super::QuizError;

/// A multiple-choice question.
///
/// The correct index always points into `options`; this is checked on
/// construction and when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct QuizQuestion {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<String>,
}

#[derive(Deserialize)]
struct RawQuestion {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
    #[serde(default)]
    explanation: Option<String>,
}

impl TryFrom<RawQuestion> for QuizQuestion {
    type Error = QuizError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        let question = Self::new(raw.prompt, raw.options, raw.correct_index)?;
        Ok(match raw.explanation {
            Some(explanation) => question.with_explanation(explanation),
            None => question,
        })
    }
}

impl QuizQuestion {
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, QuizError> {
        let prompt = prompt.into();
        if correct_index >= options.len() {
            return Err(QuizError::InvalidCorrectIndex {
                prompt,
                correct_index,
                option_count: options.len(),
            });
        }
        Ok(Self { prompt, options, correct_index, explanation: None })
    }

    /// Attach an explanation shown after answering
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_index
    }
}
