use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Number of answer options every question carries.
pub const OPTIONS_PER_QUESTION: usize = 3;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question options cannot be empty")]
    EmptyOption,

    #[error("question options must be unique: {0:?} appears twice")]
    DuplicateOption(String),

    #[error("correct option {0:?} is not one of the options")]
    CorrectOptionMissing(String),
}

//
// ─── LEVEL NUMBER ──────────────────────────────────────────────────────────────
//

/// One-based level identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LevelNumber(pub(crate) u32);

impl LevelNumber {
    /// The first level, unlocked from the start.
    pub const FIRST: Self = Self(1);

    /// Creates a level number. Returns `None` for zero.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The level after this one, without any upper bound check.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Debug for LevelNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LevelNumber({})", self.0)
    }
}

impl fmt::Display for LevelNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question with exactly three unique options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: [String; OPTIONS_PER_QUESTION],
    correct_option: String,
}

impl Question {
    /// Build a validated question.
    ///
    /// Prompt and options are trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the prompt or an option is empty, when two
    /// options are equal, or when `correct_option` is not one of `options`.
    pub fn new(
        prompt: impl Into<String>,
        options: [impl Into<String>; OPTIONS_PER_QUESTION],
        correct_option: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into().trim().to_owned();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        let options = options.map(|o| o.into().trim().to_owned());
        {
            let mut seen = HashSet::with_capacity(OPTIONS_PER_QUESTION);
            for option in &options {
                if option.is_empty() {
                    return Err(QuestionError::EmptyOption);
                }
                if !seen.insert(option.as_str()) {
                    return Err(QuestionError::DuplicateOption(option.clone()));
                }
            }
        }

        let correct_option = correct_option.into().trim().to_owned();
        if !options.contains(&correct_option) {
            return Err(QuestionError::CorrectOptionMissing(correct_option));
        }

        Ok(Self {
            prompt,
            options,
            correct_option,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Options in catalog order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.correct_option
    }

    /// Unvalidated constructor for the builtin table; see `builtin_catalog_questions_are_valid`.
    pub(crate) fn from_static(
        prompt: &str,
        options: &[&str; OPTIONS_PER_QUESTION],
        answer: &str,
    ) -> Self {
        Self {
            prompt: prompt.to_owned(),
            options: options.map(str::to_owned),
            correct_option: answer.to_owned(),
        }
    }

    /// Exact string comparison against the correct option.
    #[must_use]
    pub fn is_correct(&self, selected: &str) -> bool {
        self.correct_option == selected
    }
}

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

/// A numbered, immutable bank of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    number: LevelNumber,
    questions: Vec<Question>,
}

impl Level {
    #[must_use]
    pub fn new(number: LevelNumber, questions: Vec<Question>) -> Self {
        Self { number, questions }
    }

    #[must_use]
    pub fn number(&self) -> LevelNumber {
        self.number
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// Minimum number of correct answers needed to pass a level: 80%, rounded down.
///
/// Integer arithmetic keeps `floor(n * 0.8)` exact for every `n`.
#[must_use]
pub fn target_score(questions_per_level: usize) -> usize {
    questions_per_level.saturating_mul(4) / 5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_trims_and_validates() {
        let q = Question::new("  Which fruit?  ", ["Apple", " Banana ", "Avocado"], "Banana")
            .unwrap();
        assert_eq!(q.prompt(), "Which fruit?");
        assert_eq!(q.options()[1], "Banana");
        assert!(q.is_correct("Banana"));
        assert!(!q.is_correct("banana"));
        assert!(!q.is_correct("Apple"));
    }

    #[test]
    fn question_rejects_bad_input() {
        assert_eq!(
            Question::new(" ", ["a", "b", "c"], "a").unwrap_err(),
            QuestionError::EmptyPrompt
        );
        assert_eq!(
            Question::new("Q", ["a", "", "c"], "a").unwrap_err(),
            QuestionError::EmptyOption
        );
        assert_eq!(
            Question::new("Q", ["a", "b", "a"], "a").unwrap_err(),
            QuestionError::DuplicateOption("a".into())
        );
        assert_eq!(
            Question::new("Q", ["a", "b", "c"], "d").unwrap_err(),
            QuestionError::CorrectOptionMissing("d".into())
        );
    }

    #[test]
    fn level_number_rejects_zero() {
        assert!(LevelNumber::new(0).is_none());
        assert_eq!(LevelNumber::new(3).unwrap().value(), 3);
        assert_eq!(LevelNumber::FIRST.next().value(), 2);
    }

    #[test]
    fn target_score_is_eighty_percent_floor() {
        assert_eq!(target_score(5), 4);
        assert_eq!(target_score(10), 8);
        assert_eq!(target_score(3), 2);
        assert_eq!(target_score(1), 0);
        assert_eq!(target_score(0), 0);
    }
}
