use std::time::Duration;

/// Presentation delays the UI waits before driving the engine forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizTiming {
    /// Pause after grading before the next question (or the result).
    pub feedback_delay: Duration,
    /// Pause on the level result before returning to level select.
    pub result_delay: Duration,
}

impl QuizTiming {
    pub const DEFAULT_FEEDBACK_MS: u64 = 1500;
    pub const DEFAULT_RESULT_MS: u64 = 3000;

    /// No delays, for tests and scripted runs.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            feedback_delay: Duration::ZERO,
            result_delay: Duration::ZERO,
        }
    }
}

impl Default for QuizTiming {
    fn default() -> Self {
        Self {
            feedback_delay: Duration::from_millis(Self::DEFAULT_FEEDBACK_MS),
            result_delay: Duration::from_millis(Self::DEFAULT_RESULT_MS),
        }
    }
}
