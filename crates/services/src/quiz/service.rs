use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use health_core::model::{LevelNumber, QuizCatalog};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use super::engine::{
    AnswerFeedback, LeftLevel, LevelOutcome, LevelResult, LevelSelect, PresentedQuestion,
    QuizPhase, QuizSession, QuizStep,
};
use super::timing::QuizTiming;
use crate::error::QuizError;

/// Shared handle to the app's single quiz engine.
///
/// Unlock progress survives navigation between screens for as long as the
/// service lives. The lock is never held across an await.
pub struct QuizService {
    session: Mutex<QuizSession<StdRng>>,
    timing: QuizTiming,
}

impl QuizService {
    #[must_use]
    pub fn new(catalog: QuizCatalog) -> Self {
        Self::from_session(QuizSession::new(Arc::new(catalog)))
    }

    /// Deterministic question and option order.
    #[must_use]
    pub fn with_seed(catalog: QuizCatalog, seed: u64) -> Self {
        Self::from_session(QuizSession::with_rng(
            Arc::new(catalog),
            StdRng::seed_from_u64(seed),
        ))
    }

    fn from_session(session: QuizSession<StdRng>) -> Self {
        Self {
            session: Mutex::new(session),
            timing: QuizTiming::default(),
        }
    }

    #[must_use]
    pub fn with_timing(mut self, timing: QuizTiming) -> Self {
        self.timing = timing;
        self
    }

    #[must_use]
    pub fn timing(&self) -> QuizTiming {
        self.timing
    }

    fn lock(&self) -> MutexGuard<'_, QuizSession<StdRng>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn level_select(&self) -> LevelSelect {
        self.lock().level_select()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.lock().phase()
    }

    #[must_use]
    pub fn max_unlocked(&self) -> LevelNumber {
        self.lock().max_unlocked()
    }

    #[must_use]
    pub fn active_question(&self) -> Option<PresentedQuestion> {
        self.lock().active_question().cloned()
    }

    /// # Errors
    ///
    /// Returns `QuizError::InvalidLevelSelection` for locked or unknown levels.
    pub fn start_level(&self, level: u32) -> Result<PresentedQuestion, QuizError> {
        let result = self.lock().start_level(level);
        match &result {
            Ok(_) => info!(level, "quiz level started"),
            Err(err) => warn!(level, %err, "quiz level start refused"),
        }
        result
    }

    /// # Errors
    ///
    /// Returns `QuizError::NoActiveQuestion` if no question is pending.
    pub fn submit_answer(&self, selected: &str) -> Result<AnswerFeedback, QuizError> {
        let result = self.lock().submit_answer(selected);
        match &result {
            Ok(feedback) => debug!(
                level = feedback.level.value(),
                correct = feedback.correct,
                score = feedback.score,
                answered = feedback.answered,
                "quiz answer graded"
            ),
            Err(err) => debug!(%err, "quiz answer ignored"),
        }
        result
    }

    /// # Errors
    ///
    /// Returns `QuizError::NoLevelInProgress` at level select.
    pub fn advance(&self) -> Result<QuizStep, QuizError> {
        let mut session = self.lock();
        let was_evaluated = session.phase() == QuizPhase::LevelComplete;
        let step = session.advance()?;
        drop(session);

        if let (QuizStep::Finished(outcome), false) = (&step, was_evaluated) {
            log_outcome(outcome);
        }
        Ok(step)
    }

    /// # Errors
    ///
    /// Returns `QuizError::LevelNotFinished` or `QuizError::NoLevelInProgress`.
    pub fn finish(&self) -> Result<LevelOutcome, QuizError> {
        self.lock().finish()
    }

    /// Leave the running level. A fully answered attempt is still evaluated.
    pub fn abandon_level(&self) {
        let left = self.lock().abandon_level();
        match left {
            Some(LeftLevel::Discarded(level)) => {
                info!(level = level.value(), "quiz level abandoned");
            }
            Some(LeftLevel::Evaluated(outcome)) => log_outcome(&outcome),
            None => {}
        }
    }
}

impl Default for QuizService {
    fn default() -> Self {
        Self::new(QuizCatalog::builtin())
    }
}

fn log_outcome(outcome: &LevelOutcome) {
    let level = outcome.level.value();
    match outcome.result {
        LevelResult::Unlocked(next) => info!(
            level,
            score = outcome.score,
            unlocked = next.value(),
            "quiz level passed, next level unlocked"
        ),
        LevelResult::AllLevelsComplete => {
            info!(level, score = outcome.score, "quiz completed all levels");
        }
        LevelResult::Completed => info!(level, score = outcome.score, "quiz level passed"),
        LevelResult::Failed => info!(
            level,
            score = outcome.score,
            target = outcome.target,
            "quiz level failed"
        ),
    }
}
