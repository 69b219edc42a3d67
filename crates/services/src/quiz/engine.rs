use std::fmt;
use std::sync::Arc;

use health_core::model::{LevelNumber, Question, QuizCatalog, target_score};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::shuffle::shuffled;
use crate::error::QuizError;

//
// ─── VIEW VALUES ───────────────────────────────────────────────────────────────
//

/// A question as shown to the player, with options in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedQuestion {
    pub level: LevelNumber,
    /// One-based position within the level.
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<String>,
    /// Score before this question is answered.
    pub score: usize,
}

/// Result of grading one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub level: LevelNumber,
    pub correct: bool,
    pub selected: String,
    pub correct_answer: String,
    pub score: usize,
    pub answered: usize,
    pub total: usize,
}

impl AnswerFeedback {
    /// True when this was the last question of the level.
    #[must_use]
    pub fn level_finished(&self) -> bool {
        self.answered >= self.total
    }
}

/// How a finished attempt affected progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelResult {
    /// Passed the highest unlocked level; the contained level is now open.
    Unlocked(LevelNumber),
    /// Passed the last level of the catalog.
    AllLevelsComplete,
    /// Passed a level that was already cleared before.
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelOutcome {
    pub level: LevelNumber,
    pub score: usize,
    pub total: usize,
    pub target: usize,
    pub total_levels: u32,
    pub result: LevelResult,
}

impl LevelOutcome {
    #[must_use]
    pub fn passed(&self) -> bool {
        !matches!(self.result, LevelResult::Failed)
    }

    #[must_use]
    pub fn headline(&self) -> String {
        if self.passed() {
            format!(
                "Level {} complete! Final score: {}/{}.",
                self.level, self.score, self.total
            )
        } else {
            format!(
                "Level {} not passed. Score: {}/{}.",
                self.level, self.score, self.total
            )
        }
    }

    #[must_use]
    pub fn notice(&self) -> String {
        match self.result {
            LevelResult::Unlocked(next) => format!("Congratulations! Level {next} is now unlocked!"),
            LevelResult::AllLevelsComplete => {
                format!("Amazing! You have completed all {} levels!", self.total_levels)
            }
            LevelResult::Completed => format!(
                "Level {} completed. You have already cleared this level before.",
                self.level
            ),
            LevelResult::Failed => format!(
                "You need at least {} correct answers. Try level {} again.",
                self.target, self.level
            ),
        }
    }
}

/// Next thing to show after feedback has been displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizStep {
    Question(PresentedQuestion),
    Finished(LevelOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelState {
    pub number: LevelNumber,
    pub unlocked: bool,
}

/// Level-select screen data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSelect {
    pub levels: Vec<LevelState>,
    pub max_unlocked: LevelNumber,
    pub total_levels: u32,
    pub target_score: usize,
    pub questions_per_level: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    LevelSelect,
    AwaitingAnswer,
    /// An answer was graded; the caller should `advance` after the feedback delay.
    ShowingFeedback,
    /// The attempt was evaluated; the caller should `finish` after the result delay.
    LevelComplete,
}

/// What `abandon_level` did with the attempt it left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeftLevel {
    /// Questions were still open; the attempt was dropped.
    Discarded(LevelNumber),
    /// Every question was answered; the attempt was evaluated on the way out.
    Evaluated(LevelOutcome),
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

struct Attempt {
    level: LevelNumber,
    order: Vec<Question>,
    cursor: usize,
    score: usize,
    active: Option<PresentedQuestion>,
}

enum Phase {
    LevelSelect,
    InLevel(Attempt),
    Complete(LevelOutcome),
}

/// Level progression state machine for one player.
///
/// Unlock progress lives only as long as the value; nothing is persisted.
pub struct QuizSession<R = StdRng> {
    catalog: Arc<QuizCatalog>,
    rng: R,
    max_unlocked: LevelNumber,
    phase: Phase,
}

impl QuizSession<StdRng> {
    #[must_use]
    pub fn new(catalog: Arc<QuizCatalog>) -> Self {
        Self::with_rng(catalog, StdRng::from_os_rng())
    }
}

impl<R: Rng> QuizSession<R> {
    /// Build an engine with an injected random source for question and option order.
    #[must_use]
    pub fn with_rng(catalog: Arc<QuizCatalog>, rng: R) -> Self {
        Self {
            catalog,
            rng,
            max_unlocked: LevelNumber::FIRST,
            phase: Phase::LevelSelect,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &QuizCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn max_unlocked(&self) -> LevelNumber {
        self.max_unlocked
    }

    /// Level of the running or just-evaluated attempt.
    #[must_use]
    pub fn current_level(&self) -> Option<LevelNumber> {
        match &self.phase {
            Phase::LevelSelect => None,
            Phase::InLevel(attempt) => Some(attempt.level),
            Phase::Complete(outcome) => Some(outcome.level),
        }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        match &self.phase {
            Phase::LevelSelect => 0,
            Phase::InLevel(attempt) => attempt.score,
            Phase::Complete(outcome) => outcome.score,
        }
    }

    /// Number of questions answered in the running attempt.
    #[must_use]
    pub fn question_cursor(&self) -> usize {
        match &self.phase {
            Phase::LevelSelect => 0,
            Phase::InLevel(attempt) => attempt.cursor,
            Phase::Complete(outcome) => outcome.total,
        }
    }

    #[must_use]
    pub fn active_question(&self) -> Option<&PresentedQuestion> {
        match &self.phase {
            Phase::InLevel(attempt) => attempt.active.as_ref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match &self.phase {
            Phase::LevelSelect => QuizPhase::LevelSelect,
            Phase::InLevel(attempt) if attempt.active.is_some() => QuizPhase::AwaitingAnswer,
            Phase::InLevel(_) => QuizPhase::ShowingFeedback,
            Phase::Complete(_) => QuizPhase::LevelComplete,
        }
    }

    #[must_use]
    pub fn level_select(&self) -> LevelSelect {
        let levels = self
            .catalog
            .levels()
            .iter()
            .map(|level| LevelState {
                number: level.number(),
                unlocked: level.number() <= self.max_unlocked,
            })
            .collect();
        LevelSelect {
            levels,
            max_unlocked: self.max_unlocked,
            total_levels: self.catalog.total_levels(),
            target_score: target_score(self.catalog.questions_per_level()),
            questions_per_level: self.catalog.questions_per_level(),
        }
    }

    /// Begin an attempt at `level` and present its first question.
    ///
    /// Any attempt already running is discarded.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidLevelSelection` when `level` is outside the
    /// catalog or not yet unlocked; the engine state is left unchanged.
    pub fn start_level(&mut self, level: u32) -> Result<PresentedQuestion, QuizError> {
        let refused = QuizError::InvalidLevelSelection {
            requested: level,
            max_unlocked: self.max_unlocked,
        };
        let Some(number) = LevelNumber::new(level).filter(|n| *n <= self.max_unlocked) else {
            return Err(refused);
        };
        let Some(entry) = self.catalog.get_level(number) else {
            return Err(refused);
        };

        let order = shuffled(entry.questions(), &mut self.rng);
        self.phase = Phase::InLevel(Attempt {
            level: number,
            order,
            cursor: 0,
            score: 0,
            active: None,
        });

        match self.present_next()? {
            QuizStep::Question(question) => Ok(question),
            // Catalog levels are never empty.
            QuizStep::Finished(_) => Err(QuizError::NoActiveQuestion),
        }
    }

    /// Grade `selected` against the active question.
    ///
    /// The answer is final: the question is cleared and the cursor moves on.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoActiveQuestion` when nothing is awaiting an answer.
    pub fn submit_answer(&mut self, selected: &str) -> Result<AnswerFeedback, QuizError> {
        let Phase::InLevel(attempt) = &mut self.phase else {
            return Err(QuizError::NoActiveQuestion);
        };
        if attempt.active.is_none() {
            return Err(QuizError::NoActiveQuestion);
        }
        let (correct, correct_answer) = {
            let question = attempt
                .order
                .get(attempt.cursor)
                .ok_or(QuizError::NoActiveQuestion)?;
            (
                question.is_correct(selected),
                question.correct_option().to_owned(),
            )
        };

        attempt.active = None;
        attempt.cursor += 1;
        if correct {
            attempt.score += 1;
        }

        Ok(AnswerFeedback {
            level: attempt.level,
            correct,
            selected: selected.to_owned(),
            correct_answer,
            score: attempt.score,
            answered: attempt.cursor,
            total: attempt.order.len(),
        })
    }

    /// Move past feedback: present the next question, or evaluate the level once
    /// every question has been answered.
    ///
    /// Calling it again while a question is pending (or after evaluation) returns
    /// the same step.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoLevelInProgress` at level select.
    pub fn advance(&mut self) -> Result<QuizStep, QuizError> {
        self.present_next()
    }

    /// Leave the result screen and return to level select.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::LevelNotFinished` while questions remain and
    /// `QuizError::NoLevelInProgress` at level select.
    pub fn finish(&mut self) -> Result<LevelOutcome, QuizError> {
        match std::mem::replace(&mut self.phase, Phase::LevelSelect) {
            Phase::Complete(outcome) => Ok(outcome),
            Phase::InLevel(attempt) => {
                self.phase = Phase::InLevel(attempt);
                Err(QuizError::LevelNotFinished)
            }
            Phase::LevelSelect => Err(QuizError::NoLevelInProgress),
        }
    }

    /// Leave the current attempt, if any, and return to level select.
    ///
    /// An attempt with questions left is discarded and unlocks are untouched.
    /// An attempt whose last answer is already graded is evaluated first, so a
    /// pass still unlocks the next level.
    pub fn abandon_level(&mut self) -> Option<LeftLevel> {
        match std::mem::replace(&mut self.phase, Phase::LevelSelect) {
            Phase::InLevel(attempt)
                if attempt.active.is_none() && attempt.cursor >= attempt.order.len() =>
            {
                let outcome = self.evaluate(attempt.level, attempt.score, attempt.order.len());
                Some(LeftLevel::Evaluated(outcome))
            }
            Phase::InLevel(attempt) => Some(LeftLevel::Discarded(attempt.level)),
            Phase::Complete(_) | Phase::LevelSelect => None,
        }
    }

    fn present_next(&mut self) -> Result<QuizStep, QuizError> {
        let (level, score, total) = match &mut self.phase {
            Phase::LevelSelect => return Err(QuizError::NoLevelInProgress),
            Phase::Complete(outcome) => return Ok(QuizStep::Finished(outcome.clone())),
            Phase::InLevel(attempt) => {
                if let Some(active) = &attempt.active {
                    return Ok(QuizStep::Question(active.clone()));
                }
                if let Some(question) = attempt.order.get(attempt.cursor) {
                    let presented = PresentedQuestion {
                        level: attempt.level,
                        number: attempt.cursor + 1,
                        total: attempt.order.len(),
                        prompt: question.prompt().to_owned(),
                        options: shuffled(question.options(), &mut self.rng),
                        score: attempt.score,
                    };
                    attempt.active = Some(presented.clone());
                    return Ok(QuizStep::Question(presented));
                }
                (attempt.level, attempt.score, attempt.order.len())
            }
        };

        let outcome = self.evaluate(level, score, total);
        self.phase = Phase::Complete(outcome.clone());
        Ok(QuizStep::Finished(outcome))
    }

    fn evaluate(&mut self, level: LevelNumber, score: usize, total: usize) -> LevelOutcome {
        let target = target_score(total);
        let last = self.catalog.last_level();
        let result = if score < target {
            LevelResult::Failed
        } else if level == self.max_unlocked && level < last {
            self.max_unlocked = level.next();
            LevelResult::Unlocked(self.max_unlocked)
        } else if level == last {
            LevelResult::AllLevelsComplete
        } else {
            LevelResult::Completed
        };

        LevelOutcome {
            level,
            score,
            total,
            target,
            total_levels: self.catalog.total_levels(),
            result,
        }
    }
}

impl<R> fmt::Debug for QuizSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match &self.phase {
            Phase::LevelSelect => "level_select",
            Phase::InLevel(_) => "in_level",
            Phase::Complete(_) => "complete",
        };
        f.debug_struct("QuizSession")
            .field("max_unlocked", &self.max_unlocked)
            .field("phase", &phase)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use health_core::model::{Level, Question};

    fn session() -> QuizSession<StdRng> {
        QuizSession::with_rng(Arc::new(QuizCatalog::builtin()), StdRng::seed_from_u64(7))
    }

    fn correct_answer(session: &QuizSession<StdRng>) -> String {
        let active = session.active_question().expect("active question");
        let level = session.catalog().get_level(active.level).unwrap();
        level
            .questions()
            .iter()
            .find(|q| q.prompt() == active.prompt)
            .unwrap()
            .correct_option()
            .to_owned()
    }

    fn wrong_answer(session: &QuizSession<StdRng>) -> String {
        let right = correct_answer(session);
        session
            .active_question()
            .unwrap()
            .options
            .iter()
            .find(|o| **o != right)
            .unwrap()
            .clone()
    }

    /// Plays the running level, answering the first `correct` questions right.
    fn play_level(session: &mut QuizSession<StdRng>, correct: usize) -> LevelOutcome {
        let mut answered = 0;
        loop {
            let answer = if answered < correct {
                correct_answer(session)
            } else {
                wrong_answer(session)
            };
            session.submit_answer(&answer).unwrap();
            answered += 1;
            match session.advance().unwrap() {
                QuizStep::Question(_) => {}
                QuizStep::Finished(outcome) => return outcome,
            }
        }
    }

    fn pass_up_to(session: &mut QuizSession<StdRng>, level: u32) {
        for n in 1..=level {
            session.start_level(n).unwrap();
            play_level(session, 5);
            session.finish().unwrap();
        }
    }

    #[test]
    fn starts_at_level_select_with_first_level_open() {
        let s = session();
        assert_eq!(s.phase(), QuizPhase::LevelSelect);
        assert_eq!(s.max_unlocked(), LevelNumber::FIRST);
        let select = s.level_select();
        assert_eq!(select.levels.len(), 10);
        assert!(select.levels[0].unlocked);
        assert!(select.levels[1..].iter().all(|l| !l.unlocked));
        assert_eq!(select.target_score, 4);
        assert_eq!(select.questions_per_level, 5);
    }

    #[test]
    fn start_level_resets_attempt_and_presents_first_question() {
        let mut s = session();
        let q = s.start_level(1).unwrap();
        assert_eq!(s.current_level(), LevelNumber::new(1));
        assert_eq!(s.score(), 0);
        assert_eq!(s.question_cursor(), 0);
        assert_eq!(s.phase(), QuizPhase::AwaitingAnswer);
        assert_eq!(q.number, 1);
        assert_eq!(q.total, 5);
        assert_eq!(q.options.len(), 3);
    }

    #[test]
    fn presented_options_are_a_permutation_of_the_question() {
        let mut s = session();
        let q = s.start_level(1).unwrap();
        let level = s.catalog().get_level(LevelNumber::FIRST).unwrap();
        let source = level
            .questions()
            .iter()
            .find(|c| c.prompt() == q.prompt)
            .unwrap();
        let mut shown = q.options.clone();
        let mut expected = source.options().to_vec();
        shown.sort();
        expected.sort();
        assert_eq!(shown, expected);
    }

    #[test]
    fn locked_and_out_of_range_levels_are_refused_without_change() {
        let mut s = session();
        for level in [0, 2, 10, 11] {
            let err = s.start_level(level).unwrap_err();
            assert_eq!(
                err,
                QuizError::InvalidLevelSelection {
                    requested: level,
                    max_unlocked: LevelNumber::FIRST
                }
            );
            assert_eq!(s.phase(), QuizPhase::LevelSelect);
            assert_eq!(s.current_level(), None);
        }
    }

    #[test]
    fn refused_start_keeps_running_attempt() {
        let mut s = session();
        s.start_level(1).unwrap();
        let right = correct_answer(&s);
        s.submit_answer(&right).unwrap();
        s.advance().unwrap();
        assert!(s.start_level(3).is_err());
        assert_eq!(s.score(), 1);
        assert_eq!(s.question_cursor(), 1);
        assert_eq!(s.phase(), QuizPhase::AwaitingAnswer);
    }

    #[test]
    fn correct_answer_scores_and_wrong_does_not() {
        let mut s = session();
        s.start_level(1).unwrap();
        let right = correct_answer(&s);
        let feedback = s.submit_answer(&right).unwrap();
        assert!(feedback.correct);
        assert_eq!(feedback.score, 1);
        assert_eq!(feedback.correct_answer, right);

        s.advance().unwrap();
        let wrong = wrong_answer(&s);
        let feedback = s.submit_answer(&wrong).unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.score, 1);
        assert_eq!(feedback.answered, 2);
    }

    #[test]
    fn second_submission_is_refused() {
        let mut s = session();
        s.start_level(1).unwrap();
        let right = correct_answer(&s);
        s.submit_answer(&right).unwrap();
        assert_eq!(s.phase(), QuizPhase::ShowingFeedback);
        assert_eq!(
            s.submit_answer(&right).unwrap_err(),
            QuizError::NoActiveQuestion
        );
        assert_eq!(s.score(), 1);
        assert_eq!(s.question_cursor(), 1);
    }

    #[test]
    fn submitting_at_level_select_is_refused() {
        let mut s = session();
        assert_eq!(s.submit_answer("x").unwrap_err(), QuizError::NoActiveQuestion);
        assert_eq!(s.advance().unwrap_err(), QuizError::NoLevelInProgress);
        assert_eq!(s.finish().unwrap_err(), QuizError::NoLevelInProgress);
    }

    #[test]
    fn level_ends_after_exactly_questions_per_level_answers() {
        let mut s = session();
        s.start_level(1).unwrap();
        for i in 0..5 {
            let answer = correct_answer(&s);
            let feedback = s.submit_answer(&answer).unwrap();
            assert_eq!(feedback.level_finished(), i == 4);
            let step = s.advance().unwrap();
            assert_eq!(matches!(step, QuizStep::Finished(_)), i == 4);
        }
        assert_eq!(s.phase(), QuizPhase::LevelComplete);
        assert!(s.active_question().is_none());
        assert_eq!(s.submit_answer("x").unwrap_err(), QuizError::NoActiveQuestion);
        // Repeated advance does not produce a sixth question.
        assert!(matches!(s.advance().unwrap(), QuizStep::Finished(_)));
    }

    #[test]
    fn all_correct_on_level_one_unlocks_level_two() {
        let mut s = session();
        s.start_level(1).unwrap();
        let outcome = play_level(&mut s, 5);
        assert_eq!(outcome.score, 5);
        assert_eq!(outcome.result, LevelResult::Unlocked(LevelNumber::new(2).unwrap()));
        assert_eq!(s.max_unlocked().value(), 2);

        let finished = s.finish().unwrap();
        assert_eq!(finished, outcome);
        assert_eq!(s.phase(), QuizPhase::LevelSelect);
        assert!(s.level_select().levels[1].unlocked);
    }

    #[test]
    fn all_wrong_fails_and_keeps_unlocks() {
        let mut s = session();
        s.start_level(1).unwrap();
        let outcome = play_level(&mut s, 0);
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.result, LevelResult::Failed);
        assert!(outcome.notice().contains("at least 4"));
        assert_eq!(s.max_unlocked(), LevelNumber::FIRST);
    }

    #[test]
    fn pass_threshold_is_four_of_five() {
        for (correct, passes) in [(3, false), (4, true), (5, true)] {
            let mut s = session();
            s.start_level(1).unwrap();
            let outcome = play_level(&mut s, correct);
            assert_eq!(outcome.passed(), passes, "{correct} correct");
            assert_eq!(s.max_unlocked().value(), if passes { 2 } else { 1 });
        }
    }

    #[test]
    fn replaying_a_cleared_level_does_not_unlock_again() {
        let mut s = session();
        pass_up_to(&mut s, 2);
        assert_eq!(s.max_unlocked().value(), 3);

        s.start_level(1).unwrap();
        let outcome = play_level(&mut s, 5);
        assert_eq!(outcome.result, LevelResult::Completed);
        assert_eq!(s.max_unlocked().value(), 3);
    }

    #[test]
    fn passing_last_level_reports_all_complete() {
        let mut s = session();
        pass_up_to(&mut s, 9);
        assert_eq!(s.max_unlocked().value(), 10);

        s.start_level(10).unwrap();
        let outcome = play_level(&mut s, 5);
        assert_eq!(outcome.result, LevelResult::AllLevelsComplete);
        assert_eq!(s.max_unlocked().value(), 10);
        assert!(outcome.notice().contains("all 10 levels"));
    }

    #[test]
    fn failing_a_replay_keeps_unlocks() {
        let mut s = session();
        pass_up_to(&mut s, 3);
        s.start_level(2).unwrap();
        play_level(&mut s, 1);
        assert_eq!(s.max_unlocked().value(), 4);
    }

    #[test]
    fn abandon_discards_attempt_only() {
        let mut s = session();
        pass_up_to(&mut s, 1);
        s.start_level(2).unwrap();
        let right = correct_answer(&s);
        s.submit_answer(&right).unwrap();

        assert_eq!(
            s.abandon_level(),
            Some(LeftLevel::Discarded(LevelNumber::new(2).unwrap()))
        );
        assert_eq!(s.phase(), QuizPhase::LevelSelect);
        assert_eq!(s.score(), 0);
        assert_eq!(s.max_unlocked().value(), 2);
        assert_eq!(s.abandon_level(), None);
    }

    #[test]
    fn finish_before_last_answer_is_refused() {
        let mut s = session();
        s.start_level(1).unwrap();
        assert_eq!(s.finish().unwrap_err(), QuizError::LevelNotFinished);
        assert_eq!(s.phase(), QuizPhase::AwaitingAnswer);
    }

    #[test]
    fn restarting_resets_score_and_cursor() {
        let mut s = session();
        s.start_level(1).unwrap();
        let right = correct_answer(&s);
        s.submit_answer(&right).unwrap();
        s.advance().unwrap();

        s.start_level(1).unwrap();
        assert_eq!(s.score(), 0);
        assert_eq!(s.question_cursor(), 0);
    }

    #[test]
    fn custom_catalog_uses_its_own_threshold() {
        let questions: Vec<Question> = (0..10)
            .map(|i| Question::new(format!("Q{i}"), ["a", "b", "c"], "a").unwrap())
            .collect();
        let catalog = QuizCatalog::new(vec![
            Level::new(LevelNumber::FIRST, questions.clone()),
            Level::new(LevelNumber::new(2).unwrap(), questions),
        ])
        .unwrap();
        let mut s = QuizSession::with_rng(Arc::new(catalog), StdRng::seed_from_u64(3));
        assert_eq!(s.level_select().target_score, 8);

        s.start_level(1).unwrap();
        for i in 0..10 {
            s.submit_answer(if i < 8 { "a" } else { "b" }).unwrap();
            s.advance().unwrap();
        }
        let outcome = s.finish().unwrap();
        assert_eq!(outcome.score, 8);
        assert_eq!(outcome.result, LevelResult::Unlocked(LevelNumber::new(2).unwrap()));
    }

    #[test]
    fn leaving_after_last_answer_keeps_the_unlock() {
        let mut s = session();
        s.start_level(1).unwrap();
        for answered in 1..=5 {
            let right = correct_answer(&s);
            s.submit_answer(&right).unwrap();
            if answered < 5 {
                s.advance().unwrap();
            }
        }
        assert_eq!(s.phase(), QuizPhase::ShowingFeedback);

        let Some(LeftLevel::Evaluated(outcome)) = s.abandon_level() else {
            panic!("expected the finished attempt to be evaluated");
        };
        assert_eq!(outcome.score, 5);
        assert_eq!(outcome.result, LevelResult::Unlocked(LevelNumber::new(2).unwrap()));
        assert_eq!(s.max_unlocked().value(), 2);
        assert_eq!(s.phase(), QuizPhase::LevelSelect);
    }

    #[test]
    fn leaving_after_last_wrong_answer_keeps_unlocks() {
        let mut s = session();
        s.start_level(1).unwrap();
        for answered in 1..=5 {
            let wrong = wrong_answer(&s);
            s.submit_answer(&wrong).unwrap();
            if answered < 5 {
                s.advance().unwrap();
            }
        }

        let Some(LeftLevel::Evaluated(outcome)) = s.abandon_level() else {
            panic!("expected the finished attempt to be evaluated");
        };
        assert_eq!(outcome.result, LevelResult::Failed);
        assert_eq!(s.max_unlocked(), LevelNumber::FIRST);
    }

    #[test]
    fn each_start_takes_a_fresh_question_order() {
        let mut s = session();
        let level = s.catalog().get_level(LevelNumber::FIRST).unwrap().clone();
        let mut first_prompts = std::collections::HashSet::new();
        let mut orders = std::collections::HashSet::new();

        for _ in 0..20 {
            let mut order = vec![s.start_level(1).unwrap().prompt];
            for _ in 1..5 {
                let right = correct_answer(&s);
                s.submit_answer(&right).unwrap();
                let QuizStep::Question(next) = s.advance().unwrap() else {
                    panic!("level ended early");
                };
                order.push(next.prompt);
            }
            first_prompts.insert(order[0].clone());

            let mut sorted = order.clone();
            sorted.sort();
            let mut expected: Vec<String> =
                level.questions().iter().map(|q| q.prompt().to_owned()).collect();
            expected.sort();
            assert_eq!(sorted, expected, "every attempt covers the whole level");
            orders.insert(order);
        }

        assert!(first_prompts.len() > 1, "first prompt never changed across starts");
        assert!(orders.len() > 1, "question order never changed across starts");
    }

    #[test]
    fn same_seed_gives_same_question_order() {
        let mut a = session();
        let mut b = session();
        assert_eq!(a.start_level(1).unwrap(), b.start_level(1).unwrap());
    }
}
