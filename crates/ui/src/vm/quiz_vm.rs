use std::sync::Arc;
use std::time::Duration;

use services::{
    AnswerFeedback, LevelOutcome, LevelSelect, PresentedQuestion, QuizError, QuizService, QuizStep,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelButtonVm {
    pub number: u32,
    pub label: String,
    pub unlocked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelSelectVm {
    pub summary: String,
    pub levels: Vec<LevelButtonVm>,
}

impl From<&LevelSelect> for LevelSelectVm {
    fn from(select: &LevelSelect) -> Self {
        let levels = select
            .levels
            .iter()
            .map(|level| {
                let number = level.number.value();
                let label = if level.unlocked {
                    format!("Level {number}")
                } else {
                    format!("Level {number} 🔒")
                };
                LevelButtonVm {
                    number,
                    label,
                    unlocked: level.unlocked,
                }
            })
            .collect();
        Self {
            summary: format!(
                "You have unlocked level {} of {}. Answer at least {}/{} questions correctly to unlock the next level.",
                select.max_unlocked, select.total_levels, select.target_score, select.questions_per_level
            ),
            levels,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub heading: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub score_label: String,
}

impl From<&PresentedQuestion> for QuestionVm {
    fn from(question: &PresentedQuestion) -> Self {
        Self {
            heading: format!(
                "Level {} | Question {}/{}",
                question.level, question.number, question.total
            ),
            prompt: question.prompt.clone(),
            options: question.options.clone(),
            score_label: format!("Score: {}", question.score),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub selected: String,
    pub correct_answer: String,
    pub message: String,
}

impl From<&AnswerFeedback> for FeedbackVm {
    fn from(feedback: &AnswerFeedback) -> Self {
        let message = if feedback.correct {
            format!("Correct! Level {} score: {}", feedback.level, feedback.score)
        } else {
            format!(
                "Wrong! The correct answer is {}. Level {} score: {}",
                feedback.correct_answer, feedback.level, feedback.score
            )
        };
        Self {
            correct: feedback.correct,
            selected: feedback.selected.clone(),
            correct_answer: feedback.correct_answer.clone(),
            message,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeVm {
    pub passed: bool,
    pub headline: String,
    pub notice: String,
}

impl From<&LevelOutcome> for OutcomeVm {
    fn from(outcome: &LevelOutcome) -> Self {
        Self {
            passed: outcome.passed(),
            headline: outcome.headline(),
            notice: outcome.notice(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    LevelSelect(LevelSelectVm),
    Question {
        question: QuestionVm,
        feedback: Option<FeedbackVm>,
    },
    Outcome(OutcomeVm),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizTimer {
    /// Leave the feedback and show the next question or the outcome.
    Advance,
    /// Leave the outcome and return to level selection.
    Finish,
}

/// A delayed step the view must run through [`QuizVm::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledStep {
    pub timer: QuizTimer,
    pub delay: Duration,
    epoch: u64,
}

/// Screen state for the quiz view, driving the shared `QuizService`.
///
/// Every start or exit bumps the epoch so timers from an earlier attempt
/// become no-ops.
pub struct QuizVm {
    quiz: Arc<QuizService>,
    screen: QuizScreen,
    notice: Option<String>,
    epoch: u64,
}

impl QuizVm {
    /// Resume a question still awaiting an answer, otherwise open level selection.
    #[must_use]
    pub fn new(quiz: Arc<QuizService>) -> Self {
        let screen = match quiz.active_question() {
            Some(question) => QuizScreen::Question {
                question: QuestionVm::from(&question),
                feedback: None,
            },
            None => {
                quiz.abandon_level();
                QuizScreen::LevelSelect(LevelSelectVm::from(&quiz.level_select()))
            }
        };
        Self {
            quiz,
            screen,
            notice: None,
            epoch: 0,
        }
    }

    #[must_use]
    pub fn screen(&self) -> &QuizScreen {
        &self.screen
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn options_enabled(&self) -> bool {
        matches!(self.screen, QuizScreen::Question { feedback: None, .. })
    }

    pub fn start_level(&mut self, level: u32) {
        match self.quiz.start_level(level) {
            Ok(question) => {
                self.epoch += 1;
                self.notice = None;
                self.screen = QuizScreen::Question {
                    question: QuestionVm::from(&question),
                    feedback: None,
                };
            }
            Err(QuizError::InvalidLevelSelection { requested, .. }) => {
                self.notice = Some(format!("Level {requested} is still locked."));
            }
            Err(err) => {
                self.notice = Some(err.to_string());
            }
        }
    }

    /// Grade `option`; the returned step shows the next question after the feedback delay.
    pub fn answer(&mut self, option: &str) -> Option<ScheduledStep> {
        if !self.options_enabled() {
            return None;
        }
        let feedback = self.quiz.submit_answer(option).ok()?;
        if let QuizScreen::Question { feedback: slot, .. } = &mut self.screen {
            *slot = Some(FeedbackVm::from(&feedback));
        }
        Some(self.schedule(QuizTimer::Advance))
    }

    /// Run a step scheduled earlier; may schedule the next one.
    pub fn run(&mut self, step: ScheduledStep) -> Option<ScheduledStep> {
        if step.epoch != self.epoch {
            return None;
        }
        match step.timer {
            QuizTimer::Advance => match self.quiz.advance().ok()? {
                QuizStep::Question(question) => {
                    self.screen = QuizScreen::Question {
                        question: QuestionVm::from(&question),
                        feedback: None,
                    };
                    None
                }
                QuizStep::Finished(outcome) => {
                    self.screen = QuizScreen::Outcome(OutcomeVm::from(&outcome));
                    Some(self.schedule(QuizTimer::Finish))
                }
            },
            QuizTimer::Finish => {
                self.quiz.finish().ok()?;
                self.show_level_select();
                None
            }
        }
    }

    /// Drop the running attempt and return to level selection.
    pub fn back_to_levels(&mut self) {
        self.epoch += 1;
        self.notice = None;
        self.quiz.abandon_level();
        self.show_level_select();
    }

    fn show_level_select(&mut self) {
        self.screen = QuizScreen::LevelSelect(LevelSelectVm::from(&self.quiz.level_select()));
    }

    fn schedule(&self, timer: QuizTimer) -> ScheduledStep {
        let timing = self.quiz.timing();
        let delay = match timer {
            QuizTimer::Advance => timing.feedback_delay,
            QuizTimer::Finish => timing.result_delay,
        };
        ScheduledStep {
            timer,
            delay,
            epoch: self.epoch,
        }
    }
}
