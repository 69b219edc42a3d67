mod engine;
mod service;
mod shuffle;
mod timing;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use engine::{
    AnswerFeedback, LeftLevel, LevelOutcome, LevelResult, LevelSelect, LevelState,
    PresentedQuestion, QuizPhase, QuizSession, QuizStep,
};
pub use service::QuizService;
pub use shuffle::shuffled;
pub use timing::QuizTiming;
