#![forbid(unsafe_code)]

pub mod activity_log_service;
pub mod app_services;
pub mod bmi_service;
pub mod change_feed;
pub mod error;
pub mod quiz;

pub use health_core::Clock;

pub use activity_log_service::{ActivityLogService, last_entry_notice};
pub use app_services::AppServices;
pub use bmi_service::{BmiCalculation, BmiService, SaveStatus};
pub use change_feed::{ChangeFeed, Subscription};
pub use error::{ActivityLogError, AppServicesError, BmiServiceError, QuizError};
pub use quiz::{
    AnswerFeedback, LeftLevel, LevelOutcome, LevelResult, LevelSelect, LevelState,
    PresentedQuestion, QuizPhase, QuizService, QuizSession, QuizStep, QuizTiming,
};
