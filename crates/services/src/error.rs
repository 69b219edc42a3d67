//! Shared error types for the services crate.

use thiserror::Error;

use health_core::model::{ActivityError, BmiError, LevelNumber};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by the quiz engine.
///
/// Every refusal leaves the engine state unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("level {requested} cannot be started (unlocked up to {max_unlocked})")]
    InvalidLevelSelection {
        requested: u32,
        max_unlocked: LevelNumber,
    },
    #[error("no question is awaiting an answer")]
    NoActiveQuestion,
    #[error("no level attempt is in progress")]
    NoLevelInProgress,
    #[error("the current level still has unanswered questions")]
    LevelNotFinished,
}

/// Errors emitted by `ActivityLogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ActivityLogError {
    #[error(transparent)]
    Invalid(#[from] ActivityError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `BmiService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BmiServiceError {
    #[error(transparent)]
    Invalid(#[from] BmiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
