mod activity;
mod bmi;
mod collection;
mod ids;
mod quiz;
mod quiz_catalog;
mod tips;

pub use ids::{EntryId, UserId, UserIdError};

pub use activity::{ActivityAmount, ActivityError, ActivityKind};
pub use bmi::{BmiCategory, BmiError, BmiReading, BodyMeasurement};
pub use collection::HealthCollection;
pub use quiz::{
    Level, LevelNumber, OPTIONS_PER_QUESTION, Question, QuestionError, target_score,
};
pub use quiz_catalog::{
    BUILTIN_QUESTIONS_PER_LEVEL, BUILTIN_TOTAL_LEVELS, CatalogError, QuizCatalog,
};
pub use tips::{Tip, TipCatalog};
