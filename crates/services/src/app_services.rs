use std::sync::Arc;

use health_core::model::{HealthCollection, QuizCatalog, TipCatalog, UserId};
use storage::repository::Storage;
use tracing::info;

use crate::Clock;
use crate::activity_log_service::ActivityLogService;
use crate::bmi_service::BmiService;
use crate::change_feed::{ChangeFeed, Subscription};
use crate::error::AppServicesError;
use crate::quiz::QuizService;

/// Assembles app-facing services for one user.
#[derive(Clone)]
pub struct AppServices {
    user: UserId,
    feed: ChangeFeed,
    quiz: Arc<QuizService>,
    activity: Arc<ActivityLogService>,
    bmi: Arc<BmiService>,
    tips: Arc<TipCatalog>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        user: UserId,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        info!(user = %user, "sqlite storage ready");
        Ok(Self::from_storage(&storage, clock, user))
    }

    /// Build services over volatile in-memory storage.
    #[must_use]
    pub fn in_memory(clock: Clock, user: UserId) -> Self {
        Self::from_storage(&Storage::in_memory(), clock, user)
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, user: UserId) -> Self {
        let feed = ChangeFeed::new();
        let activity = Arc::new(ActivityLogService::new(
            clock,
            user.clone(),
            Arc::clone(&storage.activity_logs),
            feed.clone(),
        ));
        let bmi = Arc::new(BmiService::new(
            clock,
            user.clone(),
            Arc::clone(&storage.bmi_history),
            feed.clone(),
        ));

        Self {
            user,
            feed,
            quiz: Arc::new(QuizService::new(QuizCatalog::builtin())),
            activity,
            bmi,
            tips: Arc::new(TipCatalog::builtin()),
        }
    }

    /// Replace the quiz service, e.g. with a seeded or faster one.
    #[must_use]
    pub fn with_quiz(mut self, quiz: QuizService) -> Self {
        self.quiz = Arc::new(quiz);
        self
    }

    #[must_use]
    pub fn user(&self) -> &UserId {
        &self.user
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn activity(&self) -> Arc<ActivityLogService> {
        Arc::clone(&self.activity)
    }

    #[must_use]
    pub fn bmi(&self) -> Arc<BmiService> {
        Arc::clone(&self.bmi)
    }

    #[must_use]
    pub fn tips(&self) -> Arc<TipCatalog> {
        Arc::clone(&self.tips)
    }

    /// Watch appends to one of the user's collections.
    #[must_use]
    pub fn subscribe(&self, collection: HealthCollection) -> Subscription {
        self.feed.subscribe(collection)
    }
}
