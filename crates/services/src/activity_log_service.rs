use std::sync::Arc;

use chrono::Local;
use health_core::model::{ActivityAmount, ActivityKind, UserId};
use storage::repository::{ActivityLogRecord, ActivityLogRepository, NewActivityLog};
use tracing::info;

use crate::Clock;
use crate::change_feed::ChangeFeed;
use crate::error::ActivityLogError;

/// Records water and exercise entries for one user.
#[derive(Clone)]
pub struct ActivityLogService {
    clock: Clock,
    user: UserId,
    logs: Arc<dyn ActivityLogRepository>,
    feed: ChangeFeed,
}

impl ActivityLogService {
    #[must_use]
    pub fn new(
        clock: Clock,
        user: UserId,
        logs: Arc<dyn ActivityLogRepository>,
        feed: ChangeFeed,
    ) -> Self {
        Self {
            clock,
            user,
            logs,
            feed,
        }
    }

    #[must_use]
    pub fn user(&self) -> &UserId {
        &self.user
    }

    /// Log glasses of water from raw form input.
    ///
    /// # Errors
    ///
    /// Returns `ActivityLogError::Invalid` for bad input (nothing is stored) or
    /// `ActivityLogError::Storage` if the append fails.
    pub async fn log_water(&self, raw: &str) -> Result<ActivityLogRecord, ActivityLogError> {
        self.log(ActivityKind::Water, raw).await
    }

    /// Log minutes of exercise from raw form input.
    ///
    /// # Errors
    ///
    /// Same as [`Self::log_water`].
    pub async fn log_exercise(&self, raw: &str) -> Result<ActivityLogRecord, ActivityLogError> {
        self.log(ActivityKind::Exercise, raw).await
    }

    /// Parse `raw` and append it with a timestamp from the service clock.
    ///
    /// # Errors
    ///
    /// Returns `ActivityLogError::Invalid` or `ActivityLogError::Storage`.
    pub async fn log(
        &self,
        kind: ActivityKind,
        raw: &str,
    ) -> Result<ActivityLogRecord, ActivityLogError> {
        let amount = ActivityAmount::parse(kind, raw)?;
        let record = self
            .logs
            .append_activity(NewActivityLog {
                user: self.user.clone(),
                kind,
                amount,
                recorded_at: self.clock.now(),
            })
            .await?;

        info!(
            %kind,
            amount = amount.value(),
            user = %self.user,
            id = %record.id,
            "activity logged"
        );
        self.feed.publish(kind.collection());
        Ok(record)
    }

    /// Entries of `kind`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `ActivityLogError::Storage` if the entries cannot be read.
    pub async fn list(&self, kind: ActivityKind) -> Result<Vec<ActivityLogRecord>, ActivityLogError> {
        Ok(self.logs.list_activity(&self.user, kind).await?)
    }

    /// # Errors
    ///
    /// Returns `ActivityLogError::Storage` if the entry cannot be read.
    pub async fn latest(
        &self,
        kind: ActivityKind,
    ) -> Result<Option<ActivityLogRecord>, ActivityLogError> {
        Ok(self.logs.latest_activity(&self.user, kind).await?)
    }
}

/// Text for the "last entry" line under each log form.
#[must_use]
pub fn last_entry_notice(kind: ActivityKind, latest: Option<&ActivityLogRecord>) -> String {
    match latest {
        Some(record) => format!(
            "Last {kind} entry: {} {} at {}.",
            record.amount.value(),
            record.kind.unit(),
            record.recorded_at.with_timezone(&Local).format("%H:%M")
        ),
        None => format!("No {kind} entries yet."),
    }
}
