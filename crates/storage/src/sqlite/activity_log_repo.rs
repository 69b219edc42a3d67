use health_core::model::{ActivityKind, UserId};
use tracing::debug;

use super::{
    SqliteRepository,
    mapping::{entry_id_from_i64, map_activity_row},
};
use crate::repository::{
    ActivityLogRecord, ActivityLogRepository, NewActivityLog, StorageError,
};

#[async_trait::async_trait]
impl ActivityLogRepository for SqliteRepository {
    async fn append_activity(
        &self,
        entry: NewActivityLog,
    ) -> Result<ActivityLogRecord, StorageError> {
        let res = sqlx::query(
            r"
                INSERT INTO activity_logs (user_id, kind, amount, recorded_at)
                VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(entry.user.as_str())
        .bind(entry.kind.as_str())
        .bind(i64::from(entry.amount.value()))
        .bind(entry.recorded_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let id = entry_id_from_i64(res.last_insert_rowid())?;
        debug!(%id, kind = %entry.kind, "activity log stored");
        Ok(ActivityLogRecord::from_new(id, entry))
    }

    async fn list_activity(
        &self,
        user: &UserId,
        kind: ActivityKind,
    ) -> Result<Vec<ActivityLogRecord>, StorageError> {
        let rows = sqlx::query(
            r"
                SELECT id, user_id, kind, amount, recorded_at
                FROM activity_logs
                WHERE user_id = ?1 AND kind = ?2
                ORDER BY recorded_at ASC, id ASC
            ",
        )
        .bind(user.as_str())
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(map_activity_row(&row)?);
        }
        Ok(out)
    }

    async fn latest_activity(
        &self,
        user: &UserId,
        kind: ActivityKind,
    ) -> Result<Option<ActivityLogRecord>, StorageError> {
        let row = sqlx::query(
            r"
                SELECT id, user_id, kind, amount, recorded_at
                FROM activity_logs
                WHERE user_id = ?1 AND kind = ?2
                ORDER BY recorded_at DESC, id DESC
                LIMIT 1
            ",
        )
        .bind(user.as_str())
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        row.as_ref().map(map_activity_row).transpose()
    }
}
