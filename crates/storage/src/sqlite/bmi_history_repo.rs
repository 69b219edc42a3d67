use health_core::model::UserId;

use super::{
    SqliteRepository,
    mapping::{entry_id_from_i64, map_bmi_row},
};
use crate::repository::{BmiHistoryRecord, BmiHistoryRepository, NewBmiEntry, StorageError};

#[async_trait::async_trait]
impl BmiHistoryRepository for SqliteRepository {
    async fn append_bmi(&self, entry: NewBmiEntry) -> Result<BmiHistoryRecord, StorageError> {
        let reading = &entry.reading;
        let res = sqlx::query(
            r"
                INSERT INTO bmi_history (
                    user_id, bmi_value, weight_kg, height_cm, category, recorded_at
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ",
        )
        .bind(entry.user.as_str())
        .bind(reading.value())
        .bind(reading.weight_kg())
        .bind(reading.height_cm())
        .bind(reading.category().as_str())
        .bind(entry.recorded_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let id = entry_id_from_i64(res.last_insert_rowid())?;
        Ok(BmiHistoryRecord::from_new(id, entry))
    }

    async fn list_bmi(&self, user: &UserId) -> Result<Vec<BmiHistoryRecord>, StorageError> {
        let rows = sqlx::query(
            r"
                SELECT id, user_id, bmi_value, weight_kg, height_cm, category, recorded_at
                FROM bmi_history
                WHERE user_id = ?1
                ORDER BY recorded_at ASC, id ASC
            ",
        )
        .bind(user.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(map_bmi_row(&row)?);
        }
        Ok(out)
    }
}
