use health_core::model::{
    ActivityAmount, ActivityKind, BmiCategory, BmiReading, EntryId, UserId,
};
use sqlx::Row;

use crate::repository::{ActivityLogRecord, BmiHistoryRecord, StorageError};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn entry_id_from_i64(v: i64) -> Result<EntryId, StorageError> {
    u64::try_from(v)
        .map(EntryId::new)
        .map_err(|_| StorageError::Serialization(format!("invalid entry id: {v}")))
}

pub(crate) fn parse_activity_kind(s: &str) -> Result<ActivityKind, StorageError> {
    ActivityKind::parse(s)
        .ok_or_else(|| StorageError::Serialization(format!("invalid activity kind: {s}")))
}

pub(crate) fn parse_bmi_category(s: &str) -> Result<BmiCategory, StorageError> {
    BmiCategory::parse(s)
        .ok_or_else(|| StorageError::Serialization(format!("invalid bmi category: {s}")))
}

pub(crate) fn map_activity_row(
    row: &sqlx::sqlite::SqliteRow,
) -> Result<ActivityLogRecord, StorageError> {
    let kind = parse_activity_kind(row.try_get::<String, _>("kind").map_err(ser)?.as_str())?;

    let amount_i64: i64 = row.try_get("amount").map_err(ser)?;
    let amount = u32::try_from(amount_i64)
        .map_err(|_| StorageError::Serialization(format!("invalid amount: {amount_i64}")))
        .and_then(|v| ActivityAmount::new(kind, v).map_err(ser))?;

    Ok(ActivityLogRecord {
        id: entry_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
        user: UserId::new(row.try_get::<String, _>("user_id").map_err(ser)?).map_err(ser)?,
        kind,
        amount,
        recorded_at: row.try_get("recorded_at").map_err(ser)?,
    })
}

pub(crate) fn map_bmi_row(row: &sqlx::sqlite::SqliteRow) -> Result<BmiHistoryRecord, StorageError> {
    let category =
        parse_bmi_category(row.try_get::<String, _>("category").map_err(ser)?.as_str())?;
    let reading = BmiReading::from_persisted(
        row.try_get("bmi_value").map_err(ser)?,
        row.try_get("weight_kg").map_err(ser)?,
        row.try_get("height_cm").map_err(ser)?,
        category,
    );

    Ok(BmiHistoryRecord {
        id: entry_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
        user: UserId::new(row.try_get::<String, _>("user_id").map_err(ser)?).map_err(ser)?,
        reading,
        recorded_at: row.try_get("recorded_at").map_err(ser)?,
    })
}
