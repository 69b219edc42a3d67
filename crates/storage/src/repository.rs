use async_trait::async_trait;
use chrono::{DateTime, Utc};
use health_core::model::{ActivityAmount, ActivityKind, BmiReading, EntryId, UserId};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// An activity entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewActivityLog {
    pub user: UserId,
    pub kind: ActivityKind,
    pub amount: ActivityAmount,
    pub recorded_at: DateTime<Utc>,
}

/// Persisted water or exercise entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityLogRecord {
    pub id: EntryId,
    pub user: UserId,
    pub kind: ActivityKind,
    pub amount: ActivityAmount,
    pub recorded_at: DateTime<Utc>,
}

impl ActivityLogRecord {
    #[must_use]
    pub fn from_new(id: EntryId, entry: NewActivityLog) -> Self {
        Self {
            id,
            user: entry.user,
            kind: entry.kind,
            amount: entry.amount,
            recorded_at: entry.recorded_at,
        }
    }
}

/// A BMI reading that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBmiEntry {
    pub user: UserId,
    pub reading: BmiReading,
    pub recorded_at: DateTime<Utc>,
}

/// Persisted BMI history entry.
#[derive(Debug, Clone, PartialEq)]
pub struct BmiHistoryRecord {
    pub id: EntryId,
    pub user: UserId,
    pub reading: BmiReading,
    pub recorded_at: DateTime<Utc>,
}

impl BmiHistoryRecord {
    #[must_use]
    pub fn from_new(id: EntryId, entry: NewBmiEntry) -> Self {
        Self {
            id,
            user: entry.user,
            reading: entry.reading,
            recorded_at: entry.recorded_at,
        }
    }
}

/// Append-only store for water and exercise logs.
#[async_trait]
pub trait ActivityLogRepository: Send + Sync {
    /// Store a new entry and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the entry cannot be stored.
    async fn append_activity(&self, entry: NewActivityLog)
    -> Result<ActivityLogRecord, StorageError>;

    /// All entries of `kind` for `user`, oldest first (ties broken by id).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the entries cannot be read.
    async fn list_activity(
        &self,
        user: &UserId,
        kind: ActivityKind,
    ) -> Result<Vec<ActivityLogRecord>, StorageError>;

    /// The newest entry of `kind` for `user`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the entry cannot be read.
    async fn latest_activity(
        &self,
        user: &UserId,
        kind: ActivityKind,
    ) -> Result<Option<ActivityLogRecord>, StorageError>;
}

/// Append-only store for BMI readings.
#[async_trait]
pub trait BmiHistoryRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the entry cannot be stored.
    async fn append_bmi(&self, entry: NewBmiEntry) -> Result<BmiHistoryRecord, StorageError>;

    /// All readings for `user`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the entries cannot be read.
    async fn list_bmi(&self, user: &UserId) -> Result<Vec<BmiHistoryRecord>, StorageError>;
}

#[derive(Default)]
struct MemoryState {
    next_id: u64,
    activity: Vec<ActivityLogRecord>,
    bmi: Vec<BmiHistoryRecord>,
}

impl MemoryState {
    fn allocate_id(&mut self) -> EntryId {
        self.next_id += 1;
        EntryId::new(self.next_id)
    }
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryState>, StorageError> {
        self.state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

#[async_trait]
impl ActivityLogRepository for InMemoryRepository {
    async fn append_activity(
        &self,
        entry: NewActivityLog,
    ) -> Result<ActivityLogRecord, StorageError> {
        let mut guard = self.lock()?;
        let id = guard.allocate_id();
        let record = ActivityLogRecord::from_new(id, entry);
        guard.activity.push(record.clone());
        Ok(record)
    }

    async fn list_activity(
        &self,
        user: &UserId,
        kind: ActivityKind,
    ) -> Result<Vec<ActivityLogRecord>, StorageError> {
        let guard = self.lock()?;
        let mut out: Vec<_> = guard
            .activity
            .iter()
            .filter(|r| &r.user == user && r.kind == kind)
            .cloned()
            .collect();
        out.sort_by_key(|r| (r.recorded_at, r.id));
        Ok(out)
    }

    async fn latest_activity(
        &self,
        user: &UserId,
        kind: ActivityKind,
    ) -> Result<Option<ActivityLogRecord>, StorageError> {
        let guard = self.lock()?;
        Ok(guard
            .activity
            .iter()
            .filter(|r| &r.user == user && r.kind == kind)
            .max_by_key(|r| (r.recorded_at, r.id))
            .cloned())
    }
}

#[async_trait]
impl BmiHistoryRepository for InMemoryRepository {
    async fn append_bmi(&self, entry: NewBmiEntry) -> Result<BmiHistoryRecord, StorageError> {
        let mut guard = self.lock()?;
        let id = guard.allocate_id();
        let record = BmiHistoryRecord::from_new(id, entry);
        guard.bmi.push(record.clone());
        Ok(record)
    }

    async fn list_bmi(&self, user: &UserId) -> Result<Vec<BmiHistoryRecord>, StorageError> {
        let guard = self.lock()?;
        let mut out: Vec<_> = guard
            .bmi
            .iter()
            .filter(|r| &r.user == user)
            .cloned()
            .collect();
        out.sort_by_key(|r| (r.recorded_at, r.id));
        Ok(out)
    }
}

/// Aggregates the health repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub activity_logs: Arc<dyn ActivityLogRepository>,
    pub bmi_history: Arc<dyn BmiHistoryRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let activity_logs: Arc<dyn ActivityLogRepository> = Arc::new(repo.clone());
        let bmi_history: Arc<dyn BmiHistoryRepository> = Arc::new(repo);
        Self {
            activity_logs,
            bmi_history,
        }
    }
}
