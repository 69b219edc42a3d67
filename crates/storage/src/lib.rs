#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    ActivityLogRecord, ActivityLogRepository, BmiHistoryRecord, BmiHistoryRepository,
    InMemoryRepository, NewActivityLog, NewBmiEntry, Storage, StorageError,
};
