use health_core::model::{ActivityKind, EntryId};
use services::{ActivityLogError, last_entry_notice};
use storage::repository::ActivityLogRecord;

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityEntryVm {
    pub id: EntryId,
    pub amount_label: String,
    pub recorded_at_str: String,
}

impl From<&ActivityLogRecord> for ActivityEntryVm {
    fn from(record: &ActivityLogRecord) -> Self {
        Self {
            id: record.id,
            amount_label: format!("{} {}", record.amount.value(), record.kind.unit()),
            recorded_at_str: format_datetime(record.recorded_at),
        }
    }
}

/// One log panel: heading, "last entry" notice and the entries, newest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityPanelVm {
    pub kind: ActivityKind,
    pub title: &'static str,
    pub input_label: &'static str,
    pub notice: String,
    pub entries: Vec<ActivityEntryVm>,
}

#[must_use]
pub fn activity_title(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Water => "Water intake",
        ActivityKind::Exercise => "Exercise",
    }
}

#[must_use]
pub fn activity_input_label(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Water => "Glasses of water",
        ActivityKind::Exercise => "Minutes of exercise",
    }
}

/// `records` must be in storage order (ascending by time).
#[must_use]
pub fn map_activity_panel(kind: ActivityKind, records: &[ActivityLogRecord]) -> ActivityPanelVm {
    ActivityPanelVm {
        kind,
        title: activity_title(kind),
        input_label: activity_input_label(kind),
        notice: last_entry_notice(kind, records.last()),
        entries: records.iter().rev().map(ActivityEntryVm::from).collect(),
    }
}

/// User-facing text for a failed log attempt.
#[must_use]
pub fn activity_error_message(err: &ActivityLogError) -> String {
    match err {
        ActivityLogError::Invalid(invalid) => format!("Please {invalid}."),
        _ => "Could not save the entry. Please try again.".to_string(),
    }
}
