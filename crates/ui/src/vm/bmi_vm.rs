use health_core::model::{BmiCategory, BmiReading, EntryId};
use services::{BmiCalculation, BmiServiceError, SaveStatus};
use storage::repository::BmiHistoryRecord;

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BmiResultVm {
    pub value_label: String,
    pub category_label: &'static str,
    pub category_class: &'static str,
    pub save_notice: String,
    pub saved: bool,
}

impl From<&BmiCalculation> for BmiResultVm {
    fn from(calc: &BmiCalculation) -> Self {
        let (save_notice, saved) = match &calc.status {
            SaveStatus::Saved(_) => ("BMI result saved to your history.".to_string(), true),
            SaveStatus::Failed(_) => ("Could not save this BMI result to your history.".to_string(), false),
        };
        Self {
            value_label: format_bmi(&calc.reading),
            category_label: calc.reading.category().label(),
            category_class: category_class(calc.reading.category()),
            save_notice,
            saved,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BmiHistoryRowVm {
    pub id: EntryId,
    pub value_label: String,
    pub category_label: &'static str,
    pub category_class: &'static str,
    pub measurement_label: String,
    pub recorded_at_str: String,
}

impl From<&BmiHistoryRecord> for BmiHistoryRowVm {
    fn from(record: &BmiHistoryRecord) -> Self {
        let reading = record.reading;
        Self {
            id: record.id,
            value_label: format_bmi(&reading),
            category_label: reading.category().label(),
            category_class: category_class(reading.category()),
            measurement_label: format!(
                "{} kg / {} cm",
                trim_number(reading.weight_kg()),
                trim_number(reading.height_cm())
            ),
            recorded_at_str: format_datetime(record.recorded_at),
        }
    }
}

/// History rows, newest first.
#[must_use]
pub fn map_bmi_history(records: &[BmiHistoryRecord]) -> Vec<BmiHistoryRowVm> {
    records.iter().rev().map(BmiHistoryRowVm::from).collect()
}

#[must_use]
pub fn format_bmi(reading: &BmiReading) -> String {
    format!("{:.2}", reading.value())
}

#[must_use]
pub fn category_class(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => "bmi-underweight",
        BmiCategory::Normal => "bmi-normal",
        BmiCategory::Overweight => "bmi-overweight",
        BmiCategory::Obese => "bmi-obese",
    }
}

#[must_use]
pub fn bmi_error_message(err: &BmiServiceError) -> &'static str {
    match err {
        BmiServiceError::Invalid(_) => "Please enter a valid weight and height.",
        _ => "Could not calculate BMI. Please try again.",
    }
}

fn trim_number(value: f64) -> String {
    let text = format!("{value:.1}");
    if let Some(whole) = text.strip_suffix(".0") {
        return whole.to_string();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_core::model::{BmiError, BodyMeasurement, UserId};
    use health_core::time::fixed_now;

    fn record(id: u64, weight: f64, height: f64) -> BmiHistoryRecord {
        BmiHistoryRecord {
            id: EntryId::new(id),
            user: UserId::local(),
            reading: BodyMeasurement::new(weight, height).unwrap().reading(),
            recorded_at: fixed_now(),
        }
    }

    #[test]
    fn result_reports_value_category_and_save_state() {
        let reading = BodyMeasurement::new(70.0, 175.0).unwrap().reading();
        let saved = BmiCalculation {
            reading,
            status: SaveStatus::Saved(record(1, 70.0, 175.0)),
        };
        let vm = BmiResultVm::from(&saved);
        assert_eq!(vm.value_label, "22.86");
        assert_eq!(vm.category_label, "Normal weight");
        assert_eq!(vm.category_class, "bmi-normal");
        assert!(vm.saved);

        let failed = BmiCalculation {
            reading,
            status: SaveStatus::Failed("down".into()),
        };
        let vm = BmiResultVm::from(&failed);
        assert!(!vm.saved);
        assert!(vm.save_notice.starts_with("Could not save"));
    }

    #[test]
    fn history_rows_are_newest_first() {
        let rows = map_bmi_history(&[record(1, 50.0, 180.0), record(2, 72.5, 175.0)]);
        assert_eq!(rows[0].id, EntryId::new(2));
        assert_eq!(rows[0].measurement_label, "72.5 kg / 175 cm");
        assert_eq!(rows[1].category_class, "bmi-underweight");
    }

    #[test]
    fn invalid_input_message() {
        let err = BmiServiceError::Invalid(BmiError::NonPositive);
        assert_eq!(bmi_error_message(&err), "Please enter a valid weight and height.");
    }
}
