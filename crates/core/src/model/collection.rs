use serde::{Deserialize, Serialize};
use std::fmt;

/// The persisted record streams of a user's health data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthCollection {
    BmiHistory,
    WaterLogs,
    ExerciseLogs,
}

impl HealthCollection {
    pub const ALL: [Self; 3] = [Self::BmiHistory, Self::WaterLogs, Self::ExerciseLogs];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BmiHistory => "bmi_history",
            Self::WaterLogs => "water_logs",
            Self::ExerciseLogs => "exercise_logs",
        }
    }
}

impl fmt::Display for HealthCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
