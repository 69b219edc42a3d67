use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::collection::HealthCollection;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActivityError {
    #[error("enter a valid number of {unit} (> 0)")]
    InvalidAmount { unit: &'static str },
}

/// What a logged activity measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Glasses of water.
    Water,
    /// Minutes of exercise.
    Exercise,
}

impl ActivityKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Exercise => "exercise",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "water" => Some(Self::Water),
            "exercise" => Some(Self::Exercise),
            _ => None,
        }
    }

    /// Plural unit label.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Water => "glasses",
            Self::Exercise => "minutes",
        }
    }

    #[must_use]
    pub fn collection(self) -> HealthCollection {
        match self {
            Self::Water => HealthCollection::WaterLogs,
            Self::Exercise => HealthCollection::ExerciseLogs,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A strictly positive activity quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActivityAmount(u32);

impl ActivityAmount {
    /// # Errors
    ///
    /// Returns `ActivityError::InvalidAmount` for zero.
    pub fn new(kind: ActivityKind, value: u32) -> Result<Self, ActivityError> {
        if value == 0 {
            return Err(ActivityError::InvalidAmount { unit: kind.unit() });
        }
        Ok(Self(value))
    }

    /// Parse raw form input for the given kind.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::InvalidAmount` for empty, non-numeric, zero or
    /// negative input.
    pub fn parse(kind: ActivityKind, raw: &str) -> Result<Self, ActivityError> {
        let value: u32 = raw
            .trim()
            .parse()
            .map_err(|_| ActivityError::InvalidAmount { unit: kind.unit() })?;
        Self::new(kind, value)
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}
