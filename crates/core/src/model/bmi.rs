use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BmiError {
    #[error("weight must be a number: {0:?}")]
    InvalidWeight(String),

    #[error("height must be a number: {0:?}")]
    InvalidHeight(String),

    #[error("weight and height must both be greater than zero")]
    NonPositive,
}

/// Weight/height pair entered by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMeasurement {
    weight_kg: f64,
    height_cm: f64,
}

impl BodyMeasurement {
    /// # Errors
    ///
    /// Returns `BmiError::NonPositive` if either value is not a finite number above zero.
    pub fn new(weight_kg: f64, height_cm: f64) -> Result<Self, BmiError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(weight_kg) || !valid(height_cm) {
            return Err(BmiError::NonPositive);
        }
        Ok(Self {
            weight_kg,
            height_cm,
        })
    }

    /// Parse raw form input (kilograms and centimetres).
    ///
    /// # Errors
    ///
    /// Returns `BmiError::InvalidWeight`/`InvalidHeight` for non-numeric input and
    /// `BmiError::NonPositive` for zero or negative values.
    pub fn parse(weight: &str, height: &str) -> Result<Self, BmiError> {
        let weight_kg: f64 = weight
            .trim()
            .parse()
            .map_err(|_| BmiError::InvalidWeight(weight.trim().to_owned()))?;
        let height_cm: f64 = height
            .trim()
            .parse()
            .map_err(|_| BmiError::InvalidHeight(height.trim().to_owned()))?;
        Self::new(weight_kg, height_cm)
    }

    #[must_use]
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    #[must_use]
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Unrounded body mass index.
    #[must_use]
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }

    #[must_use]
    pub fn reading(&self) -> BmiReading {
        let bmi = self.bmi();
        BmiReading {
            value: round2(bmi),
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            category: BmiCategory::from_bmi(bmi),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Adult BMI classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Boundaries are contiguous: `[.., 18.5)`, `[18.5, 25)`, `[25, 30)`, `[30, ..)`.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Stable storage key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "underweight" => Some(Self::Underweight),
            "normal" => Some(Self::Normal),
            "overweight" => Some(Self::Overweight),
            "obese" => Some(Self::Obese),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A computed BMI with the inputs it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReading {
    value: f64,
    weight_kg: f64,
    height_cm: f64,
    category: BmiCategory,
}

impl BmiReading {
    /// Rehydrate a reading from storage without recomputing it.
    #[must_use]
    pub fn from_persisted(value: f64, weight_kg: f64, height_cm: f64, category: BmiCategory) -> Self {
        Self {
            value,
            weight_kg,
            height_cm,
            category,
        }
    }

    /// BMI rounded to two decimals.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    #[must_use]
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    #[must_use]
    pub fn category(&self) -> BmiCategory {
        self.category
    }
}
