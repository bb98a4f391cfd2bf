//! BMI domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::{NORMAL_WEIGHT_UPPER_BOUND, OVERWEIGHT_UPPER_BOUND, UNDERWEIGHT_UPPER_BOUND};
use crate::errors::{Error, Result};

/// The four ordered BMI bands.
///
/// Serialized as the human-readable label ("Normal Weight", ...), which is also
/// how the category is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BmiCategory {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal Weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obese")]
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::NormalWeight,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    /// Classifies a BMI value using half-open bands; each boundary belongs to
    /// the higher band.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_UPPER_BOUND {
            BmiCategory::Underweight
        } else if bmi < NORMAL_WEIGHT_UPPER_BOUND {
            BmiCategory::NormalWeight
        } else if bmi < OVERWEIGHT_UPPER_BOUND {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BmiCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BmiCategory::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| Error::Unexpected(format!("Unknown BMI category '{}'", s)))
    }
}

/// Result of the classification rule: the computed value and its band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiReading {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Height (cm) and weight (kg) as submitted by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BmiInput {
    pub height: f64,
    pub weight: f64,
}

/// Stored BMI measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiRecord {
    pub id: i32,
    pub user_id: i32,
    pub height: f64,
    pub weight: f64,
    pub bmi: f64,
    pub category: BmiCategory,
    pub timestamp: NaiveDateTime,
}

/// Input model for inserting a BMI measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBmiRecord {
    pub user_id: i32,
    pub height: f64,
    pub weight: f64,
    pub bmi: f64,
    pub category: BmiCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_belong_to_higher_band() {
        assert_eq!(BmiCategory::from_bmi(18.499), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::from_bmi(24.999), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.999), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_label_round_trip_through_from_str() {
        for category in BmiCategory::ALL {
            assert_eq!(category.label().parse::<BmiCategory>().unwrap(), category);
        }
        assert!("Heavy".parse::<BmiCategory>().is_err());
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&BmiCategory::NormalWeight).unwrap();
        assert_eq!(json, "\"Normal Weight\"");
    }
}
