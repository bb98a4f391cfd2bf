//! The classification rule: BMI from height and weight, then the band.

use crate::errors::{Error, Result};

use super::bmi_model::{BmiCategory, BmiReading};

/// Computes `weight / (height / 100)^2`.
///
/// Height is in centimetres and weight in kilograms. Non-positive or
/// non-finite inputs are rejected instead of producing `inf` or `NaN`.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Result<f64> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(Error::invalid_input("Height must be a positive number"));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(Error::invalid_input("Weight must be a positive number"));
    }
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    if !bmi.is_finite() {
        return Err(Error::invalid_input(
            "Height and weight do not give a finite BMI",
        ));
    }
    Ok(bmi)
}

/// Computes the BMI and classifies it.
pub fn assess(height_cm: f64, weight_kg: f64) -> Result<BmiReading> {
    let bmi = compute_bmi(height_cm, weight_kg)?;
    Ok(BmiReading {
        bmi,
        category: BmiCategory::from_bmi(bmi),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_normal_weight_scenario() {
        let reading = assess(170.0, 70.0).unwrap();
        assert_close(reading.bmi, 24.22);
        assert_eq!(reading.category, BmiCategory::NormalWeight);
    }

    #[test]
    fn test_underweight_scenario() {
        let reading = assess(160.0, 45.0).unwrap();
        assert_close(reading.bmi, 17.58);
        assert_eq!(reading.category, BmiCategory::Underweight);
    }

    #[test]
    fn test_obese_scenario() {
        let reading = assess(180.0, 100.0).unwrap();
        assert_close(reading.bmi, 30.86);
        assert_eq!(reading.category, BmiCategory::Obese);
    }

    #[test]
    fn test_overweight_scenario() {
        let reading = assess(175.0, 85.0).unwrap();
        assert_close(reading.bmi, 27.76);
        assert_eq!(reading.category, BmiCategory::Overweight);
    }

    #[test]
    fn test_exact_boundary_from_measurements() {
        // 100 cm tall: bmi equals the weight.
        assert_eq!(assess(100.0, 25.0).unwrap().category, BmiCategory::Overweight);
        assert_eq!(assess(100.0, 30.0).unwrap().category, BmiCategory::Obese);
    }

    #[test]
    fn test_non_positive_height_is_invalid_input() {
        for height in [0.0, -0.0, -170.0] {
            let err = compute_bmi(height, 70.0).unwrap_err();
            assert!(matches!(
                err,
                Error::Validation(ValidationError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_non_finite_inputs_are_invalid_input() {
        assert!(compute_bmi(f64::NAN, 70.0).is_err());
        assert!(compute_bmi(f64::INFINITY, 70.0).is_err());
        assert!(compute_bmi(170.0, f64::NAN).is_err());
        assert!(compute_bmi(170.0, 0.0).is_err());
    }

    #[test]
    fn test_overflowing_result_is_invalid_input() {
        for (height, weight) in [(1e-200, 70.0), (0.0001, 1e300), (f64::MIN_POSITIVE, 1.0)] {
            let err = assess(height, weight).unwrap_err();
            assert!(
                matches!(err, Error::Validation(ValidationError::InvalidInput(_))),
                "{height} / {weight}"
            );
        }
    }
}
