//! Measurement model
//!
//! Latest body measurements. Every field is optional; invalid input is
//! dropped at deserialization time.

use serde::{Deserialize, Serialize};

use super::lenient::de_measure;

/// Body measurements supplied by the calling application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRecord {
    /// Kilograms
    #[serde(default, deserialize_with = "de_measure")]
    pub weight: Option<f64>,
    /// Centimeters
    #[serde(default, deserialize_with = "de_measure")]
    pub height: Option<f64>,
    /// Percent
    #[serde(default, deserialize_with = "de_measure", alias = "bodyFatPercentage")]
    pub body_fat: Option<f64>,
}

impl MeasurementRecord {
    pub fn new(weight: Option<f64>, height: Option<f64>) -> Self {
        Self {
            weight,
            height,
            body_fat: None,
        }
    }

    /// Weight and height, only when both are usable
    pub fn weight_and_height(&self) -> Option<(f64, f64)> {
        let weight = self.weight.filter(|w| w.is_finite() && *w > 0.0)?;
        let height = self.height.filter(|h| h.is_finite() && *h > 0.0)?;
        Some((weight, height))
    }

    pub fn is_empty(&self) -> bool {
        self.weight.is_none() && self.height.is_none() && self.body_fat.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_inputs() {
        let m: MeasurementRecord =
            serde_json::from_str(r#"{"weight": "80", "height": "175", "bodyFat": "18,5"}"#)
                .unwrap();
        assert_eq!(m.weight_and_height(), Some((80.0, 175.0)));
        assert_eq!(m.body_fat, Some(18.5));
    }

    #[test]
    fn test_missing_height_disables_pair() {
        let m: MeasurementRecord = serde_json::from_str(r#"{"weight": 80}"#).unwrap();
        assert_eq!(m.weight_and_height(), None);
        assert!(!m.is_empty());
    }

    #[test]
    fn test_non_numeric_weight_is_missing() {
        let m: MeasurementRecord =
            serde_json::from_str(r#"{"weight": "eighty", "height": 175}"#).unwrap();
        assert_eq!(m.weight, None);
        assert_eq!(m.weight_and_height(), None);
    }

    #[test]
    fn test_constructed_nan_is_rejected() {
        let m = MeasurementRecord::new(Some(f64::NAN), Some(175.0));
        assert_eq!(m.weight_and_height(), None);
    }
}
