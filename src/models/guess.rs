use serde::{Deserialize, Serialize};
use validator::Validate;

use super::car::CarDetails;

/// Request body for `POST /api/guess`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GuessRequest {
    #[validate(length(min = 1, message = "model is required"))]
    pub model: String,
}

/// Whether the daily car's value sits above or below the guessed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Higher,
    Lower,
}

/// A guessed attribute value as rendered by the client: either the raw
/// number or the literal string "Unknown".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Int(i32),
    Float(f64),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Int(n)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Float(n)
    }
}

/// Per-attribute similarity feedback. `is_close` and `direction` are
/// only meaningful for numeric attributes and stay null for categorical
/// ones.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityField {
    pub value: FieldValue,
    pub is_match: bool,
    pub is_close: Option<bool>,
    pub direction: Option<Direction>,
}

/// The full similarity breakdown, one entry per compared attribute.
/// Keys on the wire are the historical snake_case column names.
#[derive(Debug, Clone, Serialize)]
pub struct Similarities {
    pub brand: SimilarityField,
    pub production_from_year: SimilarityField,
    pub body_style: SimilarityField,
    pub segment: SimilarityField,
    pub cylinders: SimilarityField,
    pub displacement: SimilarityField,
    pub power: SimilarityField,
    pub torque: SimilarityField,
    pub fuel_system: SimilarityField,
    pub fuel: SimilarityField,
    pub fuel_capacity: SimilarityField,
    pub top_speed: SimilarityField,
    pub drive_type: SimilarityField,
}

/// Response body for `POST /api/guess`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessReport {
    pub is_correct: bool,
    pub message: String,
    pub similarities: Option<Similarities>,
    pub car_details: Option<CarDetails>,
}

impl GuessReport {
    /// Report for a guess that did not resolve to any known car. The
    /// comparator is never invoked in this case.
    pub fn not_found() -> Self {
        GuessReport {
            is_correct: false,
            message: "Car not found in our database. Try another model.".to_string(),
            similarities: None,
            car_details: None,
        }
    }
}
