//! Guess comparison: the pure scoring function behind `POST /api/guess`.
//!
//! Takes the guessed car and the daily car and produces the per-attribute
//! similarity report the client renders as color-coded tiles. No I/O and
//! no shared state, so it is safe to call from any number of concurrent
//! requests.

use crate::models::{Car, CarDetails, Direction, FieldValue, GuessReport, Similarities, SimilarityField};

// Closeness thresholds: a numeric attribute within this absolute distance
// of the daily car's value is flagged "close".
const YEAR_THRESHOLD: i32 = 5;
const CYLINDERS_THRESHOLD: i32 = 2;
const DISPLACEMENT_THRESHOLD: i32 = 500;
const POWER_THRESHOLD: i32 = 50;
const TORQUE_THRESHOLD: i32 = 50;
const FUEL_CAPACITY_THRESHOLD: f64 = 10.0;
const TOP_SPEED_THRESHOLD: i32 = 20;

const CORRECT_MESSAGE: &str = "Congratulations! You guessed the correct car!";
const INCORRECT_MESSAGE: &str = "Not the correct car. Try again!";

/// Compare a guessed car against the daily car.
///
/// The caller resolves the guess string to a record first; this function
/// only sees fully-typed records and cannot fail.
pub fn compare(guessed: &Car, target: &Car) -> GuessReport {
    let is_correct = is_winning_guess(guessed, target);

    let similarities = Similarities {
        brand: categorical(&guessed.brand, &target.brand),
        production_from_year: numeric_i32(
            guessed.production_from_year,
            target.production_from_year,
            YEAR_THRESHOLD,
        ),
        body_style: categorical(&guessed.body_style, &target.body_style),
        segment: categorical(&guessed.segment, &target.segment),
        cylinders: numeric_i32(guessed.cylinders, target.cylinders, CYLINDERS_THRESHOLD),
        displacement: numeric_i32(guessed.displacement, target.displacement, DISPLACEMENT_THRESHOLD),
        power: numeric_i32(guessed.power, target.power, POWER_THRESHOLD),
        torque: numeric_i32(guessed.torque, target.torque, TORQUE_THRESHOLD),
        fuel_system: categorical(&guessed.fuel_system, &target.fuel_system),
        fuel: categorical(&guessed.fuel, &target.fuel),
        fuel_capacity: numeric_f64(
            guessed.fuel_capacity,
            target.fuel_capacity,
            FUEL_CAPACITY_THRESHOLD,
        ),
        top_speed: numeric_i32(guessed.top_speed, target.top_speed, TOP_SPEED_THRESHOLD),
        drive_type: categorical(&guessed.drive_type, &target.drive_type),
    };

    let (message, car_details) = if is_correct {
        (CORRECT_MESSAGE, Some(CarDetails::from(target)))
    } else {
        (INCORRECT_MESSAGE, None)
    };

    GuessReport {
        is_correct,
        message: message.to_string(),
        similarities: Some(similarities),
        car_details,
    }
}

/// Win condition: identity match on id, with a model-name + launch-year
/// fallback for records that are the same car stored under different ids
/// (regional trims). Brand is deliberately not part of the fallback, so
/// two brands sharing a model string and launch year count as the same
/// car; the game's catalog has not made that collide in practice.
fn is_winning_guess(guessed: &Car, target: &Car) -> bool {
    guessed.id == target.id
        || (guessed.model.eq_ignore_ascii_case(&target.model)
            && guessed.production_from_year == target.production_from_year)
}

/// Categorical attribute: missing values collapse to "Unknown", then a
/// case-sensitive equality check. Closeness and direction do not apply.
fn categorical(guessed: &Option<String>, target: &Option<String>) -> SimilarityField {
    let guessed = guessed.as_deref().unwrap_or("Unknown");
    let target = target.as_deref().unwrap_or("Unknown");
    SimilarityField {
        value: FieldValue::from(guessed),
        is_match: guessed == target,
        is_close: None,
        direction: None,
    }
}

fn numeric_i32(guessed: Option<i32>, target: Option<i32>, threshold: i32) -> SimilarityField {
    numeric(guessed, target, threshold, |a, b| (a - b).abs())
}

fn numeric_f64(guessed: Option<f64>, target: Option<f64>, threshold: f64) -> SimilarityField {
    numeric(guessed, target, threshold, |a, b| (a - b).abs())
}

/// Numeric attribute: when both sides are present, report exactness,
/// closeness within `threshold`, and which way the daily car lies. A
/// missing value on either side disables all three.
fn numeric<T>(
    guessed: Option<T>,
    target: Option<T>,
    threshold: T,
    abs_diff: impl Fn(T, T) -> T,
) -> SimilarityField
where
    T: Copy + PartialOrd + Into<FieldValue>,
{
    let value = match guessed {
        Some(g) => g.into(),
        None => FieldValue::from("Unknown"),
    };

    let (g, t) = match (guessed, target) {
        (Some(g), Some(t)) => (g, t),
        _ => {
            return SimilarityField {
                value,
                is_match: false,
                is_close: Some(false),
                direction: None,
            }
        }
    };

    let direction = if g < t {
        Some(Direction::Higher)
    } else if g > t {
        Some(Direction::Lower)
    } else {
        None
    };

    SimilarityField {
        value,
        is_match: g == t,
        is_close: Some(abs_diff(g, t) <= threshold),
        direction,
    }
}
