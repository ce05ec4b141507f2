#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::activity::Activity;

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Duration must be greater than 0")]
    InvalidDuration,
    #[error("Weight must be greater than 0")]
    InvalidWeight,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CalorieRequest {
    pub activity: Activity,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "whole_minutes::deserialize"))]
    pub duration_minutes: i64,
    pub weight_kg: f64,
}

impl CalorieRequest {
    pub fn new(activity: Activity, duration_minutes: i64, weight_kg: f64) -> Self {
        Self {
            activity,
            duration_minutes,
            weight_kg,
        }
    }

    pub fn compute(&self) -> Result<CalorieResult, ValidationError> {
        compute(self.activity, self.duration_minutes, self.weight_kg)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CalorieResult {
    pub activity: Activity,
    pub duration_minutes: i64,
    pub weight_kg: f64,
    pub calories_burned: f64,
}

/// Calories burned for the given activity:
/// `MET * weight (kg) * duration (h)`, rounded to 2 decimal places.
///
/// Duration is checked before weight, so a request with both out of range
/// reports [`ValidationError::InvalidDuration`].
pub fn compute(
    activity: Activity,
    duration_minutes: i64,
    weight_kg: f64,
) -> Result<CalorieResult, ValidationError> {
    if duration_minutes <= 0 {
        return Err(ValidationError::InvalidDuration);
    }
    if weight_kg.is_nan() || weight_kg <= 0.0 {
        return Err(ValidationError::InvalidWeight);
    }

    let duration_hours = duration_minutes as f64 / 60.0;
    let calories_burned = round_to_cents(activity.met() * weight_kg * duration_hours);

    Ok(CalorieResult {
        activity,
        duration_minutes,
        weight_kg,
        calories_burned,
    })
}

fn round_to_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    // Past 2^52 an f64 has no fractional digits left to round away.
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return value;
    }
    scaled.round() / 100.0
}

/// Accepts an integer, or a float with nothing after the decimal point
/// (`30.0`), as a number of minutes.
#[cfg(feature = "serde")]
mod whole_minutes {
    use std::fmt;

    use serde::de::{self, Deserializer, Unexpected, Visitor};

    struct WholeMinutes;

    impl<'de> Visitor<'de> for WholeMinutes {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "a whole number of minutes")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                Ok(v as i64)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        deserializer.deserialize_any(WholeMinutes)
    }
}
