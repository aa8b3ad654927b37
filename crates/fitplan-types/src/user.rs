use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Fitness attributes submitted by a user asking for a plan.
///
/// Only type coercion is applied on the way in. Numeric fields also accept
/// numeric strings, and `age` accepts a whole-valued float such as `30.0`.
/// There are no range checks: a negative age or a zero height is passed
/// through to the prompt as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRequest {
    #[serde(deserialize_with = "lenient_int")]
    pub age: i64,
    /// Height in centimetres.
    #[serde(deserialize_with = "lenient_float")]
    pub height: f64,
    /// Weight in kilograms.
    #[serde(deserialize_with = "lenient_float")]
    pub weight: f64,
    #[serde(deserialize_with = "lenient_float")]
    pub bmi: f64,
    /// Free-form level such as "sedentary", "moderate" or "active".
    pub activity_level: String,
    /// Free-form goal such as "fat loss" or "muscle gain".
    pub fitness_goal: String,
}

fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientInt)
}

fn lenient_float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientFloat)
}

struct LenientInt;

impl LenientInt {
    fn from_float<E: de::Error>(value: f64) -> Result<i64, E> {
        // i64 covers [-2^63, 2^63); both bounds are exact in f64.
        let bound = 2f64.powi(63);
        if value.fract() == 0.0 && (-bound..bound).contains(&value) {
            Ok(value as i64)
        } else {
            Err(E::invalid_value(de::Unexpected::Float(value), &"an integer"))
        }
    }
}

impl<'de> Visitor<'de> for LenientInt {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer, a whole-valued float or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
        Ok(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
        i64::try_from(value).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<i64, E> {
        Self::from_float(value)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<i64, E> {
        let trimmed = value.trim();
        if let Ok(int) = trimmed.parse::<i64>() {
            return Ok(int);
        }
        match trimmed.parse::<f64>() {
            Ok(float) => Self::from_float(float),
            Err(_) => Err(E::invalid_value(de::Unexpected::Str(value), &self)),
        }
    }
}

struct LenientFloat;

impl<'de> Visitor<'de> for LenientFloat {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
        Ok(value)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
        value
            .trim()
            .parse::<f64>()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}
