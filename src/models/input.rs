use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Enter a number first")]
    Empty,

    #[error("{0:?} is not a number")]
    NotANumber(String),

    #[error("{0} cannot be sent as JSON")]
    NotFinite(String),
}

/// The single number forwarded to the backend.
///
/// Integral values serialize as JSON integers, so `4` goes on the wire as
/// `4` rather than `4.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalcInput(f64);

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl CalcInput {
    pub fn new(value: f64) -> Result<Self, InputError> {
        if !value.is_finite() {
            return Err(InputError::NotFinite(value.to_string()));
        }
        Ok(Self(value))
    }

    #[cfg(test)]
    pub fn value(self) -> f64 {
        self.0
    }

    fn as_integer(self) -> Option<i64> {
        if self.0.fract() == 0.0 && self.0.abs() <= MAX_SAFE_INTEGER {
            Some(self.0 as i64)
        } else {
            None
        }
    }
}

impl FromStr for CalcInput {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InputError::Empty);
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

        // "inf" and "NaN" parse as f64 but are not numbers a user typed in.
        if !value.is_finite() {
            return Err(InputError::NotFinite(trimmed.to_string()));
        }

        Self::new(value)
    }
}

impl Serialize for CalcInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_integer() {
            Some(int) => serializer.serialize_i64(int),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl fmt::Display for CalcInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_integer() {
            Some(int) => write!(f, "{}", int),
            None => write!(f, "{}", self.0),
        }
    }
}
