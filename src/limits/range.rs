//! Configured numeric limits.
//!
//! A limit is written as a short string in the limits file:
//! `"ignore"`, `"not allowed"`, a single count `"N"` or an inclusive range `"N-M"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const IGNORE: &str = "ignore";
const NOT_ALLOWED: &str = "not allowed";

/// Failure to parse a limit string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("malformed range '{0}', expected \"ignore\", \"not allowed\", \"N\" or \"N-M\"")]
    Malformed(String),

    #[error("invalid range '{min}-{max}', minimum is greater than maximum")]
    Invalid { min: usize, max: usize },
}

/// An inclusive limit on a count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DimensionRange {
    /// No constraint.
    #[default]
    Ignore,
    /// The count must be zero.
    NotAllowed,
    /// `min <= count <= max`.
    Between { min: usize, max: usize },
}

/// Which bound of a range a count falls outside of, carrying that bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeViolation {
    BelowMin(usize),
    OverMax(usize),
}

impl DimensionRange {
    /// Parse a limit string.
    ///
    /// # Errors
    /// Returns [`RangeError::Invalid`] when the minimum exceeds the maximum and
    /// [`RangeError::Malformed`] for any other unparseable text.
    pub fn parse(text: &str) -> Result<Self, RangeError> {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case(IGNORE) {
            return Ok(Self::Ignore);
        }
        if trimmed.eq_ignore_ascii_case(NOT_ALLOWED) {
            return Ok(Self::NotAllowed);
        }

        let mut parts = trimmed.split('-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(exact), None, None) => {
                let count = parse_bound(exact, text)?;
                Ok(Self::Between {
                    min: count,
                    max: count,
                })
            }
            (Some(min), Some(max), None) => {
                Self::between(parse_bound(min, text)?, parse_bound(max, text)?)
            }
            _ => Err(RangeError::Malformed(text.to_string())),
        }
    }

    /// Build an inclusive range.
    ///
    /// # Errors
    /// Returns [`RangeError::Invalid`] if `min > max`.
    pub const fn between(min: usize, max: usize) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::Invalid { min, max });
        }
        Ok(Self::Between { min, max })
    }

    #[must_use]
    pub const fn exactly(count: usize) -> Self {
        Self::Between {
            min: count,
            max: count,
        }
    }

    #[must_use]
    pub const fn contains(&self, count: usize) -> bool {
        self.violation(count).is_none()
    }

    /// The bound `count` violates, if any.
    #[must_use]
    pub const fn violation(&self, count: usize) -> Option<RangeViolation> {
        match *self {
            Self::Ignore => None,
            Self::NotAllowed if count > 0 => Some(RangeViolation::OverMax(0)),
            Self::NotAllowed => None,
            Self::Between { min, .. } if count < min => Some(RangeViolation::BelowMin(min)),
            Self::Between { max, .. } if count > max => Some(RangeViolation::OverMax(max)),
            Self::Between { .. } => None,
        }
    }

    #[must_use]
    pub const fn min(&self) -> usize {
        match *self {
            Self::Ignore | Self::NotAllowed => 0,
            Self::Between { min, .. } => min,
        }
    }

    /// Upper bound; `None` means unbounded.
    #[must_use]
    pub const fn max(&self) -> Option<usize> {
        match *self {
            Self::Ignore => None,
            Self::NotAllowed => Some(0),
            Self::Between { max, .. } => Some(max),
        }
    }

    #[must_use]
    pub const fn is_ignore(&self) -> bool {
        matches!(self, Self::Ignore)
    }

    #[must_use]
    pub const fn is_not_allowed(&self) -> bool {
        matches!(self, Self::NotAllowed)
    }
}

fn parse_bound(token: &str, original: &str) -> Result<usize, RangeError> {
    let token = token.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RangeError::Malformed(original.to_string()));
    }
    token
        .parse()
        .map_err(|_| RangeError::Malformed(original.to_string()))
}

impl FromStr for DimensionRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DimensionRange {
    type Error = RangeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DimensionRange> for String {
    fn from(range: DimensionRange) -> Self {
        range.to_string()
    }
}

impl fmt::Display for DimensionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignore => f.write_str(IGNORE),
            Self::NotAllowed => f.write_str(NOT_ALLOWED),
            Self::Between { min, max } if min == max => write!(f, "{min}"),
            Self::Between { min, max } => write!(f, "{min}-{max}"),
        }
    }
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
