//! Calendar dates for birth and personal-cycle calculations.
//!
//! The engine never reads a system clock: the "current date" of the
//! personal cycles is always supplied by the caller.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A plain day/month/year date with a 4-digit year. No time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl CalendarDate {
    /// Range-checked constructor: day 1-31, month 1-12, 4-digit year.
    pub fn new(day: u32, month: u32, year: u32) -> Result<Self, DateError> {
        if !(1..=31).contains(&day) {
            return Err(DateError::Range("day must be 1-31"));
        }
        if !(1..=12).contains(&month) {
            return Err(DateError::Range("month must be 1-12"));
        }
        if !(1000..=9999).contains(&year) {
            return Err(DateError::Range("year must have 4 digits"));
        }
        Ok(Self { day, month, year })
    }

    /// Zero-padded `DDMMYYYY` digit string, the basis of the Destiny sum.
    pub fn digit_string(&self) -> String {
        format!("{:02}{:02}{:04}", self.day, self.month, self.year)
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(DateError::Format(s.to_owned()));
        };
        let year: u32 = y.parse().map_err(|_| DateError::Format(s.to_owned()))?;
        let month: u32 = m.parse().map_err(|_| DateError::Format(s.to_owned()))?;
        let day: u32 = d.parse().map_err(|_| DateError::Format(s.to_owned()))?;
        Self::new(day, month, year)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Errors from date construction or parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DateError {
    /// Input is not an ISO `YYYY-MM-DD` date.
    Format(String),
    /// A component is outside its valid range.
    Range(&'static str),
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format(s) => write!(f, "invalid date format: {s:?} (expected YYYY-MM-DD)"),
            Self::Range(msg) => write!(f, "date out of range: {msg}"),
        }
    }
}

impl Error for DateError {}
