//! Time-related types for MFL league years and weeks.

use crate::error::{MflError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for league years. MFL scopes every URL by year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Year(pub u16);

impl Year {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Year {
    fn default() -> Self {
        Self(2026)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = MflError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for Week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = MflError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Scoring window accepted by the `playerScores` export.
///
/// A single week, year-to-date totals, or the weekly average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringPeriod {
    Week(Week),
    YearToDate,
    Average,
}

impl fmt::Display for ScoringPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringPeriod::Week(week) => write!(f, "{}", week),
            ScoringPeriod::YearToDate => write!(f, "YTD"),
            ScoringPeriod::Average => write!(f, "AVG"),
        }
    }
}

impl From<Week> for ScoringPeriod {
    fn from(week: Week) -> Self {
        ScoringPeriod::Week(week)
    }
}

impl FromStr for ScoringPeriod {
    type Err = MflError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "YTD" => Ok(ScoringPeriod::YearToDate),
            "AVG" => Ok(ScoringPeriod::Average),
            other => other
                .parse::<u16>()
                .map(|w| ScoringPeriod::Week(Week::new(w)))
                .map_err(|_| MflError::InvalidScoringPeriod {
                    value: s.to_string(),
                }),
        }
    }
}
