//! ID types for MyFantasyLeague entities.

use crate::error::{MflError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for MFL league IDs.
///
/// League IDs are numeric on MFL but are always sent as text, so the original
/// spelling is kept verbatim.
///
/// # Examples
///
/// ```rust
/// use mfl_api::LeagueId;
///
/// let league_id: LeagueId = "35465".parse().unwrap();
/// assert_eq!(league_id.as_str(), "35465");
/// assert!("abc".parse::<LeagueId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueId(String);

impl LeagueId {
    /// Create a LeagueId without validating it.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = MflError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        trimmed.parse::<u64>()?;
        Ok(Self(trimmed.to_string()))
    }
}

/// Franchise code within a league, e.g. `0001`. Leading zeros matter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FranchiseId(String);

impl FranchiseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FranchiseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FranchiseId {
    type Err = MflError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().to_string()))
    }
}

/// Type-safe wrapper for MFL player IDs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join ids into the comma separated form the `PLAYERS` parameter expects.
    pub fn join(ids: &[PlayerId]) -> String {
        ids.iter()
            .map(PlayerId::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = MflError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().to_string()))
    }
}
