//! Filter types for MFL export commands.

use std::fmt;

/// Restricts `playerScores` to a subset of players by league status.
///
/// Sent as the `STATUS` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlayerStatusFilter {
    /// Only players that are fantasy league free agents
    FreeAgent,
}

impl PlayerStatusFilter {
    /// Value MFL expects on the wire.
    pub fn as_param(&self) -> &'static str {
        match self {
            PlayerStatusFilter::FreeAgent => "freeagent",
        }
    }
}

impl fmt::Display for PlayerStatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_param())
    }
}
