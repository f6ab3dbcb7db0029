//! Flattened, id-keyed shapes produced from MFL export payloads.
//!
//! All scalar values are kept as the text MFL sent; MFL encodes numbers and
//! booleans as strings (`"1"`, `"12.5"`) and this crate does not reinterpret them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Raw attributes of one entity, minus its `id`.
pub type RawRecord = Map<String, Value>;

/// One player slot on a franchise roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPlayer {
    pub status: String,
    pub salary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub week: String,
    /// Keyed by player id
    pub players: BTreeMap<String, RosterPlayer>,
}

/// Player database entry. Missing attributes are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub name: String,
    pub position: String,
    pub team: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveScoringFranchise {
    pub players_currently_playing: String,
    pub is_home: String,
    pub game_seconds_remaining: String,
    pub players_yet_to_play: String,
    pub score: String,
    /// Keyed by player id; each record is passed through untouched
    pub players: BTreeMap<String, RawRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScore {
    pub is_available: String,
    pub score: String,
}

/// franchise id → roster
pub type RosterMap = BTreeMap<String, RosterEntry>;
/// player id → player
pub type PlayerMap = BTreeMap<String, PlayerInfo>;
/// franchise id → every raw franchise attribute except `id`
pub type FranchiseMap = BTreeMap<String, RawRecord>;
/// franchise id → live score
pub type LiveScoringMap = BTreeMap<String, LiveScoringFranchise>;
/// player id → score
pub type PlayerScoreMap = BTreeMap<String, PlayerScore>;
