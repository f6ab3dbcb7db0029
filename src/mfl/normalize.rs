//! Turn nested MFL export payloads into flat maps keyed by entity id.
//!
//! Each export nests its repeated element under a fixed path
//! (`rosters.franchise`, `players.player`, ...). One resolver walks that path
//! and one collector keys the elements by `id`; the per-endpoint functions
//! only decide which fields to keep.
//!
//! Two MFL quirks are handled while walking:
//! - a list met before the end of the path is flattened (every matchup's franchises)
//! - a list holding a single element may arrive as a bare object

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::warn;

use crate::{
    error::MflError,
    mfl::{
        request::EndpointKind,
        types::{
            FranchiseMap, LiveScoringFranchise, LiveScoringMap, PlayerInfo, PlayerMap,
            PlayerScore, PlayerScoreMap, RawRecord, RosterEntry, RosterMap, RosterPlayer,
        },
    },
    Result,
};


impl EndpointKind {
    /// Path from the payload root to the repeated element.
    pub fn payload_path(&self) -> &'static [&'static str] {
        match self {
            EndpointKind::Rosters => &["rosters", "franchise"],
            EndpointKind::Players => &["players", "player"],
            EndpointKind::League => &["league", "franchises", "franchise"],
            EndpointKind::LiveScoring => &["liveScoring", "matchup", "franchise"],
            EndpointKind::PlayerScores => &["playerScores", "playerScore"],
        }
    }

    /// Whether an absent final list segment means "no entries" rather than an error.
    ///
    /// Only the player database behaves this way.
    pub fn tolerates_missing_list(&self) -> bool {
        matches!(self, EndpointKind::Players)
    }
}

fn elements(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    }
}

/// Walk `path` from `payload`, flattening lists along the way.
///
/// Fails with [`MflError::MalformedResponse`] naming the prefix that could not
/// be found.
pub fn resolve_path<'a>(payload: &'a Value, path: &[&str]) -> Result<Vec<&'a Value>> {
    let mut nodes = vec![payload];
    for (depth, segment) in path.iter().enumerate() {
        let mut next = Vec::with_capacity(nodes.len());
        for node in nodes.into_iter().flat_map(elements) {
            match node.get(*segment) {
                Some(child) => next.push(child),
                None => return Err(MflError::malformed(path[..=depth].join("."))),
            }
        }
        nodes = next;
    }
    Ok(nodes.into_iter().flat_map(elements).collect())
}

/// Repeated elements for one endpoint, honouring the player-list exception.
pub fn resolve_entries(payload: &Value, kind: EndpointKind) -> Result<Vec<&Value>> {
    let path = kind.payload_path();
    match path.split_last() {
        Some((list, parent)) if kind.tolerates_missing_list() => {
            let entries: Vec<&Value> = resolve_path(payload, parent)?
                .into_iter()
                .filter_map(|node| node.get(*list))
                .flat_map(elements)
                .collect();
            if entries.is_empty() {
                warn!(endpoint = %kind, "no {} list in response, returning empty map", list);
            }
            Ok(entries)
        }
        _ => resolve_path(payload, path),
    }
}

/// Optional nested list under one element; absent means empty.
fn nested_list<'a>(object: &'a Map<String, Value>, path: &[&str]) -> Vec<&'a Value> {
    let Some((first, rest)) = path.split_first() else {
        return Vec::new();
    };
    let mut node = match object.get(*first) {
        Some(v) => v,
        None => return Vec::new(),
    };
    for segment in rest {
        match node.get(*segment) {
            Some(child) => node = child,
            None => return Vec::new(),
        }
    }
    match node {
        Value::Array(_) | Value::Object(_) => elements(node),
        _ => Vec::new(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Field as text, `""` when absent or not a scalar.
fn field_text(object: &Map<String, Value>, key: &str) -> String {
    object.get(key).and_then(scalar_text).unwrap_or_default()
}

fn without_id(object: &Map<String, Value>) -> RawRecord {
    let mut record = object.clone();
    record.remove("id");
    record
}

/// Key every element by its `id`. Later duplicates replace earlier ones.
fn collect_by_id<T>(
    entries: Vec<&Value>,
    path: &str,
    mut extract: impl FnMut(&Map<String, Value>) -> Result<T>,
) -> Result<BTreeMap<String, T>> {
    let mut out = BTreeMap::new();
    for entry in entries {
        let object = entry
            .as_object()
            .ok_or_else(|| MflError::malformed(path))?;
        let id = object
            .get("id")
            .and_then(scalar_text)
            .ok_or_else(|| MflError::malformed(format!("{}.id", path)))?;
        out.insert(id, extract(object)?);
    }
    Ok(out)
}

fn normalize_kind<T>(
    payload: &Value,
    kind: EndpointKind,
    extract: impl FnMut(&Map<String, Value>) -> Result<T>,
) -> Result<BTreeMap<String, T>> {
    let entries = resolve_entries(payload, kind)?;
    collect_by_id(entries, &kind.payload_path().join("."), extract)
}

pub fn normalize_rosters(payload: &Value) -> Result<RosterMap> {
    normalize_kind(payload, EndpointKind::Rosters, |franchise| {
        let players = collect_by_id(
            nested_list(franchise, &["player"]),
            "rosters.franchise.player",
            |player| {
                Ok(RosterPlayer {
                    status: field_text(player, "status"),
                    salary: field_text(player, "salary"),
                })
            },
        )?;
        Ok(RosterEntry {
            week: field_text(franchise, "week"),
            players,
        })
    })
}

pub fn normalize_players(payload: &Value) -> Result<PlayerMap> {
    normalize_kind(payload, EndpointKind::Players, |player| {
        Ok(PlayerInfo {
            name: field_text(player, "name"),
            position: field_text(player, "position"),
            team: field_text(player, "team"),
            status: field_text(player, "status"),
        })
    })
}

pub fn normalize_league(payload: &Value) -> Result<FranchiseMap> {
    normalize_kind(payload, EndpointKind::League, |franchise| Ok(without_id(franchise)))
}

pub fn normalize_live_scoring(payload: &Value) -> Result<LiveScoringMap> {
    normalize_kind(payload, EndpointKind::LiveScoring, |franchise| {
        let players = collect_by_id(
            nested_list(franchise, &["players", "player"]),
            "liveScoring.matchup.franchise.players.player",
            |player| Ok(without_id(player)),
        )?;
        Ok(LiveScoringFranchise {
            players_currently_playing: field_text(franchise, "playersCurrentlyPlaying"),
            is_home: field_text(franchise, "isHome"),
            game_seconds_remaining: field_text(franchise, "gameSecondsRemaining"),
            players_yet_to_play: field_text(franchise, "playersYetToPlay"),
            score: field_text(franchise, "score"),
            players,
        })
    })
}

pub fn normalize_player_scores(payload: &Value) -> Result<PlayerScoreMap> {
    normalize_kind(payload, EndpointKind::PlayerScores, |score| {
        Ok(PlayerScore {
            is_available: field_text(score, "isAvailable"),
            score: field_text(score, "score"),
        })
    })
}
