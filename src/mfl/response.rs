//! Response objects returned by a [`Session`](crate::mfl::session::Session).
//!
//! Responses keep the raw exchange; the normalized maps are views computed
//! from it on demand. Nothing is memoized, so every accessor call re-parses.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;

use crate::{
    error::MflError,
    mfl::{
        http::RawResponse,
        normalize,
        request::EndpointKind,
        types::{FranchiseMap, LiveScoringMap, PlayerMap, PlayerScoreMap, RosterMap},
    },
    Result,
};

static USER_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"MFL_USER_ID="([^"]*)">OK"#).expect("valid MFL_USER_ID pattern"));

/// Reply to `POST /{year}/login`.
#[derive(Debug, Clone)]
pub struct LoginResponse {
    raw: RawResponse,
}

impl LoginResponse {
    pub fn new(raw: RawResponse) -> Self {
        Self { raw }
    }

    pub fn status_code(&self) -> u16 {
        self.raw.status_code()
    }

    pub fn body(&self) -> &str {
        self.raw.body()
    }

    /// Session token found in the body, if any. Searched on every call.
    pub fn token(&self) -> Option<String> {
        USER_ID_PATTERN
            .captures(self.raw.body())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .filter(|token| !token.is_empty())
    }

    /// The token of a successful login, or why there is none.
    pub fn into_token(self) -> Result<String> {
        if self.status_code() != 200 {
            return Err(MflError::authentication(format!(
                "login returned HTTP {}",
                self.status_code()
            )));
        }
        self.token()
            .ok_or_else(|| MflError::authentication("no MFL_USER_ID token in login response"))
    }
}

/// Binds an export endpoint to its normalized shape.
pub trait Export {
    const KIND: EndpointKind;
    type Output: Serialize;

    fn normalize(payload: &Value) -> Result<Self::Output>;
}

#[derive(Debug, Clone, Copy)]
pub struct Rosters;

#[derive(Debug, Clone, Copy)]
pub struct Players;

#[derive(Debug, Clone, Copy)]
pub struct League;

#[derive(Debug, Clone, Copy)]
pub struct LiveScoring;

#[derive(Debug, Clone, Copy)]
pub struct PlayerScores;

impl Export for Rosters {
    const KIND: EndpointKind = EndpointKind::Rosters;
    type Output = RosterMap;

    fn normalize(payload: &Value) -> Result<Self::Output> {
        normalize::normalize_rosters(payload)
    }
}

impl Export for Players {
    const KIND: EndpointKind = EndpointKind::Players;
    type Output = PlayerMap;

    fn normalize(payload: &Value) -> Result<Self::Output> {
        normalize::normalize_players(payload)
    }
}

impl Export for League {
    const KIND: EndpointKind = EndpointKind::League;
    type Output = FranchiseMap;

    fn normalize(payload: &Value) -> Result<Self::Output> {
        normalize::normalize_league(payload)
    }
}

impl Export for LiveScoring {
    const KIND: EndpointKind = EndpointKind::LiveScoring;
    type Output = LiveScoringMap;

    fn normalize(payload: &Value) -> Result<Self::Output> {
        normalize::normalize_live_scoring(payload)
    }
}

impl Export for PlayerScores {
    const KIND: EndpointKind = EndpointKind::PlayerScores;
    type Output = PlayerScoreMap;

    fn normalize(payload: &Value) -> Result<Self::Output> {
        normalize::normalize_player_scores(payload)
    }
}

/// Reply to an export request, typed by the endpoint that produced it.
#[derive(Debug, Clone)]
pub struct ExportResponse<E: Export> {
    raw: RawResponse,
    payload: Value,
    endpoint: PhantomData<E>,
}

impl<E: Export> ExportResponse<E> {
    /// Fails with [`MflError::InvalidResponseFormat`] when the body is not JSON.
    pub fn from_raw(raw: RawResponse) -> Result<Self> {
        let payload = raw.json()?;
        Ok(Self {
            raw,
            payload,
            endpoint: PhantomData,
        })
    }

    pub fn kind(&self) -> EndpointKind {
        E::KIND
    }

    pub fn status_code(&self) -> u16 {
        self.raw.status_code()
    }

    pub fn body(&self) -> &str {
        self.raw.body()
    }

    pub fn json(&self) -> &Value {
        &self.payload
    }

    /// Message of an MFL error document (`{"error": {"$t": "..."}}`), if that is what came back.
    pub fn api_error(&self) -> Option<&str> {
        let error = self.payload.get("error")?;
        error
            .get("$t")
            .and_then(Value::as_str)
            .or_else(|| error.as_str())
    }

    /// Id-keyed view of the payload, rebuilt on every call.
    pub fn normalized(&self) -> Result<E::Output> {
        E::normalize(&self.payload)
    }
}
