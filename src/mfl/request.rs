//! Request construction for the MFL API.
//!
//! Every request is a URL of the form `{protocol}://{host}/{year}/{category}`
//! plus a list of form fields. Nothing here touches the network.

use std::fmt;

use crate::cli::types::{FranchiseId, LeagueId, PlayerId, PlayerStatusFilter, ScoringPeriod, Week, Year};

pub const DEFAULT_PROTOCOL: &str = "https";
pub const DEFAULT_HOST: &str = "www67.myfantasyleague.com";

const LOGIN_CATEGORY: &str = "login";
const EXPORT_CATEGORY: &str = "export";

/// Where requests are sent. Passed explicitly to every builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub protocol: String,
    pub host: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            host: DEFAULT_HOST.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
        }
    }

    /// Accepts either a bare host (`api.myfantasyleague.com`, https implied)
    /// or a base URL such as `http://127.0.0.1:8080`.
    pub fn from_base(base: &str) -> Self {
        let base = base.trim().trim_end_matches('/');
        match base.split_once("://") {
            Some((protocol, host)) => Self::new(protocol, host),
            None => Self::new(DEFAULT_PROTOCOL, base),
        }
    }

    pub fn base_url(&self, year: Year, category: &str) -> String {
        format!("{}://{}/{}/{}", self.protocol, self.host, year, category)
    }
}

/// The export endpoints this client understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    Rosters,
    Players,
    League,
    LiveScoring,
    PlayerScores,
}

impl EndpointKind {
    /// Value of the `TYPE` form field.
    pub fn type_code(&self) -> &'static str {
        match self {
            EndpointKind::Rosters => "rosters",
            EndpointKind::Players => "players",
            EndpointKind::League => "league",
            EndpointKind::LiveScoring => "liveScoring",
            EndpointKind::PlayerScores => "playerScores",
        }
    }
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_code())
    }
}

/// A fully built request: target URL and ordered form fields.
#[derive(Clone, PartialEq, Eq)]
pub struct MflRequest {
    url: String,
    params: Vec<(String, String)>,
}

impl MflRequest {
    fn new(url: String) -> Self {
        Self {
            url,
            params: Vec::new(),
        }
    }

    /// `POST /{year}/login` with `USERNAME`, `PASSWORD` and `XML=1`.
    pub fn login(config: &ApiConfig, year: Year, username: &str, password: &str) -> Self {
        Self::new(config.base_url(year, LOGIN_CATEGORY))
            .param("USERNAME", username)
            .param("PASSWORD", password)
            .param("XML", 1)
    }

    /// `POST /{year}/export` with `TYPE` and `JSON=1`; endpoint fields are added by the caller.
    pub fn export(config: &ApiConfig, year: Year, kind: EndpointKind) -> Self {
        Self::new(config.base_url(year, EXPORT_CATEGORY))
            .param("TYPE", kind.type_code())
            .param("JSON", 1)
    }

    pub fn rosters(
        config: &ApiConfig,
        year: Year,
        league_id: &LeagueId,
        franchise: Option<&FranchiseId>,
        week: Option<Week>,
    ) -> Self {
        Self::export(config, year, EndpointKind::Rosters)
            .param("L", league_id)
            .opt_param("FRANCHISE", franchise)
            .opt_param("W", week)
    }

    pub fn players(
        config: &ApiConfig,
        year: Year,
        league_id: Option<&LeagueId>,
        details: bool,
        since: Option<u64>,
        players: Option<&[PlayerId]>,
    ) -> Self {
        Self::export(config, year, EndpointKind::Players)
            .opt_param("L", league_id)
            .flag("DETAILS", details)
            .opt_param("SINCE", since)
            .opt_param("PLAYERS", players.map(PlayerId::join))
    }

    pub fn league(config: &ApiConfig, year: Year, league_id: &LeagueId) -> Self {
        Self::export(config, year, EndpointKind::League).param("L", league_id)
    }

    pub fn live_scoring(
        config: &ApiConfig,
        year: Year,
        league_id: &LeagueId,
        week: Option<Week>,
        details: bool,
    ) -> Self {
        Self::export(config, year, EndpointKind::LiveScoring)
            .param("L", league_id)
            .opt_param("W", week)
            .flag("DETAILS", details)
    }

    /// A `year` override in the query moves the URL to that year as well.
    pub fn player_scores(
        config: &ApiConfig,
        year: Year,
        league_id: Option<&LeagueId>,
        query: &PlayerScoresQuery,
    ) -> Self {
        let url_year = query.year.unwrap_or(year);
        Self::export(config, url_year, EndpointKind::PlayerScores)
            .opt_param("L", league_id)
            .opt_param("W", query.week)
            .opt_param("YEAR", query.year)
            .opt_param("PLAYERS", query.players.as_deref().map(PlayerId::join))
            .opt_param("STATUS", query.status.map(|s| s.as_param()))
            .flag("RULES", query.rules)
            .opt_param("COUNT", query.count)
    }

    fn param(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    fn opt_param<T: fmt::Display>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    fn flag(self, key: &str, set: bool) -> Self {
        if set {
            self.param(key, 1)
        } else {
            self
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Debug for MflRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<(&str, &str)> = self
            .params
            .iter()
            .map(|(k, v)| {
                if k == "PASSWORD" {
                    (k.as_str(), "***")
                } else {
                    (k.as_str(), v.as_str())
                }
            })
            .collect();
        f.debug_struct("MflRequest")
            .field("url", &self.url)
            .field("params", &params)
            .finish()
    }
}

/// Optional arguments of the `playerScores` export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerScoresQuery {
    pub week: Option<ScoringPeriod>,
    pub year: Option<Year>,
    pub players: Option<Vec<PlayerId>>,
    pub status: Option<PlayerStatusFilter>,
    /// Re-score players with the league's own rules (current year and week only).
    pub rules: bool,
    pub count: Option<u32>,
}
