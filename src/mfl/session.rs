//! Authenticated access to one MFL league year.
//!
//! A [`Session`] holds the year/league context and credentials, and carries the
//! login token once [`Session::login`] succeeds. Data calls work in any state;
//! MFL simply returns less (no owner-only fields) without a token.

use std::fmt;
use tracing::{info, warn};

use crate::{
    cli::types::{FranchiseId, LeagueId, PlayerId, Week, Year},
    error::MflError,
    mfl::{
        http::{HttpTransport, Transport},
        request::{ApiConfig, MflRequest, PlayerScoresQuery},
        response::{
            Export, ExportResponse, League, LiveScoring, LoginResponse, PlayerScores, Players,
            Rosters,
        },
    },
    Result, LEAGUE_ID_ENV_VAR,
};

#[cfg(test)]
mod tests;

/// Cookie MFL expects the login token under.
pub const AUTH_COOKIE: &str = "MFL_USER_ID";

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both halves or nothing.
    pub fn from_parts(username: Option<String>, password: Option<String>) -> Option<Self> {
        match (username, password) {
            (Some(u), Some(p)) => Some(Self::new(u, p)),
            _ => None,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Where a session is in the login lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    /// A login request is in flight.
    Authenticating,
    Authenticated { token: String },
}

pub struct Session<T: Transport = HttpTransport> {
    config: ApiConfig,
    year: Year,
    league_id: Option<LeagueId>,
    credentials: Option<Credentials>,
    state: AuthState,
    transport: T,
}

impl Session<HttpTransport> {
    /// Unauthenticated session over HTTP with the default host.
    pub fn new(
        year: Year,
        league_id: Option<LeagueId>,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self> {
        Ok(Self::with_transport(
            HttpTransport::new()?,
            ApiConfig::default(),
            year,
            league_id,
            Credentials::from_parts(username, password),
        ))
    }

    /// Year-only session, enough for the player database and scores.
    pub fn generic(year: Year) -> Result<Self> {
        Self::new(year, None, None, None)
    }

    pub fn for_league(year: Year, league_id: LeagueId) -> Result<Self> {
        Self::new(year, Some(league_id), None, None)
    }

    /// League session that has already logged in.
    pub async fn authenticated(
        year: Year,
        league_id: LeagueId,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let mut session = Self::new(
            year,
            Some(league_id),
            Some(username.into()),
            Some(password.into()),
        )?;
        session.login().await?;
        Ok(session)
    }
}

impl<T: Transport> Session<T> {
    pub fn with_transport(
        transport: T,
        config: ApiConfig,
        year: Year,
        league_id: Option<LeagueId>,
        credentials: Option<Credentials>,
    ) -> Self {
        Self {
            config,
            year,
            league_id,
            credentials,
            state: AuthState::Unauthenticated,
            transport,
        }
    }

    /// Point requests at another host.
    pub fn with_config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn league_id(&self) -> Option<&LeagueId> {
        self.league_id.as_ref()
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match &self.state {
            AuthState::Authenticated { token } => Some(token),
            _ => None,
        }
    }

    /// Log in with the stored credentials and keep the token for later requests.
    ///
    /// On any failure, or if the returned future is dropped before it
    /// completes, the session is left unauthenticated.
    pub async fn login(&mut self) -> Result<()> {
        match self.state {
            AuthState::Unauthenticated => {}
            AuthState::Authenticating | AuthState::Authenticated { .. } => {
                return Err(MflError::AlreadyAuthenticated)
            }
        }
        let credentials = self
            .credentials
            .clone()
            .ok_or(MflError::MissingCredentials)?;

        let attempt = LoginAttempt::begin(&mut self.state);
        let outcome = send_login(
            &self.transport,
            &self.config,
            self.year,
            &credentials.username,
            &credentials.password,
        )
        .await
        .and_then(LoginResponse::into_token);

        match outcome {
            Ok(token) => {
                info!(username = %credentials.username, year = %self.year, "logged in to MFL");
                attempt.succeed(token);
                Ok(())
            }
            Err(e) => {
                warn!(username = %credentials.username, error = %e, "MFL login failed");
                drop(attempt);
                Err(e)
            }
        }
    }

    /// Send a login request without touching session state.
    pub async fn login_with_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse> {
        send_login(&self.transport, &self.config, self.year, username, password).await
    }

    /// Forget the token.
    pub fn reset(&mut self) {
        self.state = AuthState::Unauthenticated;
    }

    fn cookies(&self) -> Vec<(String, String)> {
        match self.token() {
            Some(token) => vec![(AUTH_COOKIE.to_string(), token.to_string())],
            None => Vec::new(),
        }
    }

    fn league_or_default(&self, league_id: Option<&LeagueId>) -> Option<LeagueId> {
        league_id.or(self.league_id.as_ref()).cloned()
    }

    fn require_league(&self, league_id: Option<&LeagueId>) -> Result<LeagueId> {
        self.league_or_default(league_id)
            .ok_or_else(|| MflError::MissingLeagueId {
                env_var: LEAGUE_ID_ENV_VAR.to_string(),
            })
    }

    async fn export<E: Export>(&self, request: MflRequest) -> Result<ExportResponse<E>> {
        let raw = self
            .transport
            .post(request.url(), request.params(), &self.cookies())
            .await?;
        ExportResponse::from_raw(raw)
    }

    /// Current rosters for every franchise (or one), with status and salary per player.
    pub async fn rosters(
        &self,
        league_id: Option<&LeagueId>,
        franchise: Option<&FranchiseId>,
        week: Option<Week>,
    ) -> Result<ExportResponse<Rosters>> {
        let league_id = self.require_league(league_id)?;
        let request = MflRequest::rosters(&self.config, self.year, &league_id, franchise, week);
        self.export(request).await
    }

    /// Player database for the year, optionally only changes `since` a unix timestamp.
    pub async fn players(
        &self,
        league_id: Option<&LeagueId>,
        details: bool,
        since: Option<u64>,
        players: Option<&[PlayerId]>,
    ) -> Result<ExportResponse<Players>> {
        let league_id = self.league_or_default(league_id);
        let request = MflRequest::players(
            &self.config,
            self.year,
            league_id.as_ref(),
            details,
            since,
            players,
        );
        self.export(request).await
    }

    /// League setup and franchises. Owner details need a commissioner login.
    pub async fn league(&self, league_id: Option<&LeagueId>) -> Result<ExportResponse<League>> {
        let league_id = self.require_league(league_id)?;
        let request = MflRequest::league(&self.config, self.year, &league_id);
        self.export(request).await
    }

    pub async fn live_scoring(
        &self,
        league_id: Option<&LeagueId>,
        week: Option<Week>,
        details: bool,
    ) -> Result<ExportResponse<LiveScoring>> {
        let league_id = self.require_league(league_id)?;
        let request =
            MflRequest::live_scoring(&self.config, self.year, &league_id, week, details);
        self.export(request).await
    }

    /// Scores for rostered players and free agents.
    pub async fn player_scores(
        &self,
        league_id: Option<&LeagueId>,
        query: &PlayerScoresQuery,
    ) -> Result<ExportResponse<PlayerScores>> {
        let league_id = self.league_or_default(league_id);
        let request =
            MflRequest::player_scores(&self.config, self.year, league_id.as_ref(), query);
        self.export(request).await
    }
}

async fn send_login<T: Transport>(
    transport: &T,
    config: &ApiConfig,
    year: Year,
    username: &str,
    password: &str,
) -> Result<LoginResponse> {
    let request = MflRequest::login(config, year, username, password);
    let raw = transport.post(request.url(), request.params(), &[]).await?;
    Ok(LoginResponse::new(raw))
}

/// Holds the session in `Authenticating` while a login request is in flight.
///
/// Dropping it without [`LoginAttempt::succeed`] puts the session back to
/// `Unauthenticated`, including when the login future itself is dropped.
struct LoginAttempt<'a> {
    state: &'a mut AuthState,
}

impl<'a> LoginAttempt<'a> {
    fn begin(state: &'a mut AuthState) -> Self {
        *state = AuthState::Authenticating;
        Self { state }
    }

    fn succeed(mut self, token: String) {
        *self.state = AuthState::Authenticated { token };
    }
}

impl Drop for LoginAttempt<'_> {
    fn drop(&mut self) {
        if matches!(self.state, AuthState::Authenticating) {
            *self.state = AuthState::Unauthenticated;
        }
    }
}

impl<T: Transport> fmt::Debug for Session<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("year", &self.year)
            .field("league_id", &self.league_id)
            .field("credentials", &self.credentials)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
