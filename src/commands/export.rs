//! Export command handlers: fetch, normalize, print.

use tracing::warn;

use crate::{
    cli::types::{FranchiseId, PlayerId, PlayerStatusFilter, ScoringPeriod, Week, Year},
    mfl::{Export, ExportResponse, PlayerScoresQuery, Session, Transport},
    MflError, Result,
};

/// Render a response for stdout: the body verbatim, or the normalized map as pretty JSON.
pub fn render_export<E: Export>(response: &ExportResponse<E>, raw: bool) -> Result<String> {
    if raw {
        return Ok(response.body().to_string());
    }
    if let Some(message) = response.api_error() {
        warn!(endpoint = %response.kind(), "MFL returned an error: {}", message);
    }
    let normalized = response.normalized()?;
    serde_json::to_string_pretty(&normalized).map_err(MflError::Render)
}

/// Handle the login command
pub async fn handle_login<T: Transport>(session: &mut Session<T>) -> Result<()> {
    session.login().await?;
    println!("✓ Logged in to MFL for {}", session.year());
    Ok(())
}

pub async fn handle_rosters<T: Transport>(
    session: &Session<T>,
    franchise: Option<FranchiseId>,
    week: Option<Week>,
    raw: bool,
) -> Result<()> {
    let response = session.rosters(None, franchise.as_ref(), week).await?;
    println!("{}", render_export(&response, raw)?);
    Ok(())
}

pub async fn handle_players<T: Transport>(
    session: &Session<T>,
    details: bool,
    since: Option<u64>,
    players: Option<Vec<PlayerId>>,
    raw: bool,
) -> Result<()> {
    let response = session
        .players(None, details, since, players.as_deref())
        .await?;
    println!("{}", render_export(&response, raw)?);
    Ok(())
}

pub async fn handle_league<T: Transport>(session: &Session<T>, raw: bool) -> Result<()> {
    let response = session.league(None).await?;
    println!("{}", render_export(&response, raw)?);
    Ok(())
}

pub async fn handle_live_scoring<T: Transport>(
    session: &Session<T>,
    week: Option<Week>,
    details: bool,
    raw: bool,
) -> Result<()> {
    let response = session.live_scoring(None, week, details).await?;
    println!("{}", render_export(&response, raw)?);
    Ok(())
}

/// Arguments of the player-scores command
#[derive(Debug, Clone, Default)]
pub struct PlayerScoresParams {
    pub week: Option<ScoringPeriod>,
    pub year: Option<Year>,
    pub players: Option<Vec<PlayerId>>,
    pub status: Option<PlayerStatusFilter>,
    pub rules: bool,
    pub count: Option<u32>,
    pub raw: bool,
}

impl PlayerScoresParams {
    fn query(&self) -> PlayerScoresQuery {
        PlayerScoresQuery {
            week: self.week,
            year: self.year,
            players: self.players.clone(),
            status: self.status,
            rules: self.rules,
            count: self.count,
        }
    }
}

pub async fn handle_player_scores<T: Transport>(
    session: &Session<T>,
    params: PlayerScoresParams,
) -> Result<()> {
    let response = session.player_scores(None, &params.query()).await?;
    println!("{}", render_export(&response, params.raw)?);
    Ok(())
}
