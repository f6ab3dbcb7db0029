//! Command implementations for the MFL CLI

pub mod export;

use crate::{
    cli::SessionArgs,
    mfl::{ApiConfig, Credentials, HttpTransport, Session},
    LeagueId, Result, HOST_ENV_VAR, LEAGUE_ID_ENV_VAR, PASSWORD_ENV_VAR, USERNAME_ENV_VAR,
};


/// League ID from the flag, else from `MFL_LEAGUE_ID`. An unparsable env value is ignored.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Option<LeagueId> {
    league_id.or_else(|| {
        std::env::var(LEAGUE_ID_ENV_VAR)
            .ok()
            .and_then(|s| s.parse::<LeagueId>().ok())
    })
}

/// Username and password from flags, falling back to `MFL_USERNAME` / `MFL_PASSWORD`.
pub fn resolve_credentials(
    username: Option<String>,
    password: Option<String>,
) -> Option<Credentials> {
    let username = username.or_else(|| std::env::var(USERNAME_ENV_VAR).ok());
    let password = password.or_else(|| std::env::var(PASSWORD_ENV_VAR).ok());
    Credentials::from_parts(username, password)
}

/// Host from the flag, else `MFL_HOST`, else the default MFL host.
pub fn resolve_api_config(host: Option<&str>) -> ApiConfig {
    host.map(str::to_string)
        .or_else(|| std::env::var(HOST_ENV_VAR).ok())
        .map(|h| ApiConfig::from_base(&h))
        .unwrap_or_default()
}

/// Build an unauthenticated HTTP session from CLI arguments and environment.
pub fn open_session(args: &SessionArgs) -> Result<Session<HttpTransport>> {
    Ok(Session::with_transport(
        HttpTransport::new()?,
        resolve_api_config(args.host.as_deref()),
        args.year,
        resolve_league_id(args.league_id.clone()),
        resolve_credentials(args.username.clone(), args.password.clone()),
    ))
}
