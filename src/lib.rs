//! MyFantasyLeague API Client Library
//!
//! A Rust client for the read-only MyFantasyLeague (MFL) export API. It logs in,
//! carries the session cookie across requests, and reshapes MFL's nested
//! payloads into flat maps keyed by franchise or player id.
//!
//! ## Features
//!
//! - **Session Login**: Username/password login with the `MFL_USER_ID` cookie attached afterwards
//! - **Exports**: Rosters, players, league, live scoring and player scores
//! - **Normalization**: Id-keyed maps computed on demand from each raw response
//! - **Raw Access**: Status code, body and parsed JSON stay available on every response
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mfl_api::{mfl::Session, LeagueId, Year};
//!
//! # async fn example() -> mfl_api::Result<()> {
//! let session = Session::authenticated(
//!     Year::new(2025),
//!     LeagueId::new("35465"),
//!     "owner",
//!     "secret",
//! )
//! .await?;
//!
//! let rosters = session.rosters(None, None, None).await?.normalized()?;
//! for (franchise, roster) in &rosters {
//!     println!("{franchise}: {} players", roster.players.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The CLI reads defaults from the environment:
//! ```bash
//! export MFL_LEAGUE_ID=35465
//! export MFL_USERNAME=owner
//! export MFL_PASSWORD=secret
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod mfl;

// Re-export commonly used types
pub use cli::types::{FranchiseId, LeagueId, PlayerId, ScoringPeriod, Week, Year};
pub use error::{MflError, Result};
pub use mfl::{ApiConfig, AuthState, Session};

pub const LEAGUE_ID_ENV_VAR: &str = "MFL_LEAGUE_ID";
pub const USERNAME_ENV_VAR: &str = "MFL_USERNAME";
pub const PASSWORD_ENV_VAR: &str = "MFL_PASSWORD";
pub const HOST_ENV_VAR: &str = "MFL_HOST";
