//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{FranchiseId, LeagueId, PlayerId, PlayerStatusFilter, ScoringPeriod, Week, Year};

/// Session arguments shared by every command
#[derive(Debug, Args)]
pub struct SessionArgs {
    /// League year (e.g. 2025).
    #[clap(long, short, global = true, default_value_t = Year::default())]
    pub year: Year,

    /// League ID (or set `MFL_LEAGUE_ID` env var).
    #[clap(long, short, global = true)]
    pub league_id: Option<LeagueId>,

    /// MFL username (or set `MFL_USERNAME` env var).
    #[clap(long, short, global = true)]
    pub username: Option<String>,

    /// MFL password (or set `MFL_PASSWORD` env var).
    #[clap(long, global = true)]
    pub password: Option<String>,

    /// API host or base URL (or set `MFL_HOST` env var).
    #[clap(long, global = true)]
    pub host: Option<String>,

    /// Log in before fetching, to receive owner-only fields.
    #[clap(long, global = true)]
    pub login: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in and report whether a session token was issued
    Login,

    /// Current rosters for all franchises, with status and salary per player
    Rosters {
        /// Only this franchise (e.g. 0001).
        #[clap(long, short)]
        franchise: Option<FranchiseId>,

        /// Roster as of this week.
        #[clap(long, short)]
        week: Option<Week>,
    },

    /// Player IDs, names, positions and teams
    Players {
        /// Include complete player details.
        #[clap(long)]
        details: bool,

        /// Only changes since this unix timestamp.
        #[clap(long)]
        since: Option<u64>,

        /// Only these player IDs (comma separated).
        #[clap(long, short, value_delimiter = ',')]
        players: Option<Vec<PlayerId>>,
    },

    /// League setup and franchises
    League,

    /// Live scoring for a week
    LiveScoring {
        /// Week to report; the current week when omitted.
        #[clap(long, short)]
        week: Option<Week>,

        /// Include non-starters.
        #[clap(long)]
        details: bool,
    },

    /// Player scores for rostered players and free agents
    PlayerScores {
        /// Week number, YTD or AVG.
        #[clap(long, short)]
        week: Option<ScoringPeriod>,

        /// Scores from another year.
        #[clap(long = "scores-year")]
        scores_year: Option<Year>,

        /// Only these player IDs (comma separated).
        #[clap(long, short, value_delimiter = ',')]
        players: Option<Vec<PlayerId>>,

        /// Restrict by league status.
        #[clap(long, value_enum)]
        status: Option<PlayerStatusFilter>,

        /// Re-score with the league's own rules.
        #[clap(long)]
        rules: bool,

        /// Limit the number of players returned.
        #[clap(long, short)]
        count: Option<u32>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "mfl", about = "MyFantasyLeague API client")]
pub struct MflCli {
    #[clap(flatten)]
    pub session: SessionArgs,

    /// Print the raw response body instead of the normalized JSON.
    #[clap(long, global = true)]
    pub raw: bool,

    /// Log requests and responses to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
