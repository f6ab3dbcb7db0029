//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use mfl_api::{
    cli::{Commands, MflCli},
    commands::{
        export::{
            handle_league, handle_live_scoring, handle_login, handle_player_scores,
            handle_players, handle_rosters, PlayerScoresParams,
        },
        open_session,
    },
    logging::init_logging,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = MflCli::parse();
    init_logging(app.verbose);

    let mut session = open_session(&app.session).context("could not create MFL session")?;

    if app.session.login && !matches!(app.command, Commands::Login) {
        session.login().await.context("MFL login failed")?;
    }

    match app.command {
        Commands::Login => handle_login(&mut session).await?,

        Commands::Rosters { franchise, week } => {
            handle_rosters(&session, franchise, week, app.raw).await?
        }

        Commands::Players {
            details,
            since,
            players,
        } => handle_players(&session, details, since, players, app.raw).await?,

        Commands::League => handle_league(&session, app.raw).await?,

        Commands::LiveScoring { week, details } => {
            handle_live_scoring(&session, week, details, app.raw).await?
        }

        Commands::PlayerScores {
            week,
            scores_year,
            players,
            status,
            rules,
            count,
        } => {
            handle_player_scores(
                &session,
                PlayerScoresParams {
                    week,
                    year: scores_year,
                    players,
                    status,
                    rules,
                    count,
                    raw: app.raw,
                },
            )
            .await?
        }
    }

    Ok(())
}
