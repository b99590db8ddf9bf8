//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use yahoo_ffl::{
    cli::{Commands, GetCmd, YahooFfl},
    commands::{
        league_slots::handle_league_slots,
        lineup::{handle_lineup, LineupParams},
        lineup_files::handle_lineup_files,
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = YahooFfl::parse();

    if let Err(e) = run(app).await {
        eprintln!("Error [{}]: {}", e.code(), e.user_message());
        eprintln!("  {}", e);
        std::process::exit(1);
    }
}

async fn run(app: YahooFfl) -> Result<()> {
    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::LeagueSlots {
                league_key,
                refresh,
                json,
                verbose,
            } => handle_league_slots(league_key, refresh, json, verbose).await?,

            GetCmd::Lineup {
                team_key,
                league_key,
                week,
                refresh,
                json,
                verbose,
            } => {
                handle_lineup(LineupParams {
                    team_key,
                    league_key,
                    week,
                    refresh,
                    as_json: json,
                    verbose,
                })
                .await?
            }

            GetCmd::LineupFromFiles {
                settings,
                roster,
                json,
            } => handle_lineup_files(settings, roster, json)?,
        },
    }

    Ok(())
}
