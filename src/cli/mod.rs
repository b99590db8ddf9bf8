//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use types::{LeagueKey, TeamKey, Week};

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Show the league's roster positions (cached if available)
    LeagueSlots {
        /// League key such as `449.l.123456` (or set `YAHOO_FFL_LEAGUE_KEY`).
        #[clap(long, short)]
        league_key: Option<LeagueKey>,

        /// Force refresh from Yahoo, overwriting the cache.
        #[clap(long)]
        refresh: bool,

        /// Output the slot map as JSON.
        #[clap(long)]
        json: bool,

        /// Print where the settings came from and the cache path.
        #[clap(long)]
        verbose: bool,
    },

    /// Compute the optimal starting lineup for a team.
    ///
    /// Fetches league settings (cached) and the team roster in parallel, then
    /// fills starting slots greedily and suggests start/sit moves.
    Lineup {
        /// Team key such as `449.l.123456.t.3` (or set `YAHOO_FFL_TEAM_KEY`).
        #[clap(long, short)]
        team_key: Option<TeamKey>,

        /// League key; must match the team's own league when given.
        #[clap(long, short)]
        league_key: Option<LeagueKey>,

        /// Scoring week (defaults to the league's current week).
        #[clap(long, short)]
        week: Option<Week>,

        /// Force refresh of cached league settings.
        #[clap(long)]
        refresh: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Print progress messages.
        #[clap(long)]
        verbose: bool,
    },

    /// Compute the optimal lineup from saved Yahoo payloads (no network).
    LineupFromFiles {
        /// Saved league settings response.
        #[clap(long)]
        settings: PathBuf,

        /// Saved team roster response.
        #[clap(long)]
        roster: PathBuf,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "yahoo-ffl", about = "Yahoo Fantasy Football lineup CLI")]
pub struct YahooFfl {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from Yahoo Fantasy Football
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
