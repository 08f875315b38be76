//! CLI argument definitions and parsing structures.

use super::types::{GameId, RankingKind, SeasonId, Week};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Season selector shared by most commands
#[derive(Debug, Clone, Copy, Args)]
pub struct SeasonArg {
    /// Season year (or set `default_season` in the config / `PRO_FOOTBALL_SEASON`).
    #[clap(long, short)]
    pub season: Option<SeasonId>,
}

/// First and last season an entity took part in
#[derive(Debug, Clone, Copy, Args)]
pub struct ActiveRange {
    /// First season (e.g. 1960).
    #[clap(long)]
    pub first_season: SeasonId,

    /// Last season, omitted while still active.
    #[clap(long)]
    pub last_season: Option<SeasonId>,
}

/// Everything needed to describe a game
#[derive(Debug, Clone, Args)]
pub struct GameFields {
    #[clap(flatten)]
    pub season: SeasonArg,

    /// Week of the season, starting at 1.
    #[clap(long, short)]
    pub week: Week,

    /// Visiting team.
    pub guest: String,

    pub guest_score: u32,

    /// Home team.
    pub host: String,

    pub host_score: u32,

    /// Playoff games are stored but not counted in regular-season records.
    #[clap(long)]
    pub playoff: bool,

    #[clap(long)]
    pub neutral_site: bool,

    #[clap(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum LeagueCmd {
    /// Add a league
    Add {
        /// Short name, e.g. NFL.
        name: String,

        #[clap(long)]
        long_name: String,

        #[clap(flatten)]
        range: ActiveRange,
    },
    /// Replace a league's details
    Edit {
        name: String,

        #[clap(long)]
        long_name: String,

        #[clap(flatten)]
        range: ActiveRange,
    },
    Remove {
        name: String,
    },
    /// List all leagues
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
    /// Show one league and its season totals
    Show {
        name: String,

        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConferenceCmd {
    Add {
        name: String,

        #[clap(long)]
        long_name: String,

        #[clap(long)]
        league: String,

        #[clap(flatten)]
        range: ActiveRange,
    },
    Edit {
        name: String,

        #[clap(long)]
        long_name: String,

        #[clap(long)]
        league: String,

        #[clap(flatten)]
        range: ActiveRange,
    },
    Remove {
        name: String,
    },
    /// List conferences, optionally for one league
    List {
        #[clap(long)]
        league: Option<String>,

        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum DivisionCmd {
    Add {
        name: String,

        #[clap(long)]
        league: String,

        #[clap(long)]
        conference: Option<String>,

        #[clap(flatten)]
        range: ActiveRange,
    },
    Edit {
        name: String,

        #[clap(long)]
        league: String,

        #[clap(long)]
        conference: Option<String>,

        #[clap(flatten)]
        range: ActiveRange,
    },
    Remove {
        name: String,
    },
    /// List divisions, optionally for one league
    List {
        #[clap(long)]
        league: Option<String>,

        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum TeamCmd {
    Add {
        name: String,

        #[clap(flatten)]
        range: ActiveRange,
    },
    Edit {
        name: String,

        #[clap(flatten)]
        range: ActiveRange,
    },
    Remove {
        name: String,
    },
    List {
        #[clap(long)]
        json: bool,
    },
    /// Show a team's season-by-season history
    Show {
        name: String,

        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum SeasonCmd {
    /// Add an empty season
    Add {
        id: SeasonId,

        /// Number of regular-season weeks.
        #[clap(long, default_value_t = 0)]
        weeks: u16,
    },
    Edit {
        id: SeasonId,

        #[clap(long)]
        weeks: u16,
    },
    Remove {
        id: SeasonId,
    },
    List {
        #[clap(long)]
        json: bool,
    },
    /// Create a season and carry active teams forward from an earlier one
    Open {
        id: SeasonId,

        #[clap(long, default_value_t = 0)]
        weeks: u16,

        /// Season to copy team alignments from (defaults to the previous year).
        #[clap(long)]
        from: Option<SeasonId>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCmd {
    /// Print the settings in effect and where they are stored
    Show,
    /// Change stored settings and write them back to `config.toml`
    Set {
        #[clap(long, conflicts_with = "clear_database_path")]
        database_path: Option<PathBuf>,

        /// Go back to the database in the platform data directory.
        #[clap(long)]
        clear_database_path: bool,

        #[clap(long, conflicts_with = "clear_log_file_path")]
        log_file_path: Option<PathBuf>,

        #[clap(long)]
        clear_log_file_path: bool,

        #[clap(long)]
        pythagorean_exponent: Option<f64>,

        #[clap(long, conflicts_with = "clear_default_season")]
        default_season: Option<SeasonId>,

        #[clap(long)]
        clear_default_season: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum TeamSeasonCmd {
    /// Enter a team into a season with an empty record
    Add {
        team: String,

        #[clap(flatten)]
        season: SeasonArg,

        #[clap(long)]
        league: String,

        #[clap(long)]
        conference: Option<String>,

        #[clap(long)]
        division: Option<String>,
    },
    /// Change a team season's league, conference or division
    Edit {
        team: String,

        #[clap(flatten)]
        season: SeasonArg,

        #[clap(long)]
        league: String,

        #[clap(long)]
        conference: Option<String>,

        #[clap(long)]
        division: Option<String>,
    },
    Remove {
        team: String,

        #[clap(flatten)]
        season: SeasonArg,
    },
    /// List every team season of a season
    List {
        #[clap(flatten)]
        season: SeasonArg,

        #[clap(long)]
        json: bool,
    },
    Show {
        team: String,

        #[clap(flatten)]
        season: SeasonArg,

        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum GameCmd {
    /// Record a game and update both teams
    Add {
        #[clap(flatten)]
        fields: GameFields,
    },
    /// Replace a recorded game
    Edit {
        id: GameId,

        #[clap(flatten)]
        fields: GameFields,
    },
    /// Delete a game and take it out of both records
    Remove {
        id: GameId,
    },
    /// List games of a season
    List {
        #[clap(flatten)]
        season: SeasonArg,

        #[clap(long, short)]
        week: Option<Week>,

        /// Only games this team played.
        #[clap(long)]
        team: Option<String>,

        #[clap(long)]
        playoffs: bool,

        #[clap(long)]
        json: bool,
    },
    Show {
        id: GameId,

        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "pro-football", about = "Pro football statistics tracker")]
pub struct ProFootball {
    /// Database file (overrides the config and `PRO_FOOTBALL_DB`).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Mirror log output to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage leagues
    League {
        #[clap(subcommand)]
        cmd: LeagueCmd,
    },
    /// Manage conferences
    Conference {
        #[clap(subcommand)]
        cmd: ConferenceCmd,
    },
    /// Manage divisions
    Division {
        #[clap(subcommand)]
        cmd: DivisionCmd,
    },
    /// Manage teams
    Team {
        #[clap(subcommand)]
        cmd: TeamCmd,
    },
    /// Manage seasons
    Season {
        #[clap(subcommand)]
        cmd: SeasonCmd,
    },
    /// Manage a team's entry in a season
    TeamSeason {
        #[clap(subcommand)]
        cmd: TeamSeasonCmd,
    },
    /// Record and correct games
    Game {
        #[clap(subcommand)]
        cmd: GameCmd,
    },
    /// Show or change stored settings
    Config {
        #[clap(subcommand)]
        cmd: ConfigCmd,
    },
    /// Season standings by league, conference and division
    Standings {
        #[clap(flatten)]
        season: SeasonArg,

        #[clap(long)]
        json: bool,
    },
    /// Offensive, defensive or total rankings
    Rankings {
        #[clap(flatten)]
        season: SeasonArg,

        #[clap(long, value_enum, default_value_t = RankingKind::Total)]
        kind: RankingKind,

        #[clap(long)]
        json: bool,
    },
    /// A team's schedule with opponents' records and totals
    Schedule {
        team: String,

        #[clap(flatten)]
        season: SeasonArg,

        #[clap(long)]
        json: bool,
    },
    /// Recompute offensive and defensive indices
    UpdateRankings {
        #[clap(flatten)]
        season: SeasonArg,

        /// Only this team.
        #[clap(long)]
        team: Option<String>,
    },
    /// Predict the score of a game between two team seasons
    Predict {
        guest: String,

        /// Season of the guest team (defaults to `--season`).
        #[clap(long)]
        guest_season: Option<SeasonId>,

        host: String,

        /// Season of the host team (defaults to `--season`).
        #[clap(long)]
        host_season: Option<SeasonId>,

        #[clap(flatten)]
        season: SeasonArg,

        #[clap(long)]
        json: bool,
    },
}
