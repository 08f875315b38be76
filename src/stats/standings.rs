//! Season standings grouped by league, conference and division

use crate::storage::models::TeamSeason;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsRow {
    pub team_name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub winning_percentage: Option<f64>,
    pub points_for: u32,
    pub points_against: u32,
    pub point_differential: i64,
}

impl From<&TeamSeason> for StandingsRow {
    fn from(ts: &TeamSeason) -> Self {
        Self {
            team_name: ts.team_name.clone(),
            wins: ts.wins,
            losses: ts.losses,
            ties: ts.ties,
            winning_percentage: ts.winning_percentage,
            points_for: ts.points_for,
            points_against: ts.points_against,
            point_differential: ts.point_differential(),
        }
    }
}

/// Teams sharing one league/conference/division alignment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsGroup {
    pub league_name: String,
    pub conference_name: Option<String>,
    pub division_name: Option<String>,
    pub teams: Vec<StandingsRow>,
}

impl StandingsGroup {
    pub fn title(&self) -> String {
        [
            Some(self.league_name.as_str()),
            self.conference_name.as_deref(),
            self.division_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" / ")
    }
}

/// Standings order: winning percentage, then wins, then point differential,
/// then name. Teams with no games sort after teams with a percentage.
pub fn compare_standings(a: &TeamSeason, b: &TeamSeason) -> Ordering {
    let pct = match (a.winning_percentage, b.winning_percentage) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    pct.then_with(|| b.wins.cmp(&a.wins))
        .then_with(|| b.point_differential().cmp(&a.point_differential()))
        .then_with(|| a.team_name.cmp(&b.team_name))
}

/// Group team seasons by alignment and order each group.
///
/// Groups come out sorted by league, conference and division name; teams
/// without a conference or division form their own group per league.
pub fn build_standings(team_seasons: &[TeamSeason]) -> Vec<StandingsGroup> {
    let mut sorted: Vec<&TeamSeason> = team_seasons.iter().collect();
    sorted.sort_by(|a, b| {
        (&a.league_name, &a.conference_name, &a.division_name)
            .cmp(&(&b.league_name, &b.conference_name, &b.division_name))
            .then_with(|| compare_standings(a, b))
    });

    let mut groups: Vec<StandingsGroup> = Vec::new();
    for ts in sorted {
        let same_group = groups.last().is_some_and(|g| {
            g.league_name == ts.league_name
                && g.conference_name == ts.conference_name
                && g.division_name == ts.division_name
        });
        if !same_group {
            groups.push(StandingsGroup {
                league_name: ts.league_name.clone(),
                conference_name: ts.conference_name.clone(),
                division_name: ts.division_name.clone(),
                teams: Vec::new(),
            });
        }
        if let Some(group) = groups.last_mut() {
            group.teams.push(StandingsRow::from(ts));
        }
    }
    groups
}
