//! Selector types for report commands.

use std::fmt;

/// Which ranking table to produce.
///
/// # Examples
///
/// ```rust
/// use pro_football::cli::types::filters::RankingKind;
///
/// assert_eq!(RankingKind::Defensive.to_string(), "Defensive");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum RankingKind {
    /// Ordered by offensive index, highest first
    Offensive,
    /// Ordered by defensive index, lowest first
    Defensive,
    /// Ordered by final Pythagorean winning percentage, highest first
    Total,
}

impl fmt::Display for RankingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RankingKind::Offensive => "Offensive",
            RankingKind::Defensive => "Defensive",
            RankingKind::Total => "Total",
        };
        write!(f, "{}", s)
    }
}

/// Narrows a game listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GameFilter {
    pub week: Option<crate::Week>,
    pub team: Option<String>,
    pub playoffs_only: bool,
}

impl GameFilter {
    pub fn for_week(week: crate::Week) -> Self {
        Self {
            week: Some(week),
            ..Self::default()
        }
    }

    pub fn for_team(team: impl Into<String>) -> Self {
        Self {
            team: Some(team.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_kind_display() {
        assert_eq!(RankingKind::Offensive.to_string(), "Offensive");
        assert_eq!(RankingKind::Total.to_string(), "Total");
    }

    #[test]
    fn test_game_filter_for_week() {
        let filter = GameFilter::for_week(crate::Week::new(4));
        assert_eq!(filter.week, Some(crate::Week::new(4)));
        assert!(filter.team.is_none());
        assert!(!filter.playoffs_only);
    }

    #[test]
    fn test_game_filter_for_team() {
        let filter = GameFilter::for_team("Green Bay Packers");
        assert_eq!(filter.team.as_deref(), Some("Green Bay Packers"));
        assert!(filter.week.is_none());
    }
}
