//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod football_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = FootballError::from(json_error);

        match error {
            FootballError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = FootballError::from(io_error);

        match error {
            FootballError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "abc".parse::<u16>().unwrap_err();
        let error = FootballError::from(parse_error);

        match error {
            FootballError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Table>("not = = toml").unwrap_err();
        let error = FootballError::from(toml_error);

        match error {
            FootballError::ConfigParse(_) => (),
            _ => panic!("Expected ConfigParse error variant"),
        }
    }

    #[test]
    fn test_rusqlite_error_conversion() {
        let error = FootballError::from(rusqlite::Error::QueryReturnedNoRows);

        match error {
            FootballError::Storage(_) => (),
            _ => panic!("Expected Storage error variant"),
        }
    }

    #[test]
    fn test_not_found_display() {
        let error = FootballError::not_found("Team", "Chicago Bears");
        assert_eq!(error.to_string(), "Team not found: Chicago Bears");
    }

    #[test]
    fn test_missing_related_display() {
        let error = FootballError::missing("TeamSeason", "Chicago Bears 1920");
        assert_eq!(
            error.to_string(),
            "TeamSeason required but missing: Chicago Bears 1920"
        );
        assert!(error.is_missing_related());
    }

    #[test]
    fn test_not_found_is_not_missing_related() {
        assert!(!FootballError::not_found("Game", 7).is_missing_related());
    }

    #[test]
    fn test_invalid_game_display() {
        let error = FootballError::InvalidGame {
            reason: "guest and host are the same team".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid game: guest and host are the same team"
        );
    }

    #[test]
    fn test_anyhow_roundtrip_keeps_variant() {
        let wrapped: anyhow::Error = FootballError::not_found("League", "NFL").into();
        let error = FootballError::from(wrapped);

        match error {
            FootballError::NotFound { entity, key } => {
                assert_eq!(entity, "League");
                assert_eq!(key, "NFL");
            }
            _ => panic!("Expected NotFound error variant"),
        }
    }

    #[test]
    fn test_anyhow_rusqlite_becomes_storage() {
        let wrapped: anyhow::Error = rusqlite::Error::InvalidQuery.into();

        match FootballError::from(wrapped) {
            FootballError::Storage(_) => (),
            _ => panic!("Expected Storage error variant"),
        }
    }

    #[test]
    fn test_anyhow_other_error_conversion() {
        let anyhow_error = anyhow::anyhow!("Test anyhow error message");

        match FootballError::from(anyhow_error) {
            FootballError::Other { message } => {
                assert!(message.contains("Test anyhow error message"));
            }
            _ => panic!("Expected Other error variant"),
        }
    }
}
