use super::*;
use std::collections::HashMap;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load_from_path(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.pythagorean_exponent, DEFAULT_PYTHAGOREAN_EXPONENT);
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let config = Config {
        database_path: Some(PathBuf::from("/tmp/football.db")),
        log_file_path: None,
        pythagorean_exponent: 2.0,
        default_season: Some(SeasonId::new(1985)),
    };

    config.save_to_path(&path).unwrap();
    let loaded = Config::load_from_path(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_season = 1972\n").unwrap();

    let config = Config::load_from_path(&path).unwrap();
    assert_eq!(config.default_season, Some(SeasonId::new(1972)));
    assert_eq!(config.pythagorean_exponent, DEFAULT_PYTHAGOREAN_EXPONENT);
    assert!(config.database_path.is_none());
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "pythagorean_exponent = \"steep\"\n").unwrap();

    let err = Config::load_from_path(&path).unwrap_err();
    assert!(matches!(err, FootballError::ConfigParse(_)));
}

#[test]
fn test_environment_overrides() {
    let mut config = Config::default();
    config
        .apply_overrides(env(&[
            (DATABASE_ENV_VAR, "/data/pf.db"),
            (LOG_FILE_ENV_VAR, "/logs/pf.log"),
            (SEASON_ENV_VAR, " 2007 "),
        ]))
        .unwrap();

    assert_eq!(config.database_path, Some(PathBuf::from("/data/pf.db")));
    assert_eq!(config.log_file(), PathBuf::from("/logs/pf.log"));
    assert_eq!(config.default_season, Some(SeasonId::new(2007)));
}

#[test]
fn test_invalid_season_override() {
    let mut config = Config::default();
    let err = config
        .apply_overrides(env(&[(SEASON_ENV_VAR, "next year")]))
        .unwrap_err();
    assert!(matches!(err, FootballError::InvalidNumber(_)));
}

#[test]
fn test_validate_rejects_bad_exponent() {
    for exponent in [0.0, -1.5, f64::NAN] {
        let config = Config {
            pythagorean_exponent: exponent,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_path() {
    let config = Config {
        database_path: Some(PathBuf::new()),
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(FootballError::Config { .. })
    ));
}

#[test]
fn test_calculator_uses_exponent() {
    let config = Config {
        pythagorean_exponent: 2.0,
        ..Config::default()
    };
    assert_eq!(config.calculator().exponent, 2.0);
}

#[test]
fn test_apply_update_sets_and_clears() {
    let mut config = Config {
        database_path: Some(PathBuf::from("/old.db")),
        default_season: Some(SeasonId::new(1985)),
        ..Config::default()
    };
    config.apply_update(&ConfigUpdate {
        database_path: Some(None),
        pythagorean_exponent: Some(2.0),
        default_season: Some(Some(SeasonId::new(1986))),
        ..ConfigUpdate::default()
    });

    assert_eq!(config.database_path, None);
    assert_eq!(config.log_file_path, None);
    assert_eq!(config.pythagorean_exponent, 2.0);
    assert_eq!(config.default_season, Some(SeasonId::new(1986)));
}
