use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn test_log_level_from_str_known_values() {
    assert_eq!(LogLevel::from_str("off").unwrap().0, LevelFilter::Off);
    assert_eq!(LogLevel::from_str("error").unwrap().0, LevelFilter::Error);
    assert_eq!(LogLevel::from_str("warn").unwrap().0, LevelFilter::Warn);
    assert_eq!(LogLevel::from_str("info").unwrap().0, LevelFilter::Info);
    assert_eq!(LogLevel::from_str("debug").unwrap().0, LevelFilter::Debug);
    assert_eq!(LogLevel::from_str("trace").unwrap().0, LevelFilter::Trace);
}

#[test]
fn test_log_level_from_str_is_case_insensitive() {
    assert_eq!(LogLevel::from_str("DEBUG").unwrap().0, LevelFilter::Debug);
    assert_eq!(LogLevel::from_str("Warn").unwrap().0, LevelFilter::Warn);
}

#[test]
fn test_log_level_invalid_falls_back_to_info() {
    assert_eq!(LogLevel::from_str("verbose").unwrap().0, LevelFilter::Info);
    assert_eq!(LogLevel::from_str("").unwrap().0, LevelFilter::Info);
}

#[test]
fn test_log_level_from_raw_is_lenient() {
    assert_eq!(LogLevel::from_raw("TRACE").0, LevelFilter::Trace);
    assert_eq!(LogLevel::from_raw("verbose").0, LevelFilter::Info);
    assert_eq!(LogLevel::from_raw("").0, LevelFilter::Info);
}

#[test]
fn test_log_level_deserialize() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        level: LogLevel,
    }

    let w: Wrapper = toml::from_str("level = \"trace\"").unwrap();
    assert_eq!(w.level.0, LevelFilter::Trace);

    let w: Wrapper = toml::from_str("level = \"nonsense\"").unwrap();
    assert_eq!(w.level.0, LevelFilter::Info);
}
