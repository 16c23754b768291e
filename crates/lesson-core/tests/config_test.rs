//! Tests for the lesson configuration system.

use lesson_core::config::LessonConfig;
use lesson_core::errors::{ConfigError, LessonError, LessonErrorCode, VitalsError};
use lesson_core::Vitals;

#[test]
fn defaults_produce_lesson_vitals() {
    let config = LessonConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.vitals().unwrap(), Vitals::lesson_defaults());
    assert_eq!(config.logging.effective_level(), "warn");
}

#[test]
fn empty_toml_is_defaults() {
    let config = LessonConfig::from_toml("").unwrap();
    assert_eq!(config.vitals.effective_age(), 25);
    assert_eq!(config.vitals.effective_height_m(), 1.75);
    assert_eq!(config.vitals.effective_weight_kg(), 70.5);
}

#[test]
fn partial_toml_overrides_only_given_fields() {
    let config = LessonConfig::from_toml(
        r#"
[vitals]
weight_kg = 80.0

[logging]
level = "lesson_core=debug"
"#,
    )
    .unwrap();
    assert_eq!(config.vitals.effective_height_m(), 1.75);
    assert_eq!(config.vitals.effective_weight_kg(), 80.0);
    assert_eq!(config.logging.effective_level(), "lesson_core=debug");
}

#[test]
fn unknown_keys_ignored() {
    let config = LessonConfig::from_toml("[vitals]\neye_color = \"blue\"\n").unwrap();
    assert!(config.vitals.age.is_none());
}

#[test]
fn invalid_toml_is_parse_error() {
    let err = LessonConfig::from_toml("[vitals\nage = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.coded_string().starts_with("[CONFIG_ERROR] "));
}

#[test]
fn negative_height_fails_validation() {
    let err = LessonConfig::from_toml("[vitals]\nheight_m = -1.0\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "vitals.height_m"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unvalidated_zero_weight_fails_at_vitals() {
    let mut config = LessonConfig::default();
    config.vitals.weight_kg = Some(0.0);
    let err = config.vitals().unwrap_err();
    assert!(matches!(
        err,
        LessonError::Vitals(VitalsError::InvalidMeasurement { field: "weight_kg", .. })
    ));
    assert_eq!(err.error_code(), "INVALID_MEASUREMENT");
}
