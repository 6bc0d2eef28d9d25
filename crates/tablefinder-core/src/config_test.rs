use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "TABLEFINDER_ENV"));
}

#[test]
fn build_app_config_uses_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.candidates_path, PathBuf::from("./data/restaurants.yaml"));
    assert_eq!(cfg.default_k, 5);
    assert_eq!(cfg.bench_seed, 42);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("TABLEFINDER_ENV", "production");
    map.insert("TABLEFINDER_LOG_LEVEL", "tablefinder_rank=debug");
    map.insert("TABLEFINDER_CANDIDATES_PATH", "/srv/data/cph.json");
    map.insert("TABLEFINDER_DEFAULT_K", "12");
    map.insert("TABLEFINDER_BENCH_SEED", "7");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "tablefinder_rank=debug");
    assert_eq!(cfg.candidates_path, PathBuf::from("/srv/data/cph.json"));
    assert_eq!(cfg.default_k, 12);
    assert_eq!(cfg.bench_seed, 7);
}

#[test]
fn build_app_config_fails_on_invalid_env() {
    let mut map = HashMap::new();
    map.insert("TABLEFINDER_ENV", "producton");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TABLEFINDER_ENV"),
        "expected InvalidEnvVar(TABLEFINDER_ENV), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_on_non_numeric_default_k() {
    let mut map = HashMap::new();
    map.insert("TABLEFINDER_DEFAULT_K", "five");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TABLEFINDER_DEFAULT_K"),
        "expected InvalidEnvVar(TABLEFINDER_DEFAULT_K), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_on_zero_default_k() {
    let mut map = HashMap::new();
    map.insert("TABLEFINDER_DEFAULT_K", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, ref reason }) if var == "TABLEFINDER_DEFAULT_K" && reason.contains("at least 1")),
        "expected InvalidEnvVar(TABLEFINDER_DEFAULT_K), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_on_negative_default_k() {
    let mut map = HashMap::new();
    map.insert("TABLEFINDER_DEFAULT_K", "-3");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(
        result,
        Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TABLEFINDER_DEFAULT_K"
    ));
}

#[test]
fn build_app_config_fails_on_invalid_bench_seed() {
    let mut map = HashMap::new();
    map.insert("TABLEFINDER_BENCH_SEED", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TABLEFINDER_BENCH_SEED"),
        "expected InvalidEnvVar(TABLEFINDER_BENCH_SEED), got: {result:?}"
    );
}

#[test]
fn build_app_config_needs_no_single_variable() {
    let full = [
        ("TABLEFINDER_ENV", "test"),
        ("TABLEFINDER_LOG_LEVEL", "debug"),
        ("TABLEFINDER_CANDIDATES_PATH", "/tmp/cph.yaml"),
        ("TABLEFINDER_DEFAULT_K", "3"),
        ("TABLEFINDER_BENCH_SEED", "7"),
    ];
    for (skipped, _) in full {
        let map: HashMap<&str, &str> = full
            .iter()
            .copied()
            .filter(|(key, _)| *key != skipped)
            .collect();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "omitting {skipped} failed: {result:?}");
    }
}
