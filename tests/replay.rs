mod common;

use common::{school, temp_file, two_schools};
use schools_store::action_log::{ActionLog, ActionLogError};
use schools_store::config::Config;
use schools_store::replay::{load_seed, replay, ReplayOptions, ReplaySummary, SeedError};
use std::path::PathBuf;
use schools_store::schools::{FailurePayload, SchoolsReducer};
use schools_store::store::Store;

const SESSION: &str = r#"{"type": "GET_ALL_SCHOOLS_SUCCESS", "schools": [{"id": 1, "name": "Alpha", "address": "1 Main St"}, {"id": 2, "name": "Beta", "address": "2 Main St"}]}

{"type": "SUBMIT_NEW_SCHOOL_FORM_FAILURE", "error": {"message": "name taken"}}
{"type": "LOGIN_SUCCESS", "token": "abc"}
{"type": "SUBMIT_NEW_SCHOOL_FORM_SUCCESS", "school": {"id": 3, "name": "Gamma", "address": "3 Main St"}}
"#;

#[test]
fn replays_session_from_file() {
    let (_dir, path) = temp_file("actions.jsonl", SESSION);
    let store: Store<SchoolsReducer> = Store::new();

    let summary = replay(&store, ActionLog::open(&path).unwrap(), true).unwrap();

    assert_eq!(
        summary,
        ReplaySummary {
            dispatched: 4,
            unrecognized: 1,
            failures: 1,
            skipped: 0,
        }
    );
    let state = store.state();
    assert_eq!(
        state.schools,
        vec![school(1, "Alpha"), school(2, "Beta"), school(3, "Gamma")]
    );
    assert_eq!(
        state.error,
        Some(FailurePayload::new(serde_json::json!({"message": "name taken"})))
    );
}

#[test]
fn missing_log_is_open_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = ActionLog::open(&dir.path().join("missing.jsonl")).err().unwrap();
    assert!(matches!(err, ActionLogError::Open { .. }));
    assert_eq!(err.line(), None);
}

#[test]
fn seed_becomes_initial_state() {
    let (_dir, path) = temp_file(
        "seed.json",
        r#"{"schools": [{"id": 1, "name": "Alpha", "address": "1 Main St"}], "error": "stale"}"#,
    );
    let seed = load_seed(&path).unwrap();
    let store: Store<SchoolsReducer> = Store::with_state(seed);

    let (_log_dir, log) = temp_file(
        "actions.jsonl",
        r#"{"type": "SUBMIT_EDIT_SCHOOL_FORM_SUCCESS", "schools": [{"id": 1, "name": "Alpha", "address": "1 Main St"}, {"id": 2, "name": "Beta", "address": "2 Main St"}]}"#,
    );
    replay(&store, ActionLog::open(&log).unwrap(), true).unwrap();

    assert_eq!(store.state().schools, two_schools());
    assert_eq!(store.state().error, Some(FailurePayload::new("stale")));
}

#[test]
fn malformed_seed_is_parse_error() {
    let (_dir, path) = temp_file("seed.json", "{\"schools\": 3}");
    assert!(matches!(load_seed(&path), Err(SeedError::Parse { .. })));
}

fn config_with_seed(seed: &str, stop_on_error: bool) -> Config {
    let mut config = Config::default();
    config.replay.seed = Some(PathBuf::from(seed));
    config.replay.stop_on_error = stop_on_error;
    config
}

#[test]
fn seed_flag_overrides_config_seed() {
    let config = config_with_seed("from-config.json", true);
    let options = ReplayOptions::resolve(&config, Some(PathBuf::from("from-flag.json")), false);
    assert_eq!(options.seed, Some(PathBuf::from("from-flag.json")));
}

#[test]
fn config_seed_used_without_flag() {
    let config = config_with_seed("from-config.json", true);
    let options = ReplayOptions::resolve(&config, None, false);
    assert_eq!(options.seed, Some(PathBuf::from("from-config.json")));
}

#[test]
fn keep_going_disables_stop_on_error() {
    let config = Config::default();
    assert!(ReplayOptions::resolve(&config, None, false).stop_on_error);
    assert!(!ReplayOptions::resolve(&config, None, true).stop_on_error);
}

#[test]
fn config_can_disable_stop_on_error_without_flag() {
    let config = config_with_seed("seed.json", false);
    assert!(!ReplayOptions::resolve(&config, None, false).stop_on_error);
}

#[test]
fn no_seed_starts_empty() {
    let options = ReplayOptions::resolve(&Config::default(), None, false);
    assert!(options.initial_state().unwrap().is_empty());
}

#[test]
fn missing_seed_file_is_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let options = ReplayOptions::resolve(
        &Config::default(),
        Some(dir.path().join("absent.json")),
        false,
    );
    assert!(matches!(options.initial_state(), Err(SeedError::Read { .. })));
}
