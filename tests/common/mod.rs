//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use schools_store::schools::{FailurePayload, School, SchoolsState};
use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn school(id: i64, name: &str) -> School {
    School::new(json!({ "id": id, "name": name, "address": format!("{id} Main St") }))
}

pub fn two_schools() -> Vec<School> {
    vec![school(1, "Alpha"), school(2, "Beta")]
}

pub fn state_with(schools: Vec<School>, error: Option<&str>) -> SchoolsState {
    SchoolsState {
        schools,
        error: error.map(FailurePayload::new),
    }
}

/// Write `content` into a fresh temp dir and return both.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
