//! Replaying recorded actions into a schools store.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::action_log::ActionLogError;
use crate::config::Config;
use crate::schools::{SchoolsAction, SchoolsReducer, SchoolsState};
use crate::store::Store;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load an initial state snapshot from a JSON file.
pub fn load_seed(path: &Path) -> Result<SchoolsState, SeedError> {
    let content = fs::read_to_string(path).map_err(|e| SeedError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| SeedError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Replay settings after merging command-line flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayOptions {
    pub seed: Option<PathBuf>,
    pub stop_on_error: bool,
}

impl ReplayOptions {
    /// `seed_flag` replaces `[replay] seed`; `keep_going` turns off
    /// `[replay] stop_on_error`.
    pub fn resolve(config: &Config, seed_flag: Option<PathBuf>, keep_going: bool) -> Self {
        Self {
            seed: seed_flag.or_else(|| config.replay.seed.clone()),
            stop_on_error: config.replay.stop_on_error && !keep_going,
        }
    }

    /// Initial store state: the seed snapshot if one is set, else empty.
    pub fn initial_state(&self) -> Result<SchoolsState, SeedError> {
        match &self.seed {
            Some(path) => load_seed(path),
            None => Ok(SchoolsState::default()),
        }
    }
}

/// Outcome of a replay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Actions handed to the store.
    pub dispatched: usize,
    /// Dispatched actions with a tag the reducer ignores.
    pub unrecognized: usize,
    /// Dispatched `*_FAILURE` actions.
    pub failures: usize,
    /// Lines skipped because they could not be read or decoded.
    pub skipped: usize,
}

/// Dispatch every action from `actions` into `store`.
///
/// With `stop_on_error` the first bad entry aborts the replay; actions
/// dispatched before it stay applied. Otherwise bad entries are logged and
/// skipped.
pub fn replay<I>(
    store: &Store<SchoolsReducer>,
    actions: I,
    stop_on_error: bool,
) -> Result<ReplaySummary, ActionLogError>
where
    I: IntoIterator<Item = Result<SchoolsAction, ActionLogError>>,
{
    let mut summary = ReplaySummary::default();

    for entry in actions {
        let action = match entry {
            Ok(action) => action,
            Err(err) if stop_on_error => return Err(err),
            Err(err) => {
                tracing::warn!("Skipping action log entry: {}", err);
                summary.skipped += 1;
                continue;
            }
        };

        match action.kind() {
            None => {
                tracing::trace!("Unrecognized action '{}' passed through", action.tag());
                summary.unrecognized += 1;
            }
            Some(tag) if tag.is_failure() => summary.failures += 1,
            Some(_) => {}
        }
        store.dispatch(action);
        summary.dispatched += 1;
    }

    tracing::info!(
        dispatched = summary.dispatched,
        unrecognized = summary.unrecognized,
        failures = summary.failures,
        skipped = summary.skipped,
        "Replay finished"
    );
    Ok(summary)
}
