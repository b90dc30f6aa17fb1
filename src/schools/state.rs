//! State for the schools slice of the store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::mvi::StoreState;

/// A school record as delivered by the backend.
///
/// The store never looks inside; the shape belongs to whoever produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct School(pub Value);

impl School {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }
}

impl From<Value> for School {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Failure payload attached to a `*_FAILURE` action, stored verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FailurePayload(pub Value);

impl FailurePayload {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }
}

impl From<Value> for FailurePayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Schools slice: the list shown to the user and the last failure seen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchoolsState {
    /// Last fetched/edited list, plus any schools created since.
    #[serde(default)]
    pub schools: Vec<School>,
    /// Set by the most recent failed operation. Successes leave it alone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<FailurePayload>,
}

impl StoreState for SchoolsState {}

impl SchoolsState {
    pub fn with_schools(schools: Vec<School>) -> Self {
        Self {
            schools,
            error: None,
        }
    }

    pub fn len(&self) -> usize {
        self.schools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
