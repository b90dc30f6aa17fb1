//! Actions consumed by the schools reducer and their JSON wire form.
//!
//! On the wire an action is a flat object keyed by `type`:
//!
//! ```text
//! {"type": "GET_ALL_SCHOOLS_SUCCESS", "schools": [...]}
//! {"type": "SUBMIT_NEW_SCHOOL_FORM_SUCCESS", "school": {...}}
//! {"type": "SUBMIT_EDIT_SCHOOL_FORM_FAILURE", "error": ...}
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::mvi::Action;

use super::error::ActionDecodeError;
use super::state::{FailurePayload, School};

/// The six action tags the schools reducer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionTag {
    GetAllSchoolsSuccess,
    GetAllSchoolsFailure,
    SubmitNewSchoolFormSuccess,
    SubmitNewSchoolFormFailure,
    SubmitEditSchoolFormSuccess,
    SubmitEditSchoolFormFailure,
}

impl ActionTag {
    pub const ALL: [ActionTag; 6] = [
        ActionTag::GetAllSchoolsSuccess,
        ActionTag::GetAllSchoolsFailure,
        ActionTag::SubmitNewSchoolFormSuccess,
        ActionTag::SubmitNewSchoolFormFailure,
        ActionTag::SubmitEditSchoolFormSuccess,
        ActionTag::SubmitEditSchoolFormFailure,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionTag::GetAllSchoolsSuccess => "GET_ALL_SCHOOLS_SUCCESS",
            ActionTag::GetAllSchoolsFailure => "GET_ALL_SCHOOLS_FAILURE",
            ActionTag::SubmitNewSchoolFormSuccess => "SUBMIT_NEW_SCHOOL_FORM_SUCCESS",
            ActionTag::SubmitNewSchoolFormFailure => "SUBMIT_NEW_SCHOOL_FORM_FAILURE",
            ActionTag::SubmitEditSchoolFormSuccess => "SUBMIT_EDIT_SCHOOL_FORM_SUCCESS",
            ActionTag::SubmitEditSchoolFormFailure => "SUBMIT_EDIT_SCHOOL_FORM_FAILURE",
        }
    }

    pub fn from_wire(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }

    pub fn is_failure(self) -> bool {
        matches!(
            self,
            ActionTag::GetAllSchoolsFailure
                | ActionTag::SubmitNewSchoolFormFailure
                | ActionTag::SubmitEditSchoolFormFailure
        )
    }
}

impl fmt::Display for ActionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actions that can be dispatched to the schools slice.
#[derive(Debug, Clone, PartialEq)]
pub enum SchoolsAction {
    /// Fetching the full list succeeded.
    GetAllSchoolsSuccess { schools: Vec<School> },

    /// Fetching the full list failed.
    GetAllSchoolsFailure { error: FailurePayload },

    /// The "new school" form was accepted; `school` is the created record.
    SubmitNewSchoolFormSuccess { school: School },

    SubmitNewSchoolFormFailure { error: FailurePayload },

    /// The "edit school" form was accepted; the backend returns the full list.
    SubmitEditSchoolFormSuccess { schools: Vec<School> },

    SubmitEditSchoolFormFailure { error: FailurePayload },

    /// An action meant for some other slice of the store.
    Unrecognized { tag: String },
}

impl Action for SchoolsAction {}

// Mirror of the recognized variants, used only for serde.
#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
enum WireAction {
    GetAllSchoolsSuccess { schools: Vec<School> },
    GetAllSchoolsFailure { error: FailurePayload },
    SubmitNewSchoolFormSuccess { school: School },
    SubmitNewSchoolFormFailure { error: FailurePayload },
    SubmitEditSchoolFormSuccess { schools: Vec<School> },
    SubmitEditSchoolFormFailure { error: FailurePayload },
}

impl From<WireAction> for SchoolsAction {
    fn from(wire: WireAction) -> Self {
        match wire {
            WireAction::GetAllSchoolsSuccess { schools } => Self::GetAllSchoolsSuccess { schools },
            WireAction::GetAllSchoolsFailure { error } => Self::GetAllSchoolsFailure { error },
            WireAction::SubmitNewSchoolFormSuccess { school } => {
                Self::SubmitNewSchoolFormSuccess { school }
            }
            WireAction::SubmitNewSchoolFormFailure { error } => {
                Self::SubmitNewSchoolFormFailure { error }
            }
            WireAction::SubmitEditSchoolFormSuccess { schools } => {
                Self::SubmitEditSchoolFormSuccess { schools }
            }
            WireAction::SubmitEditSchoolFormFailure { error } => {
                Self::SubmitEditSchoolFormFailure { error }
            }
        }
    }
}

impl SchoolsAction {
    /// Recognized tag of this action, `None` for [`SchoolsAction::Unrecognized`].
    pub fn kind(&self) -> Option<ActionTag> {
        match self {
            Self::GetAllSchoolsSuccess { .. } => Some(ActionTag::GetAllSchoolsSuccess),
            Self::GetAllSchoolsFailure { .. } => Some(ActionTag::GetAllSchoolsFailure),
            Self::SubmitNewSchoolFormSuccess { .. } => Some(ActionTag::SubmitNewSchoolFormSuccess),
            Self::SubmitNewSchoolFormFailure { .. } => Some(ActionTag::SubmitNewSchoolFormFailure),
            Self::SubmitEditSchoolFormSuccess { .. } => {
                Some(ActionTag::SubmitEditSchoolFormSuccess)
            }
            Self::SubmitEditSchoolFormFailure { .. } => {
                Some(ActionTag::SubmitEditSchoolFormFailure)
            }
            Self::Unrecognized { .. } => None,
        }
    }

    /// Wire tag, including the tag of an unrecognized action.
    pub fn tag(&self) -> &str {
        match self {
            Self::Unrecognized { tag } => tag.as_str(),
            other => other.kind().map(ActionTag::as_str).unwrap_or_default(),
        }
    }

    /// Decode an action from its wire object.
    ///
    /// Unknown tags are not an error: they decode to `Unrecognized` so the
    /// reducer can pass them through untouched. A known tag without its
    /// payload field is rejected.
    pub fn from_json(value: Value) -> Result<Self, ActionDecodeError> {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ActionDecodeError::MissingType)?
            .to_string();

        if ActionTag::from_wire(&tag).is_none() {
            return Ok(Self::Unrecognized { tag });
        }

        let wire: WireAction = serde_json::from_value(value)
            .map_err(|source| ActionDecodeError::Payload { tag, source })?;
        Ok(wire.into())
    }

    /// Decode an action from a JSON string.
    pub fn from_json_str(text: &str) -> Result<Self, ActionDecodeError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(value)
    }

    /// Encode into the wire object.
    ///
    /// Lossy for [`SchoolsAction::Unrecognized`]: only `{"type": tag}` is
    /// written, since the payload of a foreign action is not kept.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        let wire = match self.clone() {
            Self::GetAllSchoolsSuccess { schools } => WireAction::GetAllSchoolsSuccess { schools },
            Self::GetAllSchoolsFailure { error } => WireAction::GetAllSchoolsFailure { error },
            Self::SubmitNewSchoolFormSuccess { school } => {
                WireAction::SubmitNewSchoolFormSuccess { school }
            }
            Self::SubmitNewSchoolFormFailure { error } => {
                WireAction::SubmitNewSchoolFormFailure { error }
            }
            Self::SubmitEditSchoolFormSuccess { schools } => {
                WireAction::SubmitEditSchoolFormSuccess { schools }
            }
            Self::SubmitEditSchoolFormFailure { error } => {
                WireAction::SubmitEditSchoolFormFailure { error }
            }
            Self::Unrecognized { tag } => return Ok(serde_json::json!({ "type": tag })),
        };
        serde_json::to_value(wire)
    }
}

impl fmt::Display for SchoolsAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GetAllSchoolsSuccess { schools } | Self::SubmitEditSchoolFormSuccess { schools } => {
                write!(f, "{} ({} schools)", self.tag(), schools.len())
            }
            Self::Unrecognized { tag } => write!(f, "{} (ignored)", tag),
            _ => f.write_str(self.tag()),
        }
    }
}
