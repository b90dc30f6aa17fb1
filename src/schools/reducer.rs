//! Reducer for the schools slice.

use crate::mvi::Reducer;

use super::action::SchoolsAction;
use super::state::SchoolsState;

/// Reducer for schools state transitions.
///
/// Successes touch only `schools`, failures touch only `error`. The error
/// is never cleared by a later success.
pub struct SchoolsReducer;

impl Reducer for SchoolsReducer {
    type State = SchoolsState;
    type Action = SchoolsAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            SchoolsAction::GetAllSchoolsSuccess { schools }
            | SchoolsAction::SubmitEditSchoolFormSuccess { schools } => SchoolsState {
                schools,
                error: state.error,
            },

            SchoolsAction::SubmitNewSchoolFormSuccess { school } => {
                let mut schools = state.schools;
                schools.push(school);
                SchoolsState {
                    schools,
                    error: state.error,
                }
            }

            SchoolsAction::GetAllSchoolsFailure { error }
            | SchoolsAction::SubmitNewSchoolFormFailure { error }
            | SchoolsAction::SubmitEditSchoolFormFailure { error } => SchoolsState {
                schools: state.schools,
                error: Some(error),
            },

            SchoolsAction::Unrecognized { .. } => state,
        }
    }
}
