//! Schools slice of the client store.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - list of schools plus the last failure
//! - `action.rs` - fetch/create/edit outcomes and their JSON form
//! - `reducer.rs` - state transitions

mod action;
mod error;
mod reducer;
mod state;

pub use action::{ActionTag, SchoolsAction};
pub use error::ActionDecodeError;
pub use reducer::SchoolsReducer;
pub use state::{FailurePayload, School, SchoolsState};
