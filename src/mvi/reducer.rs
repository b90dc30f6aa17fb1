//! Reducer trait for MVI architecture.

use super::action::Action;
use super::state::StoreState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: StoreState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// Must not panic, log or perform I/O.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;

    /// Like [`Reducer::reduce`], starting from the default state when no
    /// state exists yet (first dispatch into a fresh store).
    fn reduce_or_default(state: Option<Self::State>, action: Self::Action) -> Self::State {
        Self::reduce(state.unwrap_or_default(), action)
    }

    /// Fold a sequence of actions into `state`, in order.
    fn reduce_all<I>(state: Self::State, actions: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Action>,
    {
        actions.into_iter().fold(state, Self::reduce)
    }
}
