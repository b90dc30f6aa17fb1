//! Base trait for actions dispatched into a store.

/// Marker trait for action objects.
///
/// Actions describe something that already happened (a fetch completed,
/// a form submission failed). Reducers consume them to produce new states.
pub trait Action: Send + 'static {}
