//! Base trait for store state.

/// Marker trait for state snapshots held by a store.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq for detecting changes)
/// - Shareable across threads as `Arc` snapshots
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}
