//! Model-View-Intent (MVI) primitives shared by every store slice.
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                  │
//!    └──────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of one slice of the store
//! - **Action**: a system event produced outside the store (fetch results,
//!   form submissions)
//! - **Reducer**: pure function that folds an action into the next state

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::StoreState;
