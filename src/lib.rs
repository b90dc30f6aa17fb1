//! Client-side store for the schools list.
//!
//! The [`schools::SchoolsReducer`] folds fetch/create/edit outcomes into a
//! [`schools::SchoolsState`]; [`store::Store`] holds the current snapshot
//! and fans changes out to subscribers.

pub mod action_log;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod replay;
pub mod schools;
pub mod store;
