//! State Management
//!
//! Global application state and the view models returned by the API.

pub mod global;

pub use global::{provide_global_state, GlobalState};
