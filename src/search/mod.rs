// src/search/mod.rs
// =============================================================================
// The profile search component: its view state and the controller that
// drives it.
// =============================================================================

mod controller;
mod state;

pub use controller::{ProfileSearch, Submission};
pub use state::{Controls, SearchError, ViewState};
