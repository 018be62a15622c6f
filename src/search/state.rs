// src/search/state.rs
// =============================================================================
// View state for a profile search.
//
// Exactly one state is active at any time:
// - Idle:    nothing searched yet
// - Loading: a search is in flight
// - Error:   the lookup call failed
// - Result:  the user was found (repositories may be empty)
//
// Rust concepts:
// - Enums with data: each variant carries only what it needs to render,
//   so "an error and a stale result at once" cannot be represented
// =============================================================================

use serde::Serialize;
use thiserror::Error;

use crate::github::{ApiError, RepositoryRecord, UserRecord};

/// The failure shown to the user. `Display` is the exact message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(into = "String")]
pub enum SearchError {
    #[error("User not found!")]
    NotFound,

    #[error("Failed to fetch data!")]
    FetchFailed,
}

impl SearchError {
    /// Maps a failed lookup call to what the user sees. Only a 404 means the
    /// user does not exist; everything else is a generic failure.
    pub fn from_lookup(err: &ApiError) -> SearchError {
        if err.is_not_found() {
            SearchError::NotFound
        } else {
            SearchError::FetchFailed
        }
    }
}

impl From<SearchError> for String {
    fn from(err: SearchError) -> String {
        err.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Error {
        message: SearchError,
    },
    Result {
        user: UserRecord,
        repositories: Vec<RepositoryRecord>,
    },
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

/// Enabled flags and label for the query box and the search control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub input_enabled: bool,
    pub search_enabled: bool,
    pub button_label: &'static str,
}

impl Controls {
    pub fn project(state: &ViewState, query: &str) -> Controls {
        let loading = state.is_loading();

        Controls {
            input_enabled: !loading,
            search_enabled: !loading && !query.trim().is_empty(),
            button_label: if loading { "Searching..." } else { "Search" },
        }
    }
}
