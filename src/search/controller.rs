// src/search/controller.rs
// =============================================================================
// ProfileSearch owns the search lifecycle.
//
// How a submission runs:
// 1. Blank queries are rejected without touching the state
// 2. Idle/Error/Result -> Loading, atomically (a second submit is ignored
//    while one is in flight)
// 3. Lookup call; on failure -> Error and stop
// 4. Repository call; any failure here just means "no repositories"
// 5. -> Result
//
// Every state change is published on a tokio watch channel so a renderer
// can redraw while the controller awaits the network.
// =============================================================================

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::state::{SearchError, ViewState};
use crate::github::{bounded_repositories, ProfileApi};

/// Why a submission did not start a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    /// The query was empty or whitespace only.
    BlankQuery,
    /// Another search is still in flight.
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Ignored(Ignored),
    /// The search ran to completion and landed in this state.
    Settled(ViewState),
}

pub struct ProfileSearch<A> {
    api: A,
    state: watch::Sender<ViewState>,
}

impl<A: ProfileApi> ProfileSearch<A> {
    pub fn new(api: A) -> Self {
        let (state, _) = watch::channel(ViewState::Idle);
        Self { api, state }
    }

    /// A receiver that sees every published state, starting with the current one.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Runs one search for `query`.
    ///
    /// The switch to `Loading` happens before the first network call is
    /// made, and clears whatever error or result was shown before.
    pub async fn submit(&self, query: &str) -> Submission {
        // The login is the trimmed query; case is left exactly as typed
        let login = query.trim();
        if login.is_empty() {
            debug!("blank query ignored");
            return Submission::Ignored(Ignored::BlankQuery);
        }

        // Check-and-set in one step: the watch channel holds its lock while
        // the closure runs, so two submissions can never both see "not loading".
        // Returning true notifies subscribers that Loading is now showing.
        let admitted = self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            *state = ViewState::Loading;
            true
        });
        if !admitted {
            debug!(login, "search already in flight, submission ignored");
            return Submission::Ignored(Ignored::InFlight);
        }

        info!(login, "searching");
        let settled = self.run(login).await;

        // Publishing Error or Result ends the in-flight period
        self.state.send_replace(settled.clone());

        Submission::Settled(settled)
    }

    async fn run(&self, login: &str) -> ViewState {
        // First call: the lookup. Any failure here ends the search.
        let user = match self.api.fetch_user(login).await {
            Ok(user) => user,
            Err(err) => {
                let message = SearchError::from_lookup(&err);
                warn!(login, error = %err, "user lookup failed");
                return ViewState::Error { message };
            }
        };
        debug!(login = %user.login, "user record received");

        // Same login as the lookup call: the trimmed query, case as typed.
        let repositories = match self.api.fetch_repositories(login).await {
            // Upstream order is kept; only duplicates and overflow are dropped
            Ok(repos) => bounded_repositories(repos),
            Err(err) => {
                warn!(login, error = %err, "repository lookup failed, showing none");
                Vec::new()
            }
        };

        info!(login = %user.login, repositories = repositories.len(), "search finished");
        ViewState::Result { user, repositories }
    }
}
