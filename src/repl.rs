// src/repl.rs
// =============================================================================
// The interactive session.
//
// Each line typed replaces the query box content and presses Enter.
//   :search (or :s)  press the search control with the current query
//   :quit   (or :q)  leave
//
// Searches run on their own task so input keeps being read while one is in
// flight. Lines that arrive during a search are ignored, the same way a
// disabled input box ignores typing. The view is redrawn from the watch
// channel every time the controller publishes a new state.
// =============================================================================

use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::github::ProfileApi;
use crate::render::render;
use crate::search::{Controls, ProfileSearch, Submission, ViewState};

#[derive(Debug, PartialEq, Eq)]
enum Input {
    /// Text typed into the query box, followed by Enter
    Enter(String),
    /// The search control was activated
    Search,
    Quit,
}

fn parse_input(line: &str) -> Input {
    match line.trim() {
        ":q" | ":quit" => Input::Quit,
        ":s" | ":search" => Input::Search,
        _ => Input::Enter(line.to_string()),
    }
}

pub async fn run_session<A, R, W>(search: Arc<ProfileSearch<A>>, input: R, out: &mut W) -> Result<()>
where
    A: ProfileApi + 'static,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    info!("interactive session started");

    // Every state the controller publishes arrives here
    let mut states = search.subscribe();
    let mut lines = input.lines();

    // The query box content; only changed by typing a line
    let mut query = String::new();
    let mut in_flight: Option<JoinHandle<Submission>> = None;

    // Set when we drew the Loading line ourselves at spawn time, so the
    // same Loading coming back from the channel is not drawn twice
    let mut loading_shown = false;

    writeln!(out, "GitHub User Search")?;
    writeln!(out, "Type a login and press Enter. :search repeats, :quit exits.")?;
    prompt(out, &search.state(), &query)?;

    loop {
        // Wait for whichever comes first: a new state or a new line
        tokio::select! {
            changed = states.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = states.borrow_and_update().clone();
                if state.is_loading() && loading_shown {
                    continue;
                }
                if !state.is_loading() {
                    loading_shown = false;
                }
                show(out, &state, &query)?;
            }
            line = lines.next_line() => {
                // None means stdin was closed (Ctrl-D or end of a pipe)
                let Some(line) = line.context("Failed to read input")? else {
                    break;
                };

                let input = parse_input(&line);
                if input == Input::Quit {
                    return Ok(());
                }

                // A task that was spawned but not yet polled has not
                // published Loading, so it counts as in flight too
                let state = search.state();
                let spawned_pending = in_flight.as_ref().is_some_and(|task| !task.is_finished());
                if !Controls::project(&state, &query).input_enabled || spawned_pending {
                    debug!("input ignored while a search is in flight");
                    writeln!(out, "(still searching, input ignored)")?;
                    continue;
                }

                // Enter replaces the query; :search keeps the current one
                if let Input::Enter(text) = input {
                    query = text;
                }

                // Same rule as a disabled search button: blank means nothing happens
                if !Controls::project(&state, &query).search_enabled {
                    prompt(out, &state, &query)?;
                    continue;
                }

                // Draw a settled state that has not been shown yet before
                // the new search starts
                if states.has_changed().unwrap_or(false) {
                    let pending = states.borrow_and_update().clone();
                    write!(out, "{}", render(&pending))?;
                }

                let search = search.clone();
                let submitted = query.clone();
                in_flight = Some(tokio::spawn(async move { search.submit(&submitted).await }));

                // The controller enters Loading before its first call, so
                // draw it now rather than waiting for the task to be polled
                show(out, &ViewState::Loading, &query)?;
                loading_shown = true;
            }
        }
    }

    // Input closed. Let a running search finish so its outcome is shown.
    if let Some(task) = in_flight.take() {
        task.await.context("Search task failed")?;
        if states.has_changed().unwrap_or(false) {
            let state = states.borrow_and_update().clone();
            if !state.is_loading() {
                write!(out, "{}", render(&state))?;
            }
        }
    }
    writeln!(out)?;
    out.flush()?;

    Ok(())
}

fn show<W: Write>(out: &mut W, state: &ViewState, query: &str) -> Result<()> {
    write!(out, "{}", render(state))?;
    if state.is_loading() {
        out.flush()?;
        return Ok(());
    }
    prompt(out, state, query)
}

fn prompt<W: Write>(out: &mut W, state: &ViewState, query: &str) -> Result<()> {
    let controls = Controls::project(state, query);
    write!(out, "[{}] > ", controls.button_label)?;
    out.flush()?;
    Ok(())
}
