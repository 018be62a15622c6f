// src/github/mod.rs
// =============================================================================
// This module handles everything that crosses the network.
//
// Submodules:
// - client: the ProfileApi seam and its reqwest implementation
// - models: the user and repository records we read from the API
// - error: what can go wrong on the wire
// =============================================================================

mod client;
mod error;
mod models;

#[cfg(test)]
pub(crate) mod stub;

pub use client::{GitHubClient, ProfileApi};
pub use error::ApiError;
pub use models::{bounded_repositories, RepositoryRecord, UserRecord};
