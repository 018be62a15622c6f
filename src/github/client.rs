// src/github/client.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Two calls are made, always one after the other:
// - GET /users/{login}                              (lookup call)
// - GET /users/{login}/repos?per_page=5&sort=created (repository call)
//
// The ProfileApi trait is the seam between the search controller and the
// network. GitHubClient is the real implementation; tests plug in fakes.
//
// Rust concepts:
// - Traits: an interface the controller depends on instead of reqwest
// - async-trait: lets a trait declare async methods that return Send futures
// - Generics with DeserializeOwned: one helper fetches any JSON type
// =============================================================================

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::error::ApiError;
use super::models::{RepositoryRecord, UserRecord, REPO_PAGE_SIZE};
use crate::config::Config;

/// The two reads the search controller needs from GitHub.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn fetch_user(&self, login: &str) -> Result<UserRecord, ApiError>;

    async fn fetch_repositories(&self, login: &str) -> Result<Vec<RepositoryRecord>, ApiError>;
}

/// reqwest-backed GitHub client.
pub struct GitHubClient {
    http: Client,
    base: Url,
}

impl GitHubClient {
    /// Creates a client with the headers GitHub requires and the configured
    /// request timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("gh-profile/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base: config.api_url.clone(),
        })
    }

    fn user_url(&self, login: &str) -> Url {
        self.endpoint(&["users", login])
    }

    fn repositories_url(&self, login: &str) -> Url {
        let mut url = self.endpoint(&["users", login, "repos"]);
        url.query_pairs_mut()
            .append_pair("per_page", &REPO_PAGE_SIZE.to_string())
            .append_pair("sort", "created");
        url
    }

    // Appends path segments to the base URL. Each segment is percent-encoded,
    // so a login can never escape its own segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // Config only accepts http(s) URLs, which always have a path.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(%url, "GET");

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "non-success response");
            return Err(ApiError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ProfileApi for GitHubClient {
    async fn fetch_user(&self, login: &str) -> Result<UserRecord, ApiError> {
        self.get_json(self.user_url(login)).await
    }

    async fn fetch_repositories(&self, login: &str) -> Result<Vec<RepositoryRecord>, ApiError> {
        self.get_json(self.repositories_url(login)).await
    }
}
