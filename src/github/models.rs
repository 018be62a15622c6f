// src/github/models.rs
// =============================================================================
// Records returned by the GitHub REST API.
//
// Only the fields the view consumes are declared. serde ignores every other
// field in the response body, so GitHub can add fields without breaking us.
//
// Rust concepts:
// - Option<T>: fields GitHub may send as null or leave out entirely
// - Derive macros: Deserialize for the API, Serialize for --json output
// =============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of repositories requested and shown per search.
pub const REPO_PAGE_SIZE: usize = 5;

/// A user profile from `GET /users/{login}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub html_url: Option<String>,
}

impl UserRecord {
    /// The display name, falling back to the login when the name is
    /// missing or empty.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.login,
        }
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref().filter(|bio| !bio.trim().is_empty())
    }
}

/// A repository from `GET /users/{login}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub id: u64,
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
}

impl RepositoryRecord {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }
}

// Keeps the upstream order, drops repeated ids and caps the list at
// REPO_PAGE_SIZE. The id is the list key, so it has to be unique.
pub fn bounded_repositories(repos: Vec<RepositoryRecord>) -> Vec<RepositoryRecord> {
    let mut seen = HashSet::new();

    repos
        .into_iter()
        .filter(|repo| seen.insert(repo.id))
        .take(REPO_PAGE_SIZE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(id: u64, name: &str) -> RepositoryRecord {
        RepositoryRecord {
            id,
            name: name.to_string(),
            html_url: format!("https://github.com/octocat/{}", name),
            description: None,
        }
    }

    #[test]
    fn test_user_with_missing_optional_fields() {
        let body = r#"{
            "login": "octocat",
            "name": null,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "public_repos": 8,
            "followers": 4000,
            "following": 9,
            "site_admin": false
        }"#;
        let user: UserRecord = serde_json::from_str(body).unwrap();

        assert_eq!(user.login, "octocat");
        assert_eq!(user.display_name(), "octocat");
        assert_eq!(user.bio(), None);
        assert_eq!(user.html_url, None);
        assert_eq!(user.public_repos, 8);
    }

    #[test]
    fn test_display_name_prefers_name() {
        let user = UserRecord {
            login: "octocat".to_string(),
            name: Some("The Octocat".to_string()),
            avatar_url: String::new(),
            bio: Some("   ".to_string()),
            public_repos: 0,
            followers: 0,
            following: 0,
            html_url: None,
        };
        assert_eq!(user.display_name(), "The Octocat");
        assert_eq!(user.bio(), None);
    }

    #[test]
    fn test_repository_ignores_extra_fields() {
        let body = r#"[{
            "id": 1296269,
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "html_url": "https://github.com/octocat/Hello-World",
            "description": "My first repository",
            "fork": false
        }]"#;
        let repos: Vec<RepositoryRecord> = serde_json::from_str(body).unwrap();

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].description(), Some("My first repository"));
    }

    #[test]
    fn test_bounded_repositories_keeps_order_and_drops_duplicates() {
        let repos = vec![
            repo(3, "c"),
            repo(1, "a"),
            repo(3, "c-again"),
            repo(2, "b"),
            repo(4, "d"),
            repo(5, "e"),
            repo(6, "f"),
        ];
        let names: Vec<_> = bounded_repositories(repos)
            .into_iter()
            .map(|r| r.name)
            .collect();

        assert_eq!(names, vec!["c", "a", "b", "d", "e"]);
    }
}
