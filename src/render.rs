// src/render.rs
// =============================================================================
// Turns a view state into terminal text.
//
// render() is a pure function: same state in, same text out. It never looks
// at anything but the state it is given, so an error and an old result can
// never be printed together.
// =============================================================================

use crate::github::{RepositoryRecord, UserRecord};
use crate::search::ViewState;

pub fn render(state: &ViewState) -> String {
    match state {
        ViewState::Idle => String::new(),
        ViewState::Loading => "⏳ Loading...\n".to_string(),
        ViewState::Error { message } => format!("❌ {}\n", message),
        ViewState::Result { user, repositories } => render_profile(user, repositories),
    }
}

fn render_profile(user: &UserRecord, repositories: &[RepositoryRecord]) -> String {
    let mut lines = vec![
        format!("🖼  {}'s avatar: {}", user.login, user.avatar_url),
        user.display_name().to_string(),
        format!("@{}", user.login),
    ];

    if let Some(bio) = user.bio() {
        lines.push(bio.to_string());
    }

    lines.push(String::new());
    lines.push(format!(
        "{} repos   {} followers   {} following",
        user.public_repos, user.followers, user.following
    ));

    if !repositories.is_empty() {
        lines.push(String::new());
        lines.push("Latest repositories:".to_string());
        for repo in repositories {
            lines.push(format!("  • {}  {}", repo.name, repo.html_url));
            if let Some(description) = repo.description() {
                lines.push(format!("    {}", description));
            }
        }
    }

    if let Some(url) = &user.html_url {
        lines.push(String::new());
        lines.push(format!("🔗 {}", url));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
