pub mod github_client;
mod repo_commits;

pub use repo_commits::RepoCommits;

use crate::config::Config;
use anyhow::{Context, Result};
use github_client::GithubClient;

/// Lists `user_id`'s repositories with their commit counts, see [`GithubClient::lookup`].
///
/// Only building the HTTP client can fail; network conditions never do.
pub async fn lookup(config: &Config, user_id: &str) -> Result<Vec<RepoCommits>> {
    let client = GithubClient::new(config).context("Cannot build the github client")?;

    Ok(client.lookup(user_id).await)
}
