use super::repo_commits::RepoCommits;
use crate::{
    config::Config,
    http::{self, HttpClient},
};
use futures::{stream, StreamExt};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::env;

pub static GITHUB_TOKEN: Lazy<Option<String>> = Lazy::new(|| {
    env::var("GITHUB_TOKEN")
        .ok()
        .filter(|token| !token.is_empty())
});

pub struct GithubClient {
    http: HttpClient,
    api_url: String,
    token: Option<String>,
    concurrency: usize,
}

impl GithubClient {
    pub fn new(config: &Config) -> Result<Self, http::Error> {
        Self::with_token(config, GITHUB_TOKEN.clone())
    }

    pub fn with_token(config: &Config, token: Option<String>) -> Result<Self, http::Error> {
        Ok(GithubClient {
            http: HttpClient::new(config)?,
            api_url: config.api_url.trim_end_matches('/').to_owned(),
            token,
            concurrency: config.concurrency(),
        })
    }

    /// Lists the repositories of `user_id` along with their commit counts.
    ///
    /// Never fails: an unknown user, an error status, a transport failure or a
    /// malformed listing all give an empty list. A repository whose commits
    /// cannot be fetched is still listed, with a count of 0. Listing entries
    /// without a string `name` are skipped, since there is no repository to
    /// ask commits for. Only the first page of each listing is read.
    pub async fn lookup(&self, user_id: &str) -> Vec<RepoCommits> {
        let names = match self.list_repositories(user_id).await {
            Ok(names) => names,
            Err(e) => {
                log::warn!("Cannot list repositories of {}: {}", user_id, e);
                return vec![];
            }
        };

        log::info!("Found {} repositories for {}", names.len(), user_id);

        let client = self;
        // buffered keeps the listing order whatever the concurrency
        stream::iter(names)
            .map(move |name| async move {
                let commit_count = client.count_commits(user_id, &name).await;
                RepoCommits::new(name, commit_count)
            })
            .buffered(self.concurrency)
            .collect()
            .await
    }

    async fn list_repositories(&self, user_id: &str) -> Result<Vec<String>, http::Error> {
        let uri = format!("{}/users/{}/repos", self.api_url, user_id);

        let payload: Value = self.http.get_json(&uri, self.token.as_deref()).await?;

        let Value::Array(repos) = payload else {
            return Err(http::Error::Malformed {
                expected: "a list of repositories",
            });
        };

        let names = repos
            .into_iter()
            .filter_map(|repo| match repo.get("name").and_then(Value::as_str) {
                Some(name) => Some(name.to_owned()),
                None => {
                    log::warn!("Skipping repository entry without a name: {}", repo);
                    None
                }
            })
            .collect();

        Ok(names)
    }

    async fn count_commits(&self, user_id: &str, repo: &str) -> usize {
        match self.fetch_commit_count(user_id, repo).await {
            Ok(count) => count,
            Err(e) => {
                log::warn!("Cannot count commits of {}/{}: {}", user_id, repo, e);
                0
            }
        }
    }

    async fn fetch_commit_count(&self, user_id: &str, repo: &str) -> Result<usize, http::Error> {
        let uri = format!("{}/repos/{}/{}/commits", self.api_url, user_id, repo);

        let payload: Value = self.http.get_json(&uri, self.token.as_deref()).await?;

        match payload.as_array() {
            Some(commits) => Ok(commits.len()),
            None => {
                log::debug!("Commits of {}/{} are not a list, counting 0", user_id, repo);
                Ok(0)
            }
        }
    }
}
