use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoCommits {
    pub name: String,
    pub commit_count: usize,
}

impl RepoCommits {
    pub fn new(name: impl Into<String>, commit_count: usize) -> Self {
        RepoCommits {
            name: name.into(),
            commit_count,
        }
    }
}

impl Display for RepoCommits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Repo: {} Number of commits: {}",
            self.name, self.commit_count
        )
    }
}
