use anyhow::{Context, Result};
use serde::Deserialize;
use std::{io::ErrorKind, path::Path, time::Duration};

const DEFAULT_CONFIG_FILE_NAME: &str = "repotri.yaml";
const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_USER_AGENT: &str = "repotri";
const DEFAULT_CONCURRENCY: usize = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_api_url")]
    pub api_url: String,
    #[serde(default = "Config::default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default = "Config::default_concurrency")]
    pub concurrency: usize,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    /// Loads the config from `path`, or from `repotri.yaml` when no path is given.
    ///
    /// A missing default file yields the defaults, a missing explicit file is an error.
    pub async fn load(path: Option<&Path>) -> Result<Config> {
        let config_string = match path {
            Some(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Cannot read config file {}", path.display()))?,
            None => match tokio::fs::read_to_string(DEFAULT_CONFIG_FILE_NAME).await {
                Ok(content) => content,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    return Ok(Config::default());
                }
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("Cannot read {}", DEFAULT_CONFIG_FILE_NAME))
                }
            },
        };

        Config::parse(&config_string)
    }

    pub fn parse(content: &str) -> Result<Config> {
        // an empty file deserializes to null
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let config = serde_yaml::from_str::<Config>(content).context("Invalid config file")?;

        Ok(config)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency.max(1)
    }

    fn default_api_url() -> String {
        DEFAULT_API_URL.to_owned()
    }

    fn default_user_agent() -> String {
        DEFAULT_USER_AGENT.to_owned()
    }

    fn default_concurrency() -> usize {
        DEFAULT_CONCURRENCY
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: Config::default_api_url(),
            user_agent: Config::default_user_agent(),
            timeout_secs: None,
            concurrency: Config::default_concurrency(),
            log_level: None,
        }
    }
}
