mod response;

use response::{AsyncFrom, Response};

use crate::config::Config;
use reqwest::{
    header::{ACCEPT, USER_AGENT},
    Client, RequestBuilder, StatusCode,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let mut builder = Client::builder();

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(HttpClient {
            client: builder.build().map_err(Error::Transport)?,
            user_agent: config.user_agent.to_owned(),
        })
    }

    /// Sends a GET with the default headers and decodes the JSON body
    pub async fn get_json<T>(&self, url: &str, token: Option<&str>) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .default_headers(&self.user_agent, token)
            .send()
            .await
            .map_err(Error::Transport)?;

        Response::<T>::async_from(response).await.collect()
    }
}

pub trait Headers {
    fn default_headers(self, user_agent: &str, token: Option<&str>) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, user_agent: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(USER_AGENT, user_agent);

        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("resource not found")]
    NotFound,
    #[error("unexpected status {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("failed to parse response: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("unexpected payload shape, expected {expected}")]
    Malformed { expected: &'static str },
}
