use super::Error;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

pub enum Response<T> {
    Success(T),
    Error(Error),
}

impl<T> Response<T> {
    pub fn collect(self) -> Result<T, Error> {
        match self {
            Response::Success(payload) => Ok(payload),
            Response::Error(error) => Err(error),
        }
    }
}

pub(crate) trait AsyncFrom<T>: Sized {
    async fn async_from(value: T) -> Self;
}

impl<T> AsyncFrom<reqwest::Response> for Response<T>
where
    T: DeserializeOwned,
{
    async fn async_from(value: reqwest::Response) -> Self {
        let status = value.status();
        log::debug!("{} responded with {}", value.url(), status);

        let text = match value.text().await {
            Ok(text) => text,
            Err(err) => return Response::Error(Error::Transport(err)),
        };

        if status == StatusCode::NOT_FOUND {
            return Response::Error(Error::NotFound);
        }

        if !status.is_success() {
            return Response::Error(Error::Status {
                status,
                message: text,
            });
        }

        match serde_json::from_str::<T>(&text) {
            Ok(payload) => Response::Success(payload),
            Err(err) => Response::Error(Error::Parse(err)),
        }
    }
}
