use crate::codeforces::model::*;
use async_trait::async_trait;
use reqwest::{self, Client, Url};
use serde::de::DeserializeOwned;
use serde_json::{self, Value};
use std::time::Duration;
use thiserror::Error;

type Result<T> = std::result::Result<T, CodeforcesApiError>;

#[derive(Debug, Error)]
pub enum CodeforcesApiError {
    #[error("failed to request to Codeforces API")]
    RequestError(#[from] reqwest::Error),
    #[error("failed to deserialize JSON data")]
    DeserializeError(#[from] serde_json::Error),
    #[error("invalid Codeforces API url given")]
    InvalidUrlError(#[from] url::ParseError),
    #[error("Codeforces API returned FAILED status cause [{0}]")]
    FailedStatusError(String),
    #[error("{0}")]
    UnexpectedError(String),
}

#[async_trait]
pub trait CodeforcesApi {
    /// `user.status`: every submission of the handle.
    async fn user_status(&self, handle: &str) -> Result<Vec<Submission>>;
    /// `contest.status`: the handle's entries in one contest.
    async fn contest_status(&self, contest_id: i64, handle: &str) -> Result<Vec<ContestEntry>>;
    /// `contest.list`
    async fn contest_list(&self, gym: bool) -> Result<Vec<Contest>>;
}

pub struct StandardCodeforcesClient {
    user_status_url: Url,
    contest_status_url: Url,
    contest_list_url: Url,
    client: Client,
}

impl StandardCodeforcesClient {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(api_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let user_status_url = base_url.join("user.status")?;
        let contest_status_url = base_url.join("contest.status")?;
        let contest_list_url = base_url.join("contest.list")?;

        let client = Client::builder().gzip(true).timeout(timeout).build()?;
        Ok(StandardCodeforcesClient {
            user_status_url,
            contest_status_url,
            contest_list_url,
            client,
        })
    }

    async fn get<T>(&self, url: &Url, params: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("request to {} with {:?}", url, params);
        let res = self.client.get(url.clone()).query(params).send().await?;

        match res.error_for_status_ref() {
            Ok(_) => {
                let body = res.bytes().await?;
                let body: CodeforcesResponse<T> = serde_json::from_slice(&body)?;
                match (body.status, body.result) {
                    (ResponseStatus::Ok, Some(result)) => Ok(result),
                    (ResponseStatus::Ok, None) => Err(CodeforcesApiError::UnexpectedError(
                        format!("no result in response from {}", url),
                    )),
                    (ResponseStatus::Failed, _) => Err(CodeforcesApiError::FailedStatusError(
                        body.comment.unwrap_or_default(),
                    )),
                }
            }
            Err(e) => {
                // Codeforces sends FAILED envelopes with HTTP 400, so keep the comment if present.
                let body = res.bytes().await.unwrap_or_default();
                let comment = serde_json::from_slice::<CodeforcesResponse<Value>>(&body)
                    .ok()
                    .and_then(|body| body.comment);
                match comment {
                    Some(comment) => Err(CodeforcesApiError::FailedStatusError(comment)),
                    None => Err(CodeforcesApiError::UnexpectedError(format!(
                        "unexpected error [{}]",
                        e
                    ))),
                }
            }
        }
    }
}

#[async_trait]
impl CodeforcesApi for StandardCodeforcesClient {
    async fn user_status(&self, handle: &str) -> Result<Vec<Submission>> {
        self.get(&self.user_status_url, &[("handle", handle.to_string())])
            .await
    }

    async fn contest_status(&self, contest_id: i64, handle: &str) -> Result<Vec<ContestEntry>> {
        self.get(
            &self.contest_status_url,
            &[
                ("contestId", contest_id.to_string()),
                ("handle", handle.to_string()),
            ],
        )
        .await
    }

    async fn contest_list(&self, gym: bool) -> Result<Vec<Contest>> {
        self.get(&self.contest_list_url, &[("gym", gym.to_string())])
            .await
    }
}
