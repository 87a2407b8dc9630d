use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, ClientBuilder, StatusCode};

use crate::tweet::Tweet;
use crate::ThreadError;

static LOOKUP_URL: &str = "https://api.twitter.com/1.1/statuses/show";

/// Fetch a single tweet by ID.
///
/// Implementations return [`ThreadError::TweetNotFound`] when the tweet does not
/// exist or is no longer accessible, and [`ThreadError::RequestFailed`] for any
/// other failure. No retries are attempted.
#[async_trait]
pub trait TweetLookup {
    async fn lookup(&self, id: &str) -> Result<Tweet, ThreadError>;
}

pub struct TwitterClient {
    client: Client,
    lookup_url: String,
}

impl TwitterClient {
    pub fn new(bearer: &str) -> Result<Self, ThreadError> {
        Self::with_lookup_url(bearer, LOOKUP_URL)
    }

    pub(crate) fn with_lookup_url(bearer: &str, lookup_url: &str) -> Result<Self, ThreadError> {
        if bearer.is_empty() {
            return Err(ThreadError::BuildClient {
                msg: "empty bearer token".to_owned(),
            });
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", bearer)).map_err(|e| {
            ThreadError::BuildClient {
                msg: e.to_string(),
            }
        })?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = ClientBuilder::new()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ThreadError::BuildClient { msg: e.to_string() })?;

        Ok(Self {
            client,
            lookup_url: lookup_url.trim_end_matches('/').to_owned(),
        })
    }
}

#[async_trait]
impl TweetLookup for TwitterClient {
    async fn lookup(&self, id: &str) -> Result<Tweet, ThreadError> {
        let url = format!("{}/{}.json", self.lookup_url, id);
        let err_func = |e: reqwest::Error| ThreadError::RequestFailed {
            id: id.to_owned(),
            status: e.status(),
            msg: e.to_string(),
        };

        let resp = self
            .client
            .get(&url)
            .query(&[("tweet_mode", "extended"), ("include_ext_alt_text", "true")])
            .send()
            .await
            .map_err(err_func)?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(ThreadError::TweetNotFound { id: id.to_owned() });
        }

        let text = resp
            .error_for_status()
            .map_err(err_func)?
            .text()
            .await
            .map_err(err_func)?;

        serde_json::from_str(&text).map_err(|e| ThreadError::ParseTweet {
            id: id.to_owned(),
            msg: e.to_string(),
        })
    }
}
