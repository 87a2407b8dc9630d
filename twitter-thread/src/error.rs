use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThreadError {
    #[error("this doesn't look like a tweet url: \"{url}\"")]
    InvalidUrl { url: String },

    #[error("unable to create twitter client: {msg}")]
    BuildClient { msg: String },

    #[error("cannot find requested tweet: {id}")]
    TweetNotFound { id: String },

    #[error("unable to fetch tweet: {id}, {msg}")]
    RequestFailed {
        id: String,
        status: Option<StatusCode>,
        msg: String,
    },

    #[error("unable to parse tweet: {id}, {msg}")]
    ParseTweet { id: String, msg: String },

    #[error("unable to parse creation time of tweet: {id}, {created_at:?}")]
    InvalidTimestamp { id: String, created_at: String },

    #[error("unable to download image: {image_url}, {msg}")]
    DownloadImage { image_url: String, msg: String },

    #[error("unable to write image: {path:?}, {msg}")]
    WriteImage { path: PathBuf, msg: String },
}
