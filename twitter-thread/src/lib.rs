mod download_images;
mod entry;
mod error;
mod markdown;
mod progress_bar;
#[cfg(test)]
mod test_server;
mod thread;
pub mod tweet;
mod twitter_client;

pub use download_images::download_images;
pub use entry::{Image, ThreadEntry};
pub use error::ThreadError;
pub use markdown::{generate_markdown, MarkdownOptions};
pub use progress_bar::{NoProgress, ProgressBar};
pub use thread::{fetch_threads, sort_thread, walk_thread, DeletedTweetGap, Thread, TweetUrl};
pub use twitter_client::{TweetLookup, TwitterClient};
