use std::fmt;
use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use crate::entry::ThreadEntry;
use crate::twitter_client::TweetLookup;
use crate::{ProgressBar, ThreadError};

/// Tweet URL split into the part shared by every tweet of the author and the tweet ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetUrl {
    prefix: String,
    pub id: String,
}

impl TweetUrl {
    pub fn parse(url: &str) -> Result<Self, ThreadError> {
        static RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"(?:^|[/.])((?:twitter|x)\.com/\w+/status/)(\d+)").unwrap()
        });

        let cap = RE.captures(url).ok_or_else(|| ThreadError::InvalidUrl {
            url: url.to_owned(),
        })?;

        Ok(Self {
            prefix: format!("https://{}", &cap[1]),
            id: cap[2].to_owned(),
        })
    }

    /// URL of another tweet by the same author
    pub fn with_id(&self, id: &str) -> String {
        format!("{}{}", self.prefix, id)
    }
}

impl fmt::Display for TweetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.id)
    }
}

/// A reply chain that ended at a deleted or inaccessible tweet instead of the thread root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedTweetGap {
    pub deleted_id: String,
    pub deleted_url: String,
    pub last_good_id: String,
    pub resume_url: String,
}

impl fmt::Display for DeletedTweetGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Thread contains a deleted tweet ({}). The earliest tweet collected is {}. \
             If the thread contains earlier tweets, run this again using the next \
             non-deleted tweet before it.",
            self.deleted_url, self.resume_url
        )
    }
}

#[derive(Debug)]
pub struct Thread {
    /// Newest tweet first, in reply chain order
    pub entries: Vec<ThreadEntry>,
    pub gap: Option<DeletedTweetGap>,
}

/// Walk the reply chain backwards from the tweet at `url` until the thread root,
/// or until a deleted tweet is hit after at least one tweet was collected.
pub async fn walk_thread<L, PB>(
    lookup: &L,
    url: &str,
    description: &str,
) -> Result<Thread, ThreadError>
where
    L: TweetLookup + ?Sized,
    PB: ProgressBar,
{
    let tweet_url = TweetUrl::parse(url)?;

    let pb = PB::init(None, description);
    let result = walk(lookup, &tweet_url, &pb).await;
    match &result {
        Ok(Thread { gap: Some(gap), .. }) => {
            pb.warn(&format!("deleted tweet {}", gap.deleted_id))
        }
        _ => pb.destroy(),
    }

    result
}

async fn walk<L, PB>(lookup: &L, tweet_url: &TweetUrl, pb: &PB) -> Result<Thread, ThreadError>
where
    L: TweetLookup + ?Sized,
    PB: ProgressBar,
{
    let mut entries: Vec<ThreadEntry> = vec![];
    let mut next_id = Some(tweet_url.id.clone());

    while let Some(id) = next_id.take() {
        let tweet = match lookup.lookup(&id).await {
            Ok(tweet) => tweet,
            Err(ThreadError::TweetNotFound { id }) => {
                // Nothing to assemble if the requested tweet itself is gone
                let Some(last) = entries.last() else {
                    return Err(ThreadError::TweetNotFound { id });
                };
                let gap = DeletedTweetGap {
                    deleted_url: tweet_url.with_id(&id),
                    deleted_id: id,
                    resume_url: tweet_url.with_id(&last.id),
                    last_good_id: last.id.clone(),
                };
                return Ok(Thread {
                    entries,
                    gap: Some(gap),
                });
            }
            Err(e) => return Err(e),
        };

        let entry = ThreadEntry::from_tweet(tweet)?;
        next_id = entry.previous_id.clone();
        entries.push(entry);
        pb.increment();
    }

    Ok(Thread { entries, gap: None })
}

/// Walk every thread in order, then return all collected tweets oldest first.
///
/// URLs are processed one at a time; the first failure aborts the remaining URLs.
pub async fn fetch_threads<L, PB>(
    lookup: &L,
    urls: &[impl AsRef<str>],
) -> Result<Vec<ThreadEntry>, ThreadError>
where
    L: TweetLookup + ?Sized,
    PB: ProgressBar,
{
    log::info!("Loading tweets...");

    let mut all_entries = vec![];
    for (i, url) in urls.iter().enumerate() {
        let description = if urls.len() > 1 {
            format!("Thread {} of {}", i + 1, urls.len())
        } else {
            String::new()
        };

        let thread = walk_thread::<L, PB>(lookup, url.as_ref(), &description).await?;
        if let Some(gap) = &thread.gap {
            log::warn!("{}", gap);
        }
        all_entries.extend(thread.entries);
    }

    // Overlapping threads share their earlier tweets
    let all_entries = all_entries
        .into_iter()
        .unique_by(|e| e.id.clone())
        .collect();

    Ok(sort_thread(all_entries))
}

/// Order by ascending timestamp, keeping the input order of equal timestamps.
pub fn sort_thread(mut entries: Vec<ThreadEntry>) -> Vec<ThreadEntry> {
    entries.sort_by_key(|e| e.timestamp);
    entries
}
