use std::collections::BTreeSet;

use chrono::DateTime;

use crate::tweet::{Media, MediaType, Tweet, VideoVariant};
use crate::ThreadError;

/// Twitter `created_at` format, e.g. `Wed Oct 10 20:19:24 +0000 2018`
const CREATED_AT_FORMAT: &str = "%a %b %d %T %z %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub url: String,
    pub filename: String,
    pub alt_text: Option<String>,
}

/// One tweet of a reconstructed thread, with media references stripped from its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadEntry {
    pub id: String,
    pub previous_id: Option<String>,
    pub text: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub images: Vec<Image>,
    pub videos: Vec<String>,
}

impl ThreadEntry {
    pub fn from_tweet(tweet: Tweet) -> Result<Self, ThreadError> {
        let timestamp =
            parse_created_at(&tweet.created_at).ok_or_else(|| ThreadError::InvalidTimestamp {
                id: tweet.id_str.clone(),
                created_at: tweet.created_at.clone(),
            })?;

        let media = tweet
            .extended_entities
            .map(|e| e.media)
            .unwrap_or_default();

        let images = media
            .iter()
            .filter(|m| m.media_type == MediaType::Photo)
            .map(Image::from_media)
            .collect();

        let videos = media
            .iter()
            .filter(|m| m.media_type == MediaType::Video)
            .filter_map(|m| m.video_info.as_ref())
            .filter_map(|info| best_variant(&info.variants))
            .map(|v| v.url.clone())
            .collect();

        let text = strip_spans(&tweet.full_text, media.iter().map(|m| m.indices));

        Ok(Self {
            id: tweet.id_str,
            previous_id: tweet.in_reply_to_status_id_str,
            text,
            timestamp,
            images,
            videos,
        })
    }
}

impl Image {
    fn from_media(media: &Media) -> Self {
        let url = media.media_url_https.clone();
        let filename = url
            .rsplit_once('/')
            .map(|(_, name)| name)
            .unwrap_or(url.as_str())
            .to_owned();
        let alt_text = media
            .ext_alt_text
            .as_ref()
            .filter(|s| !s.is_empty())
            .cloned();

        Self {
            url,
            filename,
            alt_text,
        }
    }
}

pub(crate) fn parse_created_at(created_at: &str) -> Option<i64> {
    DateTime::parse_from_str(created_at, CREATED_AT_FORMAT)
        .ok()
        .map(|t| t.timestamp_millis())
}

/// Highest bitrate variant, the first one wins on ties
fn best_variant(variants: &[VideoVariant]) -> Option<&VideoVariant> {
    variants.iter().fold(None, |best, v| match best {
        Some(b) if b.bitrate.unwrap_or(0) >= v.bitrate.unwrap_or(0) => Some(b),
        _ => Some(v),
    })
}

/// Remove every `[start, end)` character span from `text`, then trim.
/// Offsets are counted in chars, matching the entity indices of the API.
fn strip_spans(text: &str, spans: impl IntoIterator<Item = [usize; 2]>) -> String {
    let spans: BTreeSet<[usize; 2]> = spans.into_iter().collect();
    let stripped: String = text
        .chars()
        .enumerate()
        .filter(|(i, _)| !spans.iter().any(|&[start, end]| (start..end).contains(i)))
        .map(|(_, c)| c)
        .collect();

    stripped.trim().to_owned()
}
