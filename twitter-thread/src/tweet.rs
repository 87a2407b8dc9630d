use serde::Deserialize;

/// Raw status record as returned by the v1.1 `statuses/show` endpoint in
/// extended mode. Only the fields needed to rebuild a thread are kept.
#[derive(Deserialize, Debug, Clone)]
pub struct Tweet {
    pub id_str: String,
    pub full_text: String,
    pub created_at: String,
    #[serde(default)]
    pub in_reply_to_status_id_str: Option<String>,
    #[serde(default)]
    pub extended_entities: Option<ExtendedEntities>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ExtendedEntities {
    #[serde(default)]
    pub media: Vec<Media>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Media {
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub indices: [usize; 2],
    pub media_url_https: String,
    #[serde(default)]
    pub ext_alt_text: Option<String>,
    #[serde(default)]
    pub video_info: Option<VideoInfo>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Photo,
    Video,
    AnimatedGif,
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize, Debug, Clone)]
pub struct VideoInfo {
    #[serde(default)]
    pub variants: Vec<VideoVariant>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct VideoVariant {
    // HLS playlists are listed without a bitrate
    #[serde(default)]
    pub bitrate: Option<u64>,
    #[serde(default)]
    pub content_type: String,
    pub url: String,
}
