use serde::Deserialize;

use crate::models::sessions::{Player, Session};
use crate::models::users::User;
use crate::types::{FlexibleBool, FlexibleTime};

/// A single item of media — a movie, an episode, a track — as returned by
/// library, search, and session endpoints.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(alias = "Player")]
    pub player: Option<Player>,
    #[serde(alias = "Session")]
    pub session: Option<Session>,
    #[serde(alias = "User")]
    pub user: Option<User>,
    #[serde(default)]
    pub added_at: FlexibleTime,
    pub art: Option<String>,
    pub content_rating: Option<String>,
    pub duration: Option<i64>,
    pub grandparent_art: Option<String>,
    pub grandparent_key: Option<String>,
    pub grandparent_rating_key: Option<String>,
    pub grandparent_theme: Option<String>,
    pub grandparent_thumb: Option<String>,
    pub grandparent_title: Option<String>,
    pub guid: Option<String>,
    #[serde(alias = "Guid", default)]
    pub alt_guids: Vec<AltGuid>,
    pub index: Option<i64>,
    pub key: String,
    #[serde(default)]
    pub last_viewed_at: FlexibleTime,
    #[serde(alias = "librarySectionID")]
    pub library_section_id: Option<i64>,
    pub library_section_key: Option<String>,
    pub library_section_title: Option<String>,
    #[serde(default)]
    pub originally_available_at: FlexibleTime,
    pub parent_index: Option<i64>,
    pub parent_key: Option<String>,
    pub parent_rating_key: Option<String>,
    pub parent_thumb: Option<String>,
    pub parent_title: Option<String>,
    pub rating_count: Option<i64>,
    pub rating: Option<f64>,
    pub rating_key: String,
    pub session_key: Option<String>,
    pub summary: Option<String>,
    pub thumb: Option<String>,
    #[serde(alias = "Media", default)]
    pub media: Vec<Media>,
    pub title: String,
    pub title_sort: Option<String>,
    #[serde(alias = "type")]
    pub media_type: String,
    #[serde(default)]
    pub updated_at: FlexibleTime,
    pub view_count: Option<i64>,
    pub view_offset: Option<i64>,
    pub year: Option<i64>,
    #[serde(alias = "Director", default)]
    pub directors: Vec<TaggedData>,
    #[serde(alias = "Writer", default)]
    pub writers: Vec<TaggedData>,
}

impl Metadata {
    pub fn id(&self) -> &str {
        &self.rating_key
    }

    pub fn plays(&self) -> i64 {
        self.view_count.unwrap_or(0)
    }

    pub fn is_movie(&self) -> bool {
        self.media_type == "movie"
    }

    pub fn is_episode(&self) -> bool {
        self.media_type == "episode"
    }
}

/// A globally unique identifier for a metadata provider that is not
/// actively being used
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AltGuid {
    pub id: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaggedData {
    pub tag: String,
    pub filter: Option<String>,
    pub id: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub tag: String,
    pub filter: Option<String>,
    pub id: Option<i64>,
    pub role: Option<String>,
    pub thumb: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub aspect_ratio: Option<f64>,
    pub audio_channels: Option<i64>,
    pub audio_codec: Option<String>,
    pub audio_profile: Option<String>,
    pub bitrate: Option<i64>,
    pub container: Option<String>,
    pub duration: Option<i64>,
    // servers return 0/1 or true/false here depending on version
    #[serde(default)]
    pub has_64bit_offsets: FlexibleBool,
    pub height: Option<i64>,
    pub id: i64,
    #[serde(default)]
    pub optimized_for_streaming: FlexibleBool,
    #[serde(default)]
    pub selected: FlexibleBool,
    pub video_codec: Option<String>,
    pub video_frame_rate: Option<String>,
    pub video_profile: Option<String>,
    pub video_resolution: Option<String>,
    pub width: Option<i64>,
    #[serde(alias = "Part", default)]
    pub part: Vec<Part>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub audio_profile: Option<String>,
    pub container: Option<String>,
    pub decision: Option<String>,
    pub duration: Option<i64>,
    pub file: Option<String>,
    #[serde(default)]
    pub has_64bit_offsets: FlexibleBool,
    #[serde(default)]
    pub has_thumbnail: FlexibleBool,
    pub id: i64,
    pub key: Option<String>,
    #[serde(default)]
    pub optimized_for_streaming: FlexibleBool,
    #[serde(default)]
    pub selected: FlexibleBool,
    pub size: Option<i64>,
    #[serde(alias = "Stream", default)]
    pub stream: Vec<Stream>,
    pub video_profile: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub album_gain: Option<f64>,
    pub album_peak: Option<f64>,
    pub album_range: Option<f64>,
    #[serde(default)]
    pub anamorphic: FlexibleBool,
    pub audio_channel_layout: Option<String>,
    pub bit_depth: Option<i64>,
    pub bitrate: Option<i64>,
    pub bitrate_mode: Option<String>,
    pub cabac: Option<String>,
    pub channels: Option<i64>,
    pub chroma_location: Option<String>,
    pub chroma_subsampling: Option<String>,
    pub codec: Option<String>,
    #[serde(alias = "codecID")]
    pub codec_id: Option<String>,
    pub color_range: Option<String>,
    pub color_space: Option<String>,
    #[serde(rename = "default", default)]
    pub is_default: FlexibleBool,
    pub display_title: Option<String>,
    pub duration: Option<String>,
    pub frame_rate: Option<f64>,
    pub frame_rate_mode: Option<String>,
    pub gain: Option<String>,
    #[serde(default)]
    pub has_scaling_matrix: FlexibleBool,
    pub height: Option<i64>,
    pub id: i64,
    pub index: Option<i64>,
    pub language: Option<String>,
    pub language_code: Option<String>,
    pub level: Option<i64>,
    pub location: Option<String>,
    pub loudness: Option<String>,
    pub lra: Option<String>,
    pub peak: Option<String>,
    pub pixel_aspect_ratio: Option<String>,
    pub pixel_format: Option<String>,
    pub profile: Option<String>,
    pub ref_frames: Option<i64>,
    pub sampling_rate: Option<i64>,
    pub scan_type: Option<String>,
    #[serde(default)]
    pub selected: FlexibleBool,
    pub stream_identifier: Option<String>,
    pub stream_type: Option<i64>,
    pub width: Option<i64>,
}
