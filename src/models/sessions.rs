use serde::Deserialize;

use crate::types::FlexibleBool;

/// The client playing a session
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub address: Option<String>,
    pub device: Option<String>,
    #[serde(default)]
    pub local: FlexibleBool,
    pub machine_identifier: Option<String>,
    pub model: Option<String>,
    pub platform: Option<String>,
    pub platform_version: Option<String>,
    pub product: Option<String>,
    pub profile: Option<String>,
    pub remote_public_address: Option<String>,
    pub state: Option<String>,
    pub title: Option<String>,
    #[serde(alias = "userID")]
    pub user_id: Option<i64>,
    pub vendor: Option<String>,
    pub version: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub bandwidth: Option<i64>,
    pub id: Option<String>,
    pub location: Option<String>,
}

/// An active transcode, from `/transcode/sessions`
///
/// This endpoint still answers in the legacy `_children` envelope.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscodeSession {
    pub audio_channels: Option<i64>,
    pub audio_codec: Option<String>,
    pub audio_decision: Option<String>,
    pub container: Option<String>,
    pub context: Option<String>,
    pub duration: Option<i64>,
    pub height: Option<i64>,
    pub key: Option<String>,
    pub progress: Option<f64>,
    pub protocol: Option<String>,
    pub remaining: Option<i64>,
    pub speed: Option<f64>,
    #[serde(default)]
    pub throttled: FlexibleBool,
    pub video_codec: Option<String>,
    pub video_decision: Option<String>,
    pub width: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TranscodeSessionsResponse {
    #[serde(alias = "_children", default)]
    pub children: Vec<TranscodeSession>,
    #[serde(alias = "_elementType", default)]
    pub element_type: String,
}
