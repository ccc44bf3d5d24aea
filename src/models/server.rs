use serde::Deserialize;

use crate::models::media::Metadata;
use crate::types::{FlexibleBool, FlexibleTime};

/// Identity of the server, from `/identity`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerIdentity {
    pub size: Option<i64>,
    #[serde(default)]
    pub claimed: FlexibleBool,
    pub machine_identifier: String,
    pub version: Option<String>,
}

/// A top-level directory listed by the server root
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountedDirectory {
    pub count: Option<i64>,
    pub key: String,
    pub title: String,
}

/// What the server can do, from the root endpoint
///
/// Nearly every flag in here has been observed as `0`/`1`, `"1"`, and
/// `true` across server versions.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerCapabilities {
    #[serde(alias = "Directory", default)]
    pub directories: Vec<CountedDirectory>,
    #[serde(default)]
    pub allow_camera_upload: FlexibleBool,
    #[serde(default)]
    pub allow_channel_access: FlexibleBool,
    #[serde(default)]
    pub allow_sharing: FlexibleBool,
    #[serde(default)]
    pub allow_sync: FlexibleBool,
    #[serde(default)]
    pub background_processing: FlexibleBool,
    #[serde(default)]
    pub certificate: FlexibleBool,
    #[serde(default)]
    pub companion_proxy: FlexibleBool,
    pub country_code: Option<String>,
    pub diagnostics: Option<String>,
    #[serde(default)]
    pub event_stream: FlexibleBool,
    pub friendly_name: Option<String>,
    #[serde(default)]
    pub hub_search: FlexibleBool,
    #[serde(default)]
    pub item_clusters: FlexibleBool,
    pub livetv: Option<i64>,
    pub machine_identifier: String,
    #[serde(default)]
    pub media_providers: FlexibleBool,
    #[serde(default)]
    pub multiuser: FlexibleBool,
    #[serde(default)]
    pub my_plex: FlexibleBool,
    pub my_plex_mapping_state: Option<String>,
    pub my_plex_signin_state: Option<String>,
    #[serde(default)]
    pub my_plex_subscription: FlexibleBool,
    pub my_plex_username: Option<String>,
    pub owner_features: Option<String>,
    #[serde(default)]
    pub photo_auto_tag: FlexibleBool,
    pub platform: Option<String>,
    pub platform_version: Option<String>,
    #[serde(default)]
    pub plugin_host: FlexibleBool,
    #[serde(default)]
    pub read_only_libraries: FlexibleBool,
    #[serde(default)]
    pub request_parameters_in_cookie: FlexibleBool,
    pub size: Option<i64>,
    #[serde(alias = "streamingBrainABRVersion")]
    pub streaming_brain_abr_version: Option<String>,
    pub streaming_brain_version: Option<String>,
    #[serde(default)]
    pub sync: FlexibleBool,
    pub transcoder_active_video_sessions: Option<i64>,
    #[serde(default)]
    pub transcoder_audio: FlexibleBool,
    #[serde(default)]
    pub transcoder_lyrics: FlexibleBool,
    #[serde(default)]
    pub transcoder_photo: FlexibleBool,
    #[serde(default)]
    pub transcoder_subtitles: FlexibleBool,
    #[serde(default)]
    pub transcoder_video: FlexibleBool,
    pub transcoder_video_bitrates: Option<String>,
    pub transcoder_video_qualities: Option<String>,
    pub transcoder_video_resolutions: Option<String>,
    #[serde(default)]
    pub updated_at: FlexibleTime,
    #[serde(default)]
    pub updater: FlexibleBool,
    pub version: Option<String>,
    #[serde(default)]
    pub voice_search: FlexibleBool,
}

/// A search provider advertised alongside search results
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub key: String,
    pub title: String,
    #[serde(alias = "type")]
    pub provider_type: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchContainer {
    pub size: Option<i64>,
    pub identifier: Option<String>,
    pub media_tag_prefix: Option<String>,
    pub media_tag_version: Option<i64>,
    #[serde(alias = "Metadata", default)]
    pub metadata: Vec<Metadata>,
    #[serde(alias = "Provider", default)]
    pub provider: Vec<Provider>,
}

#[cfg(test)]
mod server_tests {
    use pretty_assertions::assert_eq;

    use crate::models::CapabilitiesResponse;

    use super::*;

    const CAPABILITIES_JSON: &str = r#"{
        "MediaContainer": {
            "size": 25,
            "allowCameraUpload": true,
            "allowSharing": 1,
            "allowSync": "1",
            "backgroundProcessing": 1,
            "certificate": 1,
            "countryCode": "deu",
            "friendlyName": "living-room",
            "machineIdentifier": "3c7a5f2e04b0f1f6a9dd7a2b9f8b4e5a",
            "multiuser": 1,
            "myPlex": "true",
            "myPlexMappingState": "mapped",
            "myPlexSigninState": "ok",
            "myPlexSubscription": 0,
            "platform": "Linux",
            "platformVersion": "12.5",
            "sync": "1",
            "transcoderAudio": 1,
            "transcoderVideo": "1",
            "transcoderVideoResolutions": "128,128,160,240,320,480,768,720,1080",
            "updatedAt": 1700000000,
            "updater": 1,
            "version": "1.40.0.7775",
            "voiceSearch": true,
            "Directory": [
                {"count": 1, "key": "library", "title": "library"},
                {"count": 1, "key": "status", "title": "status"}
            ]
        }
    }"#;

    #[test]
    fn test_capabilities_deserialize() {
        let resp: CapabilitiesResponse = serde_json::from_str(CAPABILITIES_JSON).unwrap();
        let caps = resp.media_container;

        assert_eq!("3c7a5f2e04b0f1f6a9dd7a2b9f8b4e5a", caps.machine_identifier);
        assert_eq!(true, caps.allow_camera_upload.into_inner());
        assert_eq!(true, caps.allow_sharing.into_inner());
        assert_eq!(true, caps.allow_sync.into_inner());
        assert_eq!(true, caps.my_plex.into_inner());
        assert_eq!(false, caps.my_plex_subscription.into_inner());
        assert_eq!(false, caps.allow_channel_access.into_inner());
        assert_eq!(1_700_000_000, caps.updated_at.timestamp());
        assert_eq!(2, caps.directories.len());
        assert_eq!(Some("1.40.0.7775".to_string()), caps.version);
    }

    #[test]
    fn test_identity_deserialize() {
        let json = r#"{
            "MediaContainer": {
                "size": 0,
                "claimed": "1",
                "machineIdentifier": "3c7a5f2e04b0f1f6a9dd7a2b9f8b4e5a",
                "version": "1.40.0.7775"
            }
        }"#;

        let resp: crate::models::IdentityResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            "3c7a5f2e04b0f1f6a9dd7a2b9f8b4e5a",
            resp.media_container.machine_identifier
        );
        assert_eq!(true, resp.media_container.claimed.into_inner());
    }
}
