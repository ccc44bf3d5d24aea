use std::collections::HashMap;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::types::{FlexibleBool, FlexibleTime};

/// The state of a server share after inviting a friend
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteFriendResponse {
    pub id: i64,
    pub name: Option<String>,
    pub owner_id: Option<i64>,
    pub invited_id: Option<i64>,
    pub invited_email: Option<String>,
    pub server_id: Option<i64>,
    #[serde(default)]
    pub accepted: FlexibleBool,
    #[serde(default)]
    pub accepted_at: FlexibleTime,
    #[serde(default)]
    pub deleted_at: FlexibleTime,
    #[serde(default)]
    pub left_at: FlexibleTime,
    #[serde(default)]
    pub owned: FlexibleBool,
    pub invite_token: Option<String>,
    pub machine_identifier: Option<String>,
    #[serde(default)]
    pub last_seen_at: FlexibleTime,
    pub num_libraries: Option<i64>,
    #[serde(default)]
    pub invited: InvitedUser,
    #[serde(default)]
    pub sharing_settings: SharingSettings,
    #[serde(default)]
    pub libraries: Vec<SharedLibrary>,
    #[serde(default)]
    pub all_libraries: FlexibleBool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitedUser {
    pub id: i64,
    pub uuid: Option<String>,
    pub title: Option<String>,
    pub username: Option<String>,
    #[serde(default)]
    pub restricted: FlexibleBool,
    pub thumb: Option<String>,
    pub status: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharingSettings {
    #[serde(default)]
    pub allow_channels: FlexibleBool,
    pub filter_movies: Option<String>,
    pub filter_music: Option<String>,
    pub filter_photos: Option<String>,
    pub filter_television: Option<String>,
    // observed as null; the concrete type is unknown
    pub filter_all: Option<serde_json::Value>,
    #[serde(default)]
    pub allow_sync: FlexibleBool,
    #[serde(default)]
    pub allow_camera_upload: FlexibleBool,
    #[serde(default)]
    pub allow_subtitle_admin: FlexibleBool,
    #[serde(default)]
    pub allow_tuners: FlexibleBool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedLibrary {
    pub id: i64,
    pub key: Option<i64>,
    pub title: String,
    #[serde(alias = "type")]
    pub library_type: Option<String>,
}

/// Parameters to invite a friend to a server
#[derive(Builder, Clone, Debug)]
pub struct InviteFriendParams {
    #[builder(setter(into))]
    pub username_or_email: String,
    #[builder(setter(into))]
    pub machine_id: String,
    #[builder(setter(into, strip_option), default)]
    pub label: Option<String>,
    #[builder(default)]
    pub library_ids: Vec<i64>,
}

impl InviteFriendParams {
    pub(crate) fn to_body(&self) -> InviteFriendBody {
        InviteFriendBody {
            invited_email: self.username_or_email.clone(),
            library_section_ids: self.library_ids.clone(),
            machine_identifier: self.machine_id.clone(),
            settings: InviteFriendSettings::default(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InviteFriendBody {
    pub invited_email: String,
    pub library_section_ids: Vec<i64>,
    pub machine_identifier: String,
    pub settings: InviteFriendSettings,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InviteFriendSettings {
    pub allow_camera_upload: FlexibleBool,
    pub allow_sync: FlexibleBool,
    pub filter_movies: String,
    pub filter_music: String,
    pub filter_television: String,
}

/// Optional updates to a friend's access to a server
#[derive(Builder, Clone, Debug, Default)]
#[builder(setter(into, strip_option), default)]
pub struct UpdateFriendParams {
    pub allow_sync: Option<String>,
    pub allow_camera_upload: Option<String>,
    pub allow_channels: Option<String>,
    pub filter_movies: Option<String>,
    pub filter_television: Option<String>,
    pub filter_music: Option<String>,
    pub filter_photos: Option<String>,
}

impl UpdateFriendParams {
    pub(crate) fn to_params(&self) -> HashMap<String, String> {
        let mut params = HashMap::new();

        let pairs = [
            ("allowSync", &self.allow_sync),
            ("allowCameraUpload", &self.allow_camera_upload),
            ("allowChannels", &self.allow_channels),
            ("filterMovies", &self.filter_movies),
            ("filterTelevision", &self.filter_television),
            ("filterMusic", &self.filter_music),
            ("filterPhotos", &self.filter_photos),
        ];

        for (key, value) in pairs {
            if let Some(value) = value {
                params.insert(key.to_string(), value.clone());
            }
        }

        params
    }
}
