use serde::Deserialize;

use crate::types::{FlexibleBool, FlexibleTime};

/// A plex.tv account, as returned when signing in to plex.tv
///
/// The account id is a number on plex.tv but a string when the same user
/// appears in a server's session payloads; see [`User`] for the latter.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlexTvUser {
    pub id: i64,
    pub uuid: String,
    pub email: Option<String>,
    pub friendly_name: Option<String>,
    pub locale: Option<String>,
    #[serde(default)]
    pub confirmed: FlexibleBool,
    #[serde(default)]
    pub email_only_auth: FlexibleBool,
    #[serde(default)]
    pub protected: FlexibleBool,
    pub mailing_list_status: Option<String>,
    #[serde(default)]
    pub mailing_list_active: FlexibleBool,
    pub scrobble_types: Option<String>,
    pub country: Option<String>,
    #[serde(alias = "joined_at", default)]
    pub joined_at: FlexibleTime,
    pub username: String,
    pub thumb: Option<String>,
    #[serde(default)]
    pub has_password: FlexibleBool,
    pub auth_token: Option<String>,
    #[serde(default)]
    pub subscription: Subscription,
    pub subscription_description: Option<String>,
    #[serde(default)]
    pub restricted: FlexibleBool,
    pub anonymous: Option<String>,
    #[serde(default)]
    pub home: FlexibleBool,
    #[serde(default)]
    pub guest: FlexibleBool,
    pub home_size: Option<i64>,
    #[serde(default)]
    pub home_admin: FlexibleBool,
    pub max_home_size: Option<i64>,
    pub certificate_version: Option<i64>,
    #[serde(default)]
    pub remember_expires_at: FlexibleTime,
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub subscriptions: Vec<AccountSubscription>,
    #[serde(default)]
    pub trials: Vec<String>,
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
    pub ads_consent: Option<String>,
    #[serde(default)]
    pub ads_consent_set_at: FlexibleTime,
    #[serde(default)]
    pub ads_consent_reminder_at: FlexibleTime,
    #[serde(default)]
    pub experimental_features: FlexibleBool,
    #[serde(default)]
    pub two_factor_enabled: FlexibleBool,
    #[serde(default)]
    pub backup_codes_created: FlexibleBool,
    #[serde(default)]
    pub entitlements: Vec<String>,
    pub title: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(default)]
    pub active: FlexibleBool,
    #[serde(alias = "Active")]
    pub status: Option<String>,
    #[serde(alias = "lifetime")]
    pub plan: Option<String>,
    #[serde(default)]
    pub subscribed_at: FlexibleTime,
    pub payment_service: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub auto_select_audio: FlexibleBool,
    pub default_audio_language: Option<String>,
    pub default_subtitle_language: Option<String>,
    pub auto_select_subtitle: Option<i64>,
    pub default_subtitle_accessibility: Option<i64>,
    pub default_subtitle_forced: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSubscription {
    pub id: Option<i64>,
    pub mode: Option<String>,
    #[serde(default)]
    pub renews_at: FlexibleTime,
    #[serde(default)]
    pub ends_at: FlexibleTime,
    #[serde(alias = "type")]
    pub subscription_type: Option<String>,
    pub transfer: Option<String>,
    pub state: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEntry {
    pub identifier: String,
    pub endpoint: Option<String>,
    pub token: Option<String>,
    pub status: Option<String>,
}

/// A user as a server reports it, e.g. inside session metadata
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<String>,
    pub uuid: Option<String>,
    pub email: Option<String>,
    #[serde(alias = "joined_at", default)]
    pub joined_at: FlexibleTime,
    pub username: Option<String>,
    pub thumb: Option<String>,
    #[serde(default)]
    pub has_password: FlexibleBool,
    pub auth_token: Option<String>,
    pub authentication_token: Option<String>,
    #[serde(default)]
    pub subscription: Subscription,
    #[serde(default)]
    pub roles: Roles,
    #[serde(default)]
    pub entitlements: Vec<String>,
    #[serde(default)]
    pub confirmed_at: FlexibleTime,
    pub forum_id: Option<i64>,
    #[serde(default)]
    pub remember_me: FlexibleBool,
    pub title: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Roles {
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Response from signing in to plex.tv
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SignInResponse {
    pub user: PlexTvUser,
}

impl SignInResponse {
    /// The token subsequent requests authenticate with
    pub fn auth_token(&self) -> Option<&str> {
        self.user.auth_token.as_deref()
    }
}

#[cfg(test)]
mod users_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sign_in_response_deserializes() {
        let json = r#"{
            "user": {
                "id": 12345678,
                "uuid": "8a3f5c2e1b9d4f07",
                "email": "user@example.com",
                "joined_at": "2015-06-01T12:00:00Z",
                "username": "sampleuser",
                "title": "sampleuser",
                "confirmed": "1",
                "hasPassword": "true",
                "protected": 0,
                "authToken": "NJlYINZmB-Hdy78xubjR",
                "subscription": {
                    "active": 1,
                    "Active": "active",
                    "lifetime": "plexpass",
                    "subscribedAt": 1500000000,
                    "features": ["sync", "home"]
                },
                "twoFactorEnabled": true,
                "entitlements": ["all"]
            }
        }"#;

        let resp: SignInResponse = serde_json::from_str(json).unwrap();
        let user = &resp.user;

        assert_eq!(12_345_678, user.id);
        assert_eq!("sampleuser", user.username);
        assert_eq!(Some("NJlYINZmB-Hdy78xubjR"), resp.auth_token());
        assert_eq!(true, user.confirmed.into_inner());
        assert_eq!(true, user.has_password.into_inner());
        assert_eq!(false, user.protected.into_inner());
        assert_eq!(true, user.two_factor_enabled.into_inner());
        assert_eq!(true, user.subscription.active.into_inner());
        assert_eq!(Some("plexpass".to_string()), user.subscription.plan);
        assert_eq!(1_500_000_000, user.subscription.subscribed_at.timestamp());
    }

    #[test]
    fn test_session_user_tolerates_string_ids() {
        let json = r#"{"id": "1", "thumb": "https://plex.tv/users/abc/avatar", "title": "sampleuser"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(Some("1".to_string()), user.id);
    }
}
