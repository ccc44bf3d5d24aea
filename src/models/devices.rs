use serde::Deserialize;

use crate::types::{FlexibleBool, FlexibleTime};

/// A device that has connected to the account, from plex.tv `/devices.json`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: i64,
    #[serde(default)]
    pub last_seen_at: FlexibleTime,
    pub name: String,
    pub product: Option<String>,
    pub version: Option<String>,
}

/// A server or player registered with the account, from the plex.tv
/// resources endpoint
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub name: String,
    pub product: Option<String>,
    pub product_version: Option<String>,
    pub platform: Option<String>,
    pub platform_version: Option<String>,
    pub device: Option<String>,
    pub client_identifier: String,
    #[serde(default)]
    pub created_at: FlexibleTime,
    #[serde(default)]
    pub last_seen_at: FlexibleTime,
    pub provides: String,
    #[serde(default)]
    pub owned: FlexibleBool,
    pub access_token: Option<String>,
    #[serde(default)]
    pub https_required: FlexibleBool,
    #[serde(default)]
    pub synced: FlexibleBool,
    #[serde(default)]
    pub relay: FlexibleBool,
    #[serde(default)]
    pub public_address_matches: FlexibleBool,
    pub public_address: Option<String>,
    #[serde(default)]
    pub presence: FlexibleBool,
    #[serde(alias = "Connection", default)]
    pub connections: Vec<Connection>,
}

impl Resource {
    pub fn is_server(&self) -> bool {
        self.provides.split(',').any(|p| p == "server")
    }
}

/// One way to reach a [`Resource`]
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub protocol: Option<String>,
    pub address: Option<String>,
    pub port: Option<i64>,
    pub uri: String,
    #[serde(default)]
    pub local: FlexibleBool,
}
