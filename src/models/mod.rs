//! Response models mirroring the Plex Media Server and plex.tv JSON schema
//!
//! Fields whose wire type drifts across server versions are typed as
//! [`FlexibleBool`](crate::types::FlexibleBool) or
//! [`FlexibleTime`](crate::types::FlexibleTime); everything else is a plain
//! one-to-one mapping.

use serde::Deserialize;

use crate::types::FlexibleBool;

pub mod devices;
pub mod friends;
pub mod library;
pub mod media;
pub mod server;
pub mod sessions;
pub mod users;

pub use devices::{Connection, Device, Resource};
pub use friends::{InviteFriendParams, InviteFriendResponse, UpdateFriendParams};
pub use library::{CreateLibraryParams, Directory, DirectoryContainer, LibraryType, Location};
pub use media::{AltGuid, Media, Metadata, Part, Role, Stream, TaggedData};
pub use server::{Provider, SearchContainer, ServerCapabilities, ServerIdentity};
pub use sessions::{Player, Session, TranscodeSession, TranscodeSessionsResponse};
pub use users::{PlexTvUser, SignInResponse, User};

pub type PlexResponse<T> = MediaContainerWrapper<MediaContainer<T>>;
pub type SectionsResponse = MediaContainerWrapper<DirectoryContainer>;
pub type SearchResponse = MediaContainerWrapper<SearchContainer>;
pub type IdentityResponse = MediaContainerWrapper<ServerIdentity>;
pub type CapabilitiesResponse = MediaContainerWrapper<ServerCapabilities>;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaContainerWrapper<T> {
    #[serde(rename = "MediaContainer")]
    pub media_container: T,
}

/// The envelope wrapped around most metadata-bearing server responses
///
/// Servers omit the `Metadata` key entirely when a container is empty, so
/// the payload falls back to its default.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(deserialize = "T: serde::Deserialize<'de> + Default")
)]
pub struct MediaContainer<T> {
    pub size: Option<i64>,
    #[serde(default)]
    pub allow_sync: FlexibleBool,
    pub identifier: Option<String>,
    #[serde(alias = "librarySectionID")]
    pub library_section_id: Option<i64>,
    pub library_section_title: Option<String>,
    #[serde(alias = "librarySectionUUID")]
    pub library_section_uuid: Option<String>,
    pub media_tag_prefix: Option<String>,
    pub media_tag_version: Option<i64>,
    #[serde(alias = "Metadata", default)]
    pub metadata: T,
}
