/*!
`hibiki` is a typed client library for the [Plex](https://plex.tv) Media Server and plex.tv HTTP APIs.

Plex servers disagree with each other about how scalars are encoded:
booleans arrive as `true`, `1`, or `"1"`, and timestamps as epoch seconds,
`2023-11-14`, `November 14, 2023`, or an RFC 3339 string, depending on the
server version and endpoint. The response models in [`models`] absorb that
drift through the [`FlexibleBool`] and [`FlexibleTime`] field types, so
callers only ever see `bool` and `DateTime<Utc>`.
 */

pub mod client;
pub mod http_client;
pub mod models;
pub mod types;

pub use client::PlexClient;
pub use types::{FlexibleBool, FlexibleTime};
