pub mod flexible_bool;
pub mod flexible_time;
pub mod plex_token;
pub mod plex_url;

pub use flexible_bool::FlexibleBool;
pub use flexible_time::FlexibleTime;
pub use plex_token::PlexToken;
pub use plex_url::PlexUrl;
