//! The high-level client surface for a Plex server and its plex.tv account

use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use log::debug;
use uuid::Uuid;

use crate::http_client::HttpClient;
use crate::models::{
    CapabilitiesResponse, CreateLibraryParams, Device, Directory, IdentityResponse,
    InviteFriendParams, InviteFriendResponse, Metadata, PlexResponse, Resource, SearchResponse,
    SectionsResponse, ServerCapabilities, SignInResponse, TranscodeSessionsResponse,
    UpdateFriendParams,
};
use crate::types::{PlexToken, PlexUrl};

/// Hosted plex.tv API root
const PLEX_TV_URL: &str = "https://plex.tv";

/// A client bound to one Plex server and the plex.tv account that owns it
#[derive(Clone, Debug, Default)]
pub struct PlexClient {
    server: HttpClient,
    plex_tv: HttpClient,
    machine_identifier: String,
}

impl PlexClient {
    /// Creates a client without contacting the server
    ///
    /// The url and token are validated for shape only; use
    /// [`connect`](Self::connect) to also verify the server answers.
    pub fn new(plex_url: &str, plex_token: &str) -> Result<Self> {
        let plex_url = PlexUrl::try_new(plex_url)?;
        let plex_token = PlexToken::try_new(plex_token)?;

        let client_identifier = Uuid::new_v4().to_string();
        let server = HttpClient::with_client_identifier(&plex_url, &plex_token, &client_identifier)?;
        let plex_tv =
            HttpClient::with_client_identifier(PLEX_TV_URL, &plex_token, &client_identifier)?;

        Ok(Self {
            server,
            plex_tv,
            machine_identifier: String::default(),
        })
    }

    /// Creates a client and fetches the server's machine identifier, which
    /// also verifies the url and token actually reach a server
    pub async fn connect(plex_url: &str, plex_token: &str) -> Result<Self> {
        debug!("Connecting to plex...");

        let mut plex = Self::new(plex_url, plex_token)?;
        plex.machine_identifier = plex.fetch_machine_identifier().await?;

        Ok(plex)
    }

    /// Signs in to plex.tv with a username and password, yielding the
    /// account and its auth token for future [`PlexClient`]s
    pub async fn sign_in(username: &str, password: &str) -> Result<SignInResponse> {
        debug!("Signing in to plex.tv...");

        let client = reqwest::Client::new();
        let resp = client
            .post(format!("{PLEX_TV_URL}/users/sign_in.json"))
            .basic_auth(username, Some(password))
            .header(reqwest::header::ACCEPT, "application/json")
            .header("X-Plex-Product", "hibiki")
            .header("X-Plex-Version", env!("CARGO_PKG_VERSION"))
            .header("X-Plex-Client-Identifier", Uuid::new_v4().to_string())
            .send()
            .await?;

        let contents = resp.text().await?;
        serde_json::from_str(&contents).with_context(|| {
            format!("Unable to deserialise sign-in response. Body was: \"{contents}\"")
        })
    }

    /// The machine identifier fetched during [`connect`](Self::connect)
    pub fn machine_identifier(&self) -> &str {
        &self.machine_identifier
    }

    /// What the server can do, from the root endpoint
    pub async fn server_capabilities(&self) -> Result<ServerCapabilities> {
        let resp: CapabilitiesResponse = self.server.get("/", None, None).await?;
        Ok(resp.media_container)
    }

    /// All library sections on the server
    pub async fn library_sections(&self) -> Result<Vec<Directory>> {
        let resp: SectionsResponse = self.server.get("library/sections", None, None).await?;
        Ok(resp.media_container.directory)
    }

    /// Metadata for a single item
    pub async fn metadata(&self, rating_key: &str) -> Result<Vec<Metadata>> {
        let resp: PlexResponse<Vec<Metadata>> = self
            .server
            .get(&format!("library/metadata/{rating_key}"), None, None)
            .await?;
        Ok(resp.media_container.metadata)
    }

    /// Child items of a piece of media (seasons of a show, episodes of a
    /// season, tracks of an album)
    pub async fn metadata_children(&self, rating_key: &str) -> Result<Vec<Metadata>> {
        let resp: PlexResponse<Vec<Metadata>> = self
            .server
            .get(&format!("library/metadata/{rating_key}/children"), None, None)
            .await?;
        Ok(resp.media_container.metadata)
    }

    /// Searches the server for media matching a title
    pub async fn search(&self, title: &str, max_results: Option<i32>) -> Result<SearchResponse> {
        let params = HashMap::from([("query".to_string(), title.to_string())]);
        self.server.get("search", Some(params), max_results).await
    }

    /// Media currently being played, with the player and user attached
    pub async fn sessions(&self) -> Result<Vec<Metadata>> {
        let resp: PlexResponse<Vec<Metadata>> =
            self.server.get("status/sessions", None, None).await?;
        Ok(resp.media_container.metadata)
    }

    /// Active transcodes
    pub async fn transcode_sessions(&self) -> Result<TranscodeSessionsResponse> {
        self.server.get("transcode/sessions", None, None).await
    }

    /// Creates a library section on the server
    pub async fn create_library(&self, params: &CreateLibraryParams) -> Result<()> {
        let _: serde_json::Value = self
            .server
            .post("library/sections", Some(params.to_params()))
            .await?;
        Ok(())
    }

    /// Devices that have connected to the account
    pub async fn devices(&self) -> Result<Vec<Device>> {
        self.plex_tv.get("devices.json", None, None).await
    }

    /// Servers and players registered with the account
    pub async fn resources(&self) -> Result<Vec<Resource>> {
        self.plex_tv.get("api/v2/resources", None, None).await
    }

    /// Invites a friend to this client's server
    pub async fn invite_friend(&self, params: &InviteFriendParams) -> Result<InviteFriendResponse> {
        if params.username_or_email.is_empty() {
            return Err(anyhow!("`username_or_email` is blank"));
        }

        self.plex_tv
            .post_body("api/v2/shared_servers", &params.to_body())
            .await
    }

    /// Updates a friend's access to this client's server
    pub async fn update_friend(&self, invite_id: i64, params: &UpdateFriendParams) -> Result<()> {
        let _: serde_json::Value = self
            .plex_tv
            .put(
                &format!("api/v2/shared_servers/{invite_id}"),
                Some(params.to_params()),
            )
            .await?;
        Ok(())
    }

    async fn fetch_machine_identifier(&self) -> Result<String> {
        let resp: IdentityResponse = self.server.get("identity", None, None).await?;
        Ok(resp.media_container.machine_identifier)
    }
}
