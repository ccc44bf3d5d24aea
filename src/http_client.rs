//! A custom [`Client`](reqwest::Client) used by the library for making requests
//! to a Plex server or to plex.tv
//!
//! The original source for this code is from: https://github.com/seanmonstar/reqwest/issues/988#issuecomment-1475364352

use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use log::debug;
use reqwest::{header, Url};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product name advertised in the `X-Plex-Product` header
const PRODUCT: &str = "hibiki";

/// A custom [`Client`](reqwest::Client), with a base url, the plex token,
/// and the `X-Plex-*` identity headers set during creation.
#[derive(Clone, Default, Debug)]
pub struct HttpClient {
    /// The plex server (or plex.tv) URL
    base_url: String,
    /// Default headers to use with the custom client
    headers: header::HeaderMap,
    /// The user's plex token
    plex_token: String,
    /// The resulting custom client
    client: reqwest::Client,
}

/// Shorthand for the query parameters type
type Params = Option<HashMap<String, String>>;

impl HttpClient {
    /// Creates a new custom ['Client'](reqwest::Client) with a random
    /// client identifier
    pub fn new(base_url: &str, plex_token: &str) -> Result<Self> {
        Self::with_client_identifier(base_url, plex_token, &Uuid::new_v4().to_string())
    }

    /// Creates a new custom ['Client'](reqwest::Client)
    ///
    /// Custom headers and a base url are set during creation
    pub fn with_client_identifier(
        base_url: &str,
        plex_token: &str,
        client_identifier: &str,
    ) -> Result<Self> {
        debug!("Creating HTTP client...");

        let mut headers = header::HeaderMap::new();
        headers.append(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.append("X-Plex-Product", header::HeaderValue::from_static(PRODUCT));
        headers.append(
            "X-Plex-Version",
            header::HeaderValue::from_static(env!("CARGO_PKG_VERSION")),
        );
        headers.append(
            "X-Plex-Client-Identifier",
            header::HeaderValue::from_str(client_identifier)?,
        );

        let client = reqwest::Client::builder()
            .gzip(true)
            .brotli(true)
            .zstd(true)
            .build()?;

        Ok(Self {
            base_url: base_url.to_owned(),
            plex_token: plex_token.to_owned(),
            headers,
            client,
        })
    }

    /// Perform a `GET` request with the custom ['Client'](reqwest::Client)
    pub async fn get<T>(&self, path: &str, params: Params, max_results: Option<i32>) -> Result<T>
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        let url = self.build_final_url(path, params)?;

        let req = self.client.get(url).headers(self.headers.clone());
        let req = if let Some(max_results) = max_results {
            req.header("X-Plex-Container-Size", max_results.to_string())
                .header("X-Plex-Container-Start", "0")
        } else {
            req
        };

        match req.send().await {
            Ok(resp) => {
                let contents = resp.text().await?;
                if contents.is_empty() {
                    return Ok(T::default());
                }

                serde_json::from_str(&contents).with_context(|| {
                    format!(
                        "Unable to deserialise response. Body was: \"{}\"",
                        truncate(&contents, 2000)
                    )
                })
            }
            Err(err) => Err(anyhow!("An error occurred while attempting to GET: {err}")),
        }
    }

    /// Perform a `DELETE` request with the custom ['Client'](reqwest::Client)
    pub async fn delete(&self, path: &str, params: Params) -> Result<()> {
        let url = self.build_final_url(path, params)?;
        self.client.delete(url).send().await?;
        Ok(())
    }

    /// Perform a `POST` request with the custom ['Client'](reqwest::Client)
    pub async fn post<T>(&self, path: &str, params: Params) -> Result<T>
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        let url = self.build_final_url(path, params)?;

        match self
            .client
            .post(url)
            .headers(self.headers.clone())
            .send()
            .await
        {
            Ok(resp) => {
                let contents = resp.text().await?;
                if contents.is_empty() {
                    return Ok(T::default());
                }

                serde_json::from_str(&contents).with_context(|| {
                    format!("Unable to deserialise response. Body was: \"{}\"", contents)
                })
            }
            Err(err) => Err(anyhow!("An error occurred while attempting to POST: {err}")),
        }
    }

    /// Perform a `POST` request with a JSON body
    pub async fn post_body<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: for<'de> Deserialize<'de> + Default,
    {
        let url = self.build_final_url(path, None)?;

        match self
            .client
            .post(url)
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await
        {
            Ok(resp) => {
                let contents = resp.text().await?;
                if contents.is_empty() {
                    return Ok(T::default());
                }

                serde_json::from_str(&contents).with_context(|| {
                    format!("Unable to deserialise response. Body was: \"{}\"", contents)
                })
            }
            Err(err) => Err(anyhow!("An error occurred while attempting to POST: {err}")),
        }
    }

    /// Perform a `PUT` request with the custom ['Client'](reqwest::Client)
    pub async fn put<T>(&self, path: &str, params: Params) -> Result<T>
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        let url = self.build_final_url(path, params)?;
        match self
            .client
            .put(url)
            .headers(self.headers.clone())
            .send()
            .await
        {
            Ok(resp) => {
                let contents = resp.text().await?;
                if contents.is_empty() {
                    return Ok(T::default());
                }

                serde_json::from_str(&contents).with_context(|| {
                    format!("Unable to deserialise response. Body was: \"{}\"", contents)
                })
            }
            Err(err) => Err(anyhow!("An error occurred while attempting to PUT: {err}")),
        }
    }

    /// Constructs the final URL passed to the respective request
    ///
    /// Merges the base url, the path, and any parameters together
    fn build_final_url(&self, path: &str, params: Params) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?.join(path)?;

        url.query_pairs_mut()
            .append_pair("X-Plex-Token", &self.plex_token);

        if let Some(params) = params {
            for (k, v) in params {
                url.query_pairs_mut().append_pair(&k, &v);
            }
        }

        debug!("FINAL URL: {url}");

        Ok(url)
    }
}

fn truncate(contents: &str, max_chars: usize) -> &str {
    match contents.char_indices().nth(max_chars) {
        Some((idx, _)) => &contents[..idx],
        None => contents,
    }
}
