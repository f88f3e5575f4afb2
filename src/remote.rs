// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Remote template source.
//!
//! Templates live in a remote repository that exposes two endpoints: a
//! __listing__ endpoint returning a JSON array of directory entries, and a
//! __content__ endpoint serving the raw body of each entry. Only entries whose
//! name ends with ".gitignore" are considered templates, and the suffix is
//! dropped from the names handed out to callers.
//!
//! # Canonical Names
//!
//! The content endpoint is case-sensitive, but users are not. Every requested
//! name is first resolved against the listing through a case-insensitive
//! lookup. The casing stored in the listing is the __canonical name__, and it
//! is the only form ever used to build a content URL.

use crate::config::RemoteSettings;

use reqwest::{Client, Proxy, Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// File name suffix marking an entry of the listing as a template.
pub const TEMPLATE_SUFFIX: &str = ".gitignore";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Source of gitignore templates.
///
/// Implementors only need to list templates and fetch raw bodies by canonical
/// name. Name resolution is shared.
#[allow(async_fn_in_trait)]
pub trait TemplateSource {
    /// List names of all available templates without their suffix.
    async fn list_templates(&self) -> Result<Vec<String>>;

    /// Fetch raw template body by canonical name.
    async fn fetch_raw(&self, canonical: &str) -> Result<Vec<u8>>;

    /// Fetch template listing as a [`TemplateIndex`].
    async fn index(&self) -> Result<TemplateIndex> {
        Ok(TemplateIndex::new(self.list_templates().await?))
    }

    /// Resolve canonical casing of template name.
    ///
    /// # Errors
    ///
    /// - Return [`RemoteError::NotFound`] if no template matches name under
    ///   any casing.
    async fn resolve_canonical_name(&self, input: &str) -> Result<String> {
        self.index().await?.resolve(input).map(str::to_owned)
    }

    /// Fetch template body by case-insensitive name.
    async fn get_template(&self, name: &str) -> Result<Vec<u8>> {
        let canonical = self.resolve_canonical_name(name).await?;
        self.fetch_raw(&canonical).await
    }
}

/// Snapshot of template listing.
///
/// Resolves any number of names against one listing without fetching it
/// again.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TemplateIndex {
    names: Vec<String>,
}

impl TemplateIndex {
    /// Construct new index from listed template names.
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolve canonical casing of template name.
    ///
    /// First entry whose lower-cased form equals the lower-cased input wins.
    ///
    /// # Errors
    ///
    /// - Return [`RemoteError::NotFound`] if nothing matches.
    pub fn resolve(&self, input: &str) -> Result<&str> {
        let wanted = input.to_lowercase();
        self.names
            .iter()
            .find(|name| name.to_lowercase() == wanted)
            .map(String::as_str)
            .ok_or_else(|| RemoteError::NotFound { name: input.into() })
    }

    /// Template names in listing order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Template source backed by GitHub's gitignore repository.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    listing_url: String,
    raw_url: String,
}

impl GitHubClient {
    /// Construct new client from remote settings.
    ///
    /// Every request is bounded by the configured timeout. If a proxy is set,
    /// every request of this client is routed through it. Only HTTP(S) proxies
    /// are supported. Proxy settings from the environment are ignored.
    ///
    /// # Errors
    ///
    /// - Return [`RemoteError::Client`] if proxy address is invalid or uses an
    ///   unsupported scheme, or the HTTP client cannot be built.
    pub fn new(settings: &RemoteSettings) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(settings.timeout())
            .user_agent(USER_AGENT);

        // INVARIANT: Only route through a proxy when explicitly configured.
        builder = match &settings.proxy {
            Some(proxy) => {
                let proxy = proxy_url(proxy);
                info!("route requests through proxy {proxy}");
                builder.proxy(Proxy::all(&proxy).map_err(RemoteError::Client)?)
            }
            None => builder.no_proxy(),
        };

        Ok(Self {
            client: builder.build().map_err(RemoteError::Client)?,
            listing_url: settings.listing_url.clone(),
            raw_url: settings.raw_url.trim_end_matches('/').to_owned(),
        })
    }

    /// URL serving raw body of template by canonical name.
    pub fn content_url(&self, canonical: &str) -> String {
        format!("{}/{canonical}{TEMPLATE_SUFFIX}", self.raw_url)
    }

    async fn get(&self, url: &str) -> Result<Response> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| RemoteError::Transport {
                source: err,
                url: url.into(),
            })?;

        match response.status() {
            StatusCode::OK => Ok(response),
            status => Err(RemoteError::Api {
                status,
                url: url.into(),
            }),
        }
    }
}

impl TemplateSource for GitHubClient {
    /// List templates through listing endpoint.
    ///
    /// # Errors
    ///
    /// - Return [`RemoteError::Transport`] if request cannot be completed.
    /// - Return [`RemoteError::Api`] if endpoint responds with non-success.
    /// - Return [`RemoteError::Decode`] if listing payload is malformed.
    #[instrument(skip(self), level = "debug")]
    async fn list_templates(&self) -> Result<Vec<String>> {
        let url = self.listing_url.as_str();
        let entries: Vec<ListingEntry> = self.get(url).await?.json().await.map_err(|err| {
            if err.is_decode() {
                RemoteError::Decode {
                    source: err,
                    url: url.into(),
                }
            } else {
                RemoteError::Transport {
                    source: err,
                    url: url.into(),
                }
            }
        })?;

        Ok(template_names(entries))
    }

    /// Fetch raw template body through content endpoint.
    ///
    /// # Errors
    ///
    /// - Return [`RemoteError::Transport`] if request cannot be completed.
    /// - Return [`RemoteError::Api`] if endpoint responds with non-success.
    #[instrument(skip(self), level = "debug")]
    async fn fetch_raw(&self, canonical: &str) -> Result<Vec<u8>> {
        let url = self.content_url(canonical);
        let body = self
            .get(&url)
            .await?
            .bytes()
            .await
            .map_err(|err| RemoteError::Transport { source: err, url })?;

        Ok(body.to_vec())
    }
}

#[derive(Debug, Deserialize)]
struct ListingEntry {
    name: String,
}

fn template_names(entries: impl IntoIterator<Item = ListingEntry>) -> Vec<String> {
    entries
        .into_iter()
        .filter_map(|entry| entry.name.strip_suffix(TEMPLATE_SUFFIX).map(str::to_owned))
        .collect()
}

fn proxy_url(address: &str) -> String {
    if address.contains("://") {
        address.to_owned()
    } else {
        format!("http://{address}")
    }
}

/// Remote template source error types.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// HTTP client cannot be constructed.
    #[error("failed to construct http client")]
    Client(#[source] reqwest::Error),

    /// Request did not complete.
    #[error("request to {url} failed")]
    Transport {
        #[source]
        source: reqwest::Error,
        url: String,
    },

    /// Remote responded with non-success status.
    #[error("{url} responded with status {status}")]
    Api { status: StatusCode, url: String },

    /// Listing payload is malformed.
    #[error("malformed template listing from {url}")]
    Decode {
        #[source]
        source: reqwest::Error,
        url: String,
    },

    /// No template matches requested name.
    #[error("no template named {name:?}")]
    NotFound { name: String },
}

/// Friendly result alias :3
pub type Result<T, E = RemoteError> = std::result::Result<T, E>;
