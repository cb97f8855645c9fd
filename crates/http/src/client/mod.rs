//! Catalog fetch client

pub mod error;

use async_trait::async_trait;
use error::ClientError;
use holocron_core::catalog::{Character, Film, Page, Planet, Species};
use holocron_core::config::CatalogConfig;
use holocron_core::filter::{RelatedResolver, RelationKind};
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
const USER_AGENT: &str = concat!("holocron/", env!("CARGO_PKG_VERSION"));

/// Read-only client for the people catalog and its related resources
///
/// No request is retried here; callers decide whether to fetch again.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    people_path: String,
}

impl CatalogClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self, ClientError> {
        Self::builder()
            .base_url(config.base_url.clone())
            .people_path(config.people_path.clone())
            .build()
    }

    pub fn builder() -> CatalogClientBuilder {
        CatalogClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the first people page
    pub fn people_url(&self) -> String {
        self.resolve(&self.people_path)
    }

    /// Fetch one page of characters
    ///
    /// `url` is normally [`Self::people_url`] or a `next`/`previous` link
    /// from a previous page.
    pub async fn fetch_page(&self, url: &str) -> Result<Page<Character>, ClientError> {
        self.get_json(url).await
    }

    /// Fetch any related resource as raw JSON
    pub async fn fetch_related(&self, url: &str) -> Result<Value, ClientError> {
        self.get_json(url).await
    }

    pub async fn fetch_homeworld(&self, url: &str) -> Result<Planet, ClientError> {
        self.get_json(url).await
    }

    pub async fn fetch_film(&self, url: &str) -> Result<Film, ClientError> {
        self.get_json(url).await
    }

    pub async fn fetch_species(&self, url: &str) -> Result<Species, ClientError> {
        self.get_json(url).await
    }

    pub async fn fetch_character(&self, url: &str) -> Result<Character, ClientError> {
        self.get_json(url).await
    }

    /// Absolute URLs pass through, anything else is joined onto the base
    fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}/{}", self.base_url, url.trim_start_matches('/'))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let url = self.resolve(url);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            tracing::debug!(%url, status = status.as_u16(), "Request rejected");
            Err(ClientError::from_status(status, message))
        }
    }
}

#[async_trait(?Send)]
impl RelatedResolver for CatalogClient {
    type Error = ClientError;

    async fn resolve_name(
        &self,
        kind: RelationKind,
        url: &str,
    ) -> Result<Option<String>, Self::Error> {
        let field = match kind {
            RelationKind::Film => "title",
            RelationKind::Homeworld | RelationKind::Species => "name",
        };
        let resource = self.fetch_related(url).await?;
        Ok(resource
            .get(field)
            .and_then(Value::as_str)
            .map(str::to_string))
    }
}

/// Builder for [`CatalogClient`]
#[derive(Default)]
pub struct CatalogClientBuilder {
    base_url: Option<String>,
    people_path: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl CatalogClientBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn people_path(mut self, path: impl Into<String>) -> Self {
        self.people_path = Some(path.into());
        self
    }

    /// Request timeout; ignored in the browser
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<CatalogClient, ClientError> {
        let base_url = self.base_url.unwrap_or_else(|| CatalogConfig::DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Configuration("base_url must not be empty".into()));
        }

        let people_path = self
            .people_path
            .unwrap_or_else(|| CatalogConfig::default().people_path);

        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            let mut builder = ClientBuilder::new()
                .user_agent(self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()));
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build()?
        };

        // Browsers own the user agent and timeouts
        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = (self.timeout, self.user_agent);
            ClientBuilder::new().build()?
        };

        Ok(CatalogClient {
            client,
            base_url,
            people_path,
        })
    }
}
