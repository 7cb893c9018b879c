//! HTTP client for the commerce-ui component registry.
//!
//! List operations are best-effort: a broken manifest or a single invalid
//! entry must not break the whole listing, so failures yield an empty list
//! and invalid entries are dropped. Detail operations are strict: the
//! caller asked for one named item and must know when it failed.

use std::time::Duration;

use anyhow::{Context as _, Result};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::branding;
use crate::registry::validation;
use crate::registry::{
    BlockDetail, BlockSummary, ComponentDetail, ComponentSummary, ExampleDetail, ExampleSummary,
    KIND_BLOCK, KIND_COMPONENT, KIND_EXAMPLE,
};

/// Client for fetching catalog data from the commerce-ui registry
pub struct RegistryClient {
    registry_file_url: String,
    registry_url: String,
    client: reqwest::Client,
}

impl RegistryClient {
    /// Create a client pointed at the production registry
    pub fn new() -> Self {
        Self::with_base_urls(branding::REGISTRY_FILE_URL, branding::REGISTRY_URL)
    }

    /// Create a client with explicit endpoints (useful for testing)
    pub fn with_base_urls(
        registry_file_url: impl Into<String>,
        registry_url: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("commerce-ui-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            registry_file_url: registry_file_url.into(),
            registry_url: registry_url.into(),
            client,
        }
    }

    /// Fetch the manifest once and return the entries of the requested kind
    async fn fetch_manifest_entries(&self, kind: &str) -> Result<Vec<Value>> {
        debug!("Fetching registry manifest from {}", self.registry_file_url);

        let response = self
            .client
            .get(&self.registry_file_url)
            .send()
            .await
            .context("Failed to request registry manifest")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Registry manifest returned status: {}", status);
        }

        let manifest: Value = response
            .json()
            .await
            .context("Failed to parse registry manifest JSON")?;

        let entries = manifest
            .get("registry")
            .and_then(Value::as_array)
            .context("Registry manifest has no `registry` array")?;

        Ok(entries
            .iter()
            .filter(|entry| entry.get("type").and_then(Value::as_str) == Some(kind))
            .cloned()
            .collect())
    }

    /// Fetch all components listed in the registry manifest.
    ///
    /// Returns an empty list when the manifest is unreachable; drops
    /// entries that fail validation.
    pub async fn fetch_ui_components(&self) -> Vec<ComponentSummary> {
        let entries = match self.fetch_manifest_entries(KIND_COMPONENT).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to fetch component list: {:#}", e);
                return Vec::new();
            }
        };

        let components: Vec<ComponentSummary> = entries
            .iter()
            .filter_map(|entry| match validation::component_summary(entry) {
                Ok(summary) => Some(summary),
                Err(e) => {
                    debug!("Dropping manifest entry: {}", e);
                    None
                }
            })
            .collect();

        info!("Fetched {} components", components.len());
        components
    }

    /// Fetch all blocks listed in the registry manifest; same failure
    /// contract as [`fetch_ui_components`](Self::fetch_ui_components)
    pub async fn fetch_ui_blocks(&self) -> Vec<BlockSummary> {
        let entries = match self.fetch_manifest_entries(KIND_BLOCK).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to fetch block list: {:#}", e);
                return Vec::new();
            }
        };

        let blocks: Vec<BlockSummary> = entries
            .iter()
            .filter_map(|entry| match validation::block_summary(entry) {
                Ok(summary) => Some(summary),
                Err(e) => {
                    debug!("Dropping manifest entry: {}", e);
                    None
                }
            })
            .collect();

        info!("Fetched {} blocks", blocks.len());
        blocks
    }

    /// Fetch all example entries listed in the registry manifest; same
    /// failure contract as the other list operations
    pub async fn fetch_example_summaries(&self) -> Vec<ExampleSummary> {
        let entries = match self.fetch_manifest_entries(KIND_EXAMPLE).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to fetch example list: {:#}", e);
                return Vec::new();
            }
        };

        let examples: Vec<ExampleSummary> = entries
            .iter()
            .filter_map(|entry| match validation::example_summary(entry) {
                Ok(summary) => Some(summary),
                Err(e) => {
                    debug!("Dropping manifest entry: {}", e);
                    None
                }
            })
            .collect();

        info!("Fetched {} example entries", examples.len());
        examples
    }

    /// Fetch the detail document for a named component.
    ///
    /// Strict: a non-2xx response or a schema mismatch is an error the
    /// caller must handle.
    pub async fn fetch_component_detail(&self, component_name: &str) -> Result<ComponentDetail> {
        let url = branding::item_url(&self.registry_url, component_name);
        let value = self.fetch_document(&url, component_name).await?;
        Ok(validation::component_detail(&value)?)
    }

    /// Fetch the detail document for a named block; same contract as
    /// [`fetch_component_detail`](Self::fetch_component_detail) with the
    /// block schema
    pub async fn fetch_block_detail(&self, block_name: &str) -> Result<BlockDetail> {
        let url = branding::item_url(&self.registry_url, block_name);
        let value = self.fetch_document(&url, block_name).await?;
        Ok(validation::block_detail(&value)?)
    }

    /// Fetch the detail document for a named example.
    ///
    /// Example names already carry their full resource identifier, so the
    /// name is used verbatim with no `.json` suffix.
    pub async fn fetch_example_detail(&self, example_name: &str) -> Result<ExampleDetail> {
        let url = branding::example_url(&self.registry_url, example_name);
        let value = self.fetch_document(&url, example_name).await?;
        Ok(validation::example_detail(&value)?)
    }

    async fn fetch_document(&self, url: &str, name: &str) -> Result<Value> {
        debug!("Fetching registry document from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to request registry item {}", name))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Failed to fetch {}: status {}", name, status);
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON for registry item {}", name))
    }
}

impl Default for RegistryClient {
    fn default() -> Self {
        Self::new()
    }
}
