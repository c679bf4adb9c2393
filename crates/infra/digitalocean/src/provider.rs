use async_trait::async_trait;
use regioncheck_core::{
    ProviderName, RegionProvider, Settings,
    error::Result,
    http::{build_client, fetch_text},
    types::Region,
};
use reqwest::Client;
use tracing::debug;

use crate::parser;

pub struct DigitalOceanProvider {
    client: Client,
    url: String,
}

impl DigitalOceanProvider {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = build_client(settings)?;
        Ok(Self::with_endpoint(
            client,
            settings.endpoint(ProviderName::DigitalOcean),
        ))
    }

    pub fn with_endpoint(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl RegionProvider for DigitalOceanProvider {
    async fn get_regions(&self) -> Result<Vec<Region>> {
        let body = fetch_text(&self.client, &self.url).await?;
        let regions = parser::parse_regions(&body, &self.url)?;
        debug!(url = %self.url, count = regions.len(), "parsed DigitalOcean regions");
        Ok(regions)
    }

    fn get_provider_name(&self) -> ProviderName {
        ProviderName::DigitalOcean
    }
}
