use futures::future::join_all;
use tracing::{info, warn};

use crate::{
    error::Result,
    region_provider::{ProviderName, RegionProvider},
    types::Region,
};

#[derive(Debug)]
pub struct ProviderRegions {
    pub provider_name: ProviderName,
    pub regions: Result<Vec<Region>>,
}

/// Runs every provider lookup and keeps each outcome separately.
pub async fn list_regions(providers: &[&dyn RegionProvider]) -> Vec<ProviderRegions> {
    let lookups = providers.iter().map(|provider| async move {
        let provider_name = provider.get_provider_name();
        let regions = provider.get_regions().await;
        match &regions {
            Ok(regions) => info!(provider = %provider_name, count = regions.len(), "fetched regions"),
            Err(error) => warn!(provider = %provider_name, %error, "region lookup failed"),
        }
        ProviderRegions {
            provider_name,
            regions,
        }
    });
    join_all(lookups).await
}
