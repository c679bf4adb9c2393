use tracing::info;

use crate::{
    commands::list::list_regions,
    error::Result,
    known_regions::{RegionDrift, known_regions},
    region_provider::{ProviderName, RegionProvider},
};

#[derive(Debug)]
pub struct RegionReport {
    pub provider_name: ProviderName,
    pub drift: Result<RegionDrift>,
}

impl RegionReport {
    pub fn has_drift(&self) -> bool {
        matches!(&self.drift, Ok(drift) if !drift.is_empty())
    }
}

pub async fn check_regions(providers: &[&dyn RegionProvider]) -> Vec<RegionReport> {
    list_regions(providers)
        .await
        .into_iter()
        .map(|listing| {
            let provider_name = listing.provider_name;
            let drift = listing.regions.map(|live| {
                let drift = RegionDrift::between(known_regions(provider_name), &live);
                info!(
                    provider = %provider_name,
                    added = drift.added.len(),
                    removed = drift.removed.len(),
                    "compared against known regions"
                );
                drift
            });
            RegionReport {
                provider_name,
                drift,
            }
        })
        .collect()
}
