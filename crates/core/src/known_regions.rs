use std::collections::BTreeSet;

use crate::{region_provider::ProviderName, types::Region};

const DIGITALOCEAN: &[&str] = &[
    "ams3", "blr1", "fra1", "lon1", "nyc3", "sfo2", "sfo3", "sgp1", "syd1",
];

const LINODE: &[&str] = &[
    "ap-south-1",
    "eu-central-1",
    "us-east-1",
    "us-southeast-1",
    "us-iad-1",
    "fr-par-1",
    "us-ord-1",
    "se-sto-1",
    "in-maa-1",
    "jp-osa-1",
    "it-mil-1",
    "us-mia-1",
    "id-cgk-1",
    "us-lax-1",
    "es-mad-1",
    "nl-ams-1",
    "us-sea-1",
    "br-gru-1",
];

const DREAMHOST: &[&str] = &["us-east-1"];

/// Regions the bucket scanner currently ships for each provider.
pub fn known_regions(provider_name: ProviderName) -> &'static [&'static str] {
    match provider_name {
        ProviderName::DigitalOcean => DIGITALOCEAN,
        ProviderName::Linode => LINODE,
        ProviderName::Dreamhost => DREAMHOST,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionDrift {
    /// Live at the provider but missing from the known table.
    pub added: Vec<Region>,
    /// In the known table but no longer reported by the provider.
    pub removed: Vec<Region>,
}

impl RegionDrift {
    pub fn between(known: &[&str], live: &[Region]) -> Self {
        let known: BTreeSet<&str> = known.iter().copied().collect();
        let live: BTreeSet<&str> = live.iter().map(Region::as_str).collect();

        Self {
            added: live.difference(&known).map(|id| Region::new(*id)).collect(),
            removed: known.difference(&live).map(|id| Region::new(*id)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
