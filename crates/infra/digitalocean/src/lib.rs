//! DigitalOcean region lookup.
//!
//! DigitalOcean publishes datacenter availability as HTML tables on its
//! documentation site; region slugs such as `nyc3` are read from the table
//! cells.

mod parser;
mod provider;

pub use provider::DigitalOceanProvider;
use regioncheck_core::{RegionProvider, Settings, error::Result, types::Region};

/// Fetches the DigitalOcean region list from the default endpoint.
pub async fn get_regions() -> Result<Vec<Region>> {
    DigitalOceanProvider::new(&Settings::default())?
        .get_regions()
        .await
}
