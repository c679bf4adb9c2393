//! Dreamhost (DreamObjects) region lookup.

mod parser;
mod provider;

pub use provider::DreamhostProvider;
use regioncheck_core::{RegionProvider, Settings, error::Result, types::Region};

/// Fetches the DreamObjects regions from the default endpoint.
pub async fn get_regions() -> Result<Vec<Region>> {
    DreamhostProvider::new(&Settings::default())?
        .get_regions()
        .await
}
