//! Linode region lookup via the public object-storage clusters API.

mod parser;
mod provider;

pub use provider::LinodeProvider;
use regioncheck_core::{RegionProvider, Settings, error::Result, types::Region};

/// Fetches the Linode object-storage regions from the default endpoint.
pub async fn get_regions() -> Result<Vec<Region>> {
    LinodeProvider::new(&Settings::default())?.get_regions().await
}
