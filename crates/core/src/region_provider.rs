use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use async_trait::async_trait;

use crate::{
    error::{ConfigurationError, Error, Result},
    types::Region,
};

#[async_trait]
pub trait RegionProvider: Send + Sync {
    /// Fetches the provider's current region list.
    ///
    /// Issues one outbound request. A successful result is never empty.
    async fn get_regions(&self) -> Result<Vec<Region>>;
    fn get_provider_name(&self) -> ProviderName;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProviderName {
    DigitalOcean,
    Linode,
    Dreamhost,
}

impl ProviderName {
    pub const ALL: [ProviderName; 3] = [
        ProviderName::DigitalOcean,
        ProviderName::Linode,
        ProviderName::Dreamhost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderName::DigitalOcean => "digitalocean",
            ProviderName::Linode => "linode",
            ProviderName::Dreamhost => "dreamhost",
        }
    }
}

impl FromStr for ProviderName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "digitalocean" | "do" => Ok(ProviderName::DigitalOcean),
            "linode" => Ok(ProviderName::Linode),
            "dreamhost" => Ok(ProviderName::Dreamhost),
            e => Err(ConfigurationError::InvalidProvider(e.to_string()).into()),
        }
    }
}

impl Display for ProviderName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
