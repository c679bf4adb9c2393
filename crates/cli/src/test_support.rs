use async_trait::async_trait;
use regioncheck_core::{
    ProviderName, Region, RegionProvider,
    error::{NetworkError, Result},
};

pub struct StaticProvider {
    pub provider_name: ProviderName,
    pub regions: &'static [&'static str],
}

#[async_trait]
impl RegionProvider for StaticProvider {
    async fn get_regions(&self) -> Result<Vec<Region>> {
        Ok(self.regions.iter().map(|id| Region::new(*id)).collect())
    }

    fn get_provider_name(&self) -> ProviderName {
        self.provider_name
    }
}

pub struct UnreachableProvider(pub ProviderName);

#[async_trait]
impl RegionProvider for UnreachableProvider {
    async fn get_regions(&self) -> Result<Vec<Region>> {
        Err(NetworkError::Timeout {
            url: "http://localhost/".to_string(),
        }
        .into())
    }

    fn get_provider_name(&self) -> ProviderName {
        self.0
    }
}
