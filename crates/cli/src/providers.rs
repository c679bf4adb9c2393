use regioncheck_core::{ProviderName, RegionProvider, Settings, error::Result};
use regioncheck_digitalocean::DigitalOceanProvider;
use regioncheck_dreamhost::DreamhostProvider;
use regioncheck_linode::LinodeProvider;

/// Builds the requested providers in the order given; an empty selection
/// means every provider.
pub fn build_providers(
    settings: &Settings,
    selection: &[ProviderName],
) -> Result<Vec<Box<dyn RegionProvider>>> {
    let requested = if selection.is_empty() {
        &ProviderName::ALL[..]
    } else {
        selection
    };

    let mut names: Vec<ProviderName> = Vec::new();
    for name in requested {
        if !names.contains(name) {
            names.push(*name);
        }
    }

    names
        .into_iter()
        .map(|name| -> Result<Box<dyn RegionProvider>> {
            let provider: Box<dyn RegionProvider> = match name {
                ProviderName::DigitalOcean => Box::new(DigitalOceanProvider::new(settings)?),
                ProviderName::Linode => Box::new(LinodeProvider::new(settings)?),
                ProviderName::Dreamhost => Box::new(DreamhostProvider::new(settings)?),
            };
            Ok(provider)
        })
        .collect()
}

pub fn as_dyn(providers: &[Box<dyn RegionProvider>]) -> Vec<&dyn RegionProvider> {
    providers.iter().map(|provider| provider.as_ref()).collect()
}
