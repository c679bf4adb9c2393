use regioncheck_core::{RegionProvider, commands::list::list_regions, types::Region};

use crate::error::CommandError;

pub async fn list(providers: &[&dyn RegionProvider]) -> Result<(), CommandError> {
    let listings = list_regions(providers).await;

    let mut failed = 0;
    for listing in &listings {
        match &listing.regions {
            Ok(regions) => println!("{}: {}", listing.provider_name, join(regions)),
            Err(error) => {
                eprintln!("{}: {}", listing.provider_name, error);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(CommandError::LookupsFailed {
            failed,
            total: listings.len(),
        });
    }
    Ok(())
}

pub(crate) fn join(regions: &[Region]) -> String {
    regions
        .iter()
        .map(Region::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use regioncheck_core::ProviderName;

    use super::*;
    use crate::test_support::{StaticProvider, UnreachableProvider};

    #[tokio::test]
    async fn test_list_succeeds_when_every_lookup_does() {
        let linode = StaticProvider {
            provider_name: ProviderName::Linode,
            regions: &["us-east-1"],
        };
        let providers: [&dyn RegionProvider; 1] = [&linode];

        assert_eq!(list(&providers).await, Ok(()));
    }

    #[tokio::test]
    async fn test_list_fails_when_a_lookup_fails() {
        let linode = StaticProvider {
            provider_name: ProviderName::Linode,
            regions: &["us-east-1"],
        };
        let dreamhost = UnreachableProvider(ProviderName::Dreamhost);
        let providers: [&dyn RegionProvider; 2] = [&linode, &dreamhost];

        assert_eq!(
            list(&providers).await,
            Err(CommandError::LookupsFailed {
                failed: 1,
                total: 2
            })
        );
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&[Region::new("nyc3"), Region::new("ams3")]), "nyc3, ams3");
    }
}
