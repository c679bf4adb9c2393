use regex::Regex;
use regioncheck_core::{
    error::{ParseError, Result},
    types::{Region, dedup_regions},
};

/// DreamObjects endpoints are published as `objects-<region>.dream.io`.
const ENDPOINT_PATTERN: &str = r"(?i)objects-([a-z0-9]+(?:-[a-z0-9]+)*)\.dream\.io";

pub(crate) fn parse_regions(body: &str, url: &str) -> Result<Vec<Region>> {
    let endpoint_pattern =
        Regex::new(ENDPOINT_PATTERN).map_err(|error| ParseError::InvalidPattern {
            pattern: ENDPOINT_PATTERN.to_string(),
            reason: error.to_string(),
        })?;

    let regions = dedup_regions(
        endpoint_pattern
            .captures_iter(body)
            .filter_map(|captures| captures.get(1))
            .map(|region| region.as_str().to_lowercase()),
    );

    if regions.is_empty() {
        return Err(ParseError::NoRegionsFound {
            url: url.to_string(),
        }
        .into());
    }
    Ok(regions)
}
