use regioncheck_core::{
    error::{ParseError, Result},
    types::{Region, dedup_regions},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ClustersResponse {
    data: Vec<Cluster>,
}

#[derive(Debug, Deserialize)]
struct Cluster {
    id: Region,
}

pub(crate) fn parse_regions(body: &str, url: &str) -> Result<Vec<Region>> {
    let response: ClustersResponse =
        serde_json::from_str(body).map_err(|error| ParseError::InvalidJson {
            url: url.to_string(),
            reason: error.to_string(),
        })?;

    let regions = dedup_regions(response.data.into_iter().map(|cluster| cluster.id));
    if regions.is_empty() {
        return Err(ParseError::NoRegionsFound {
            url: url.to_string(),
        }
        .into());
    }
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regioncheck_core::error::Error;

    #[test]
    fn test_reads_cluster_ids_in_order() {
        let body = r#"{
            "data": [
                {"id": "us-east-1", "region": "us-east", "status": "available", "domain": "us-east-1.linodeobjects.com"},
                {"id": "eu-central-1", "region": "eu-central", "status": "available"}
            ],
            "page": 1,
            "pages": 1,
            "results": 2
        }"#;

        let regions = parse_regions(body, "https://api.example/").unwrap();
        let ids: Vec<&str> = regions.iter().map(Region::as_str).collect();
        assert_eq!(ids, ["us-east-1", "eu-central-1"]);
    }

    #[test]
    fn test_empty_data_is_no_regions() {
        let error = parse_regions(r#"{"data": [], "page": 1, "pages": 1, "results": 0}"#, "u")
            .unwrap_err();
        assert!(matches!(
            error,
            Error::Parse(ParseError::NoRegionsFound { .. })
        ));
    }

    #[test]
    fn test_missing_data_is_invalid_json() {
        let error = parse_regions(r#"{"errors": [{"reason": "Not found"}]}"#, "u").unwrap_err();
        assert!(matches!(error, Error::Parse(ParseError::InvalidJson { .. })));
    }
}
