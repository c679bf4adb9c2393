use regioncheck_core::{
    ProviderName, RegionProvider, Settings,
    error::{Error, NetworkError, ParseError},
};
use regioncheck_linode::LinodeProvider;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const CLUSTERS: &str = r#"{
  "data": [
    {"id": "us-east-1", "domain": "us-east-1.linodeobjects.com", "status": "available", "region": "us-east", "static_site_domain": "website-us-east-1.linodeobjects.com"},
    {"id": "eu-central-1", "domain": "eu-central-1.linodeobjects.com", "status": "available", "region": "eu-central", "static_site_domain": "website-eu-central-1.linodeobjects.com"},
    {"id": "ap-south-1", "domain": "ap-south-1.linodeobjects.com", "status": "available", "region": "ap-south", "static_site_domain": "website-ap-south-1.linodeobjects.com"},
    {"id": "us-southeast-1", "domain": "us-southeast-1.linodeobjects.com", "status": "available", "region": "us-southeast", "static_site_domain": "website-us-southeast-1.linodeobjects.com"}
  ],
  "page": 1,
  "pages": 1,
  "results": 4
}"#;

fn provider_for(server: &MockServer) -> LinodeProvider {
    let settings = Settings {
        linode_url: format!("{}/v4/object-storage/clusters", server.uri()),
        ..Settings::default()
    };
    LinodeProvider::new(&settings).unwrap()
}

#[tokio::test]
async fn test_get_regions_contains_us_east_1() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v4/object-storage/clusters"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string(CLUSTERS),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let regions = provider.get_regions().await.unwrap();

    assert!(!regions.is_empty());
    assert!(regions.iter().any(|region| region == "us-east-1"));
    assert_eq!(regions.len(), 4);
    assert_eq!(provider.get_provider_name(), ProviderName::Linode);
}

#[tokio::test]
async fn test_server_error_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let error = provider_for(&server).get_regions().await.unwrap_err();

    assert!(matches!(
        error,
        Error::Network(NetworkError::UnexpectedStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_html_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let error = provider_for(&server).get_regions().await.unwrap_err();

    assert!(matches!(error, Error::Parse(ParseError::InvalidJson { .. })));
}

#[tokio::test]
#[ignore = "queries the live Linode API"]
async fn test_live_get_regions() {
    let regions = regioncheck_linode::get_regions().await.unwrap();

    assert!(!regions.is_empty());
    assert!(regions.iter().any(|region| region == "us-east-1"));
}
