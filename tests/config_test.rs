// Loading the services file and the descriptions it points at

use searchlight::{config::services::ServicesConfig, domain::SearchParams};

#[tokio::test]
async fn test_build_state_from_bundled_config() {
    let state = searchlight::build_state(Some("services.yml"), "w").await.unwrap();
    let service = &state.search_service;

    let aliases: Vec<&str> = service.services().iter().map(|s| s.alias.as_str()).collect();
    assert_eq!(aliases, vec!["nsidc", "w"]);
    assert_eq!(service.default_alias(), "w");

    let nsidc = service.get("nsidc").unwrap();
    assert_eq!(nsidc.default_content_type.as_deref(), Some("text/html"));
    assert_eq!(nsidc.osdd.templates().unwrap().len(), 4);

    let resolved = service
        .resolve("nsidc", None, &SearchParams::new().with("searchTerms", "albedo"))
        .unwrap();
    assert_eq!(resolved.url, "https://nsidc.org/data/search/#keywords=albedo");
}

#[tokio::test]
async fn test_missing_services_file() {
    let err = searchlight::build_state(Some("does-not-exist.yml"), "w")
        .await
        .err()
        .unwrap();
    assert!(err.to_string().contains("does-not-exist.yml"));
}

#[test]
fn test_duplicate_alias_in_config() {
    let yml = "\
- alias: w
  description: one
  osdd: descriptions/wikipedia.xml
- alias: w
  description: two
  osdd: descriptions/wikipedia.xml
";
    assert!(ServicesConfig::parse(yml).is_err());
}
