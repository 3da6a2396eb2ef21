use serde::{Deserialize, Serialize};

/// One entry of the services file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceSettings {
    pub alias: String,
    pub description: String,
    /// Path or http(s) URL of the description document
    pub osdd: String,
    /// Content type used when a request doesn't name one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde() {
        let settings = ServiceSettings {
            alias: "nsidc".to_string(),
            description: "test".to_string(),
            osdd: "descriptions/nsidc.xml".to_string(),
            content_type: Some("application/atom+xml".to_string()),
        };

        let yml = serde_yaml::to_string(&settings).unwrap();
        let deserde: ServiceSettings = serde_yaml::from_str(&yml).unwrap();
        assert_eq!(settings, deserde);
    }

    #[test]
    fn test_skip_none_content_type() {
        let settings = ServiceSettings {
            alias: "w".to_string(),
            description: "Wiki".to_string(),
            osdd: "https://example.com/osdd.xml".to_string(),
            content_type: None,
        };

        let yml = serde_yaml::to_string(&settings).unwrap();
        assert!(!yml.contains("content_type:"));
        assert!(yml.contains("osdd:"));

        let json = serde_json::to_string(&settings).unwrap();
        assert!(!json.contains("\"content_type\""));
    }

    #[test]
    fn test_content_type_is_optional_in_yaml() {
        let yml = "alias: w\ndescription: Wiki\nosdd: w.xml\n";
        let settings: ServiceSettings = serde_yaml::from_str(yml).unwrap();
        assert_eq!(settings.content_type, None);
    }
}
