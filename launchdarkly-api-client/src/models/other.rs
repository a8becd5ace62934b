use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Link;

/// The API root: links to the top level resources.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
    /// Links to the top level resources, keyed by name.
    pub links: HashMap<String, Link>,
}

/// Public IP ranges LaunchDarkly sends traffic from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpList {
    /// Address ranges used by the LaunchDarkly application.
    pub addresses: Vec<String>,
    /// Address ranges used for outbound webhook and integration traffic.
    pub outbound_addresses: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_links_decode_by_name() {
        let root: RootResponse = serde_json::from_value(json!({
            "links": {
                "projects": {"href": "/api/v2/projects", "type": "application/json"},
                "self": {"href": "/api/v2"}
            }
        }))
        .unwrap();

        assert_eq!(2, root.links.len());
        assert_eq!(Some("/api/v2"), root.links["self"].href.as_deref());
        assert_eq!(None, root.links["self"].r#type);
    }

    #[test]
    fn ip_list_requires_both_ranges() {
        let result = serde_json::from_value::<IpList>(json!({"addresses": ["104.156.80.0/20"]}));
        assert!(result.is_err());
    }
}
