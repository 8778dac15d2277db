//! Native dataset and resource records supplied by the portal
//!
//! Only the fields the profile reads are modelled; everything else in the
//! portal's JSON is ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Group (category) membership of a dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
}

/// Free-form key/value pair attached to a dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// One dataset as stored by the portal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub uri: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub author_email: Option<String>,
    pub maintainer: Option<String>,
    pub maintainer_email: Option<String>,
    pub license_id: Option<String>,
    pub spatial: Option<String>,
    pub spatial_text: Option<String>,
    pub temporal_coverage_from: Option<String>,
    pub temporal_coverage_to: Option<String>,
    /// JSON-encoded object, e.g. `{"attribution_text": "..."}`
    pub terms_of_use: Option<String>,
    pub groups: Vec<Group>,
    pub extras: Vec<Extra>,
    pub resources: Vec<ResourceRecord>,
}

/// One resource (distribution) as stored by the portal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceRecord {
    pub id: Option<String>,
    pub package_id: Option<String>,
    pub uri: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub format: Option<String>,
    pub hash: Option<String>,
    pub created: Option<String>,
    pub last_modified: Option<String>,
    pub resource_type: Option<String>,
}

/// Treat empty strings the same as missing values
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl DatasetRecord {
    /// Look up an extra by key
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extras
            .iter()
            .find(|e| e.key == key)
            .and_then(|e| non_empty(&e.value))
    }

    /// Read a scalar field, falling back to the extra of the same name
    fn field<'a>(&'a self, value: &'a Option<String>, key: &str) -> Option<&'a str> {
        non_empty(value).or_else(|| self.extra(key))
    }

    pub fn author(&self) -> Option<&str> {
        self.field(&self.author, "author")
    }

    pub fn author_email(&self) -> Option<&str> {
        self.field(&self.author_email, "author_email")
    }

    pub fn maintainer(&self) -> Option<&str> {
        self.field(&self.maintainer, "maintainer")
    }

    pub fn maintainer_email(&self) -> Option<&str> {
        self.field(&self.maintainer_email, "maintainer_email")
    }

    pub fn license_id(&self) -> Option<&str> {
        self.field(&self.license_id, "license_id")
    }

    pub fn spatial(&self) -> Option<&str> {
        self.field(&self.spatial, "spatial")
    }

    pub fn spatial_text(&self) -> Option<&str> {
        self.field(&self.spatial_text, "spatial_text")
    }

    pub fn temporal_coverage_from(&self) -> Option<&str> {
        self.field(&self.temporal_coverage_from, "temporal_coverage_from")
    }

    pub fn temporal_coverage_to(&self) -> Option<&str> {
        self.field(&self.temporal_coverage_to, "temporal_coverage_to")
    }

    pub fn terms_of_use(&self) -> Option<&str> {
        self.field(&self.terms_of_use, "terms_of_use")
    }

    /// Group names in their given order
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }
}

impl ResourceRecord {
    pub fn url(&self) -> Option<&str> {
        non_empty(&self.url)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    pub fn hash(&self) -> Option<&str> {
        non_empty(&self.hash)
    }

    pub fn created(&self) -> Option<&str> {
        non_empty(&self.created)
    }

    pub fn last_modified(&self) -> Option<&str> {
        non_empty(&self.last_modified)
    }

    /// Whether the resource is an uploaded file (as opposed to a link or API)
    pub fn is_file(&self) -> bool {
        self.resource_type.as_deref() == Some("file")
    }
}

/// Canonical URI of a dataset
///
/// The dataset's own `uri` wins; otherwise it is derived from the
/// catalog base URI and the dataset id.
pub fn dataset_uri(dataset: &DatasetRecord, base_uri: Option<&str>) -> Option<String> {
    if let Some(uri) = explicit_uri(&dataset.uri) {
        return Some(uri.to_string());
    }
    let base = base_uri?;
    let id = non_empty(&dataset.id)?;
    Some(format!("{}/dataset/{}", base.trim_end_matches('/'), id))
}

/// Canonical URI of a resource, the key used to find its distribution node
///
/// The resource's own `uri` wins; otherwise
/// `<base>/dataset/<package_id>/resource/<id>`. Returns `None` when the
/// URI cannot be built.
pub fn resource_uri(
    resource: &ResourceRecord,
    dataset_id: Option<&str>,
    base_uri: Option<&str>,
) -> Option<String> {
    if let Some(uri) = explicit_uri(&resource.uri) {
        return Some(uri.to_string());
    }
    let base = base_uri?;
    let package_id = non_empty(&resource.package_id).or(dataset_id)?;
    let id = non_empty(&resource.id)?;
    Some(format!(
        "{}/dataset/{}/resource/{}",
        base.trim_end_matches('/'),
        package_id,
        id
    ))
}

/// An explicit `uri` field; the portal stores the string "None" for unset values
fn explicit_uri(uri: &Option<String>) -> Option<&str> {
    non_empty(uri).filter(|u| *u != "None")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_partial_record() {
        let record: DatasetRecord = serde_json::from_value(json!({
            "id": "abc",
            "license_id": "cc-by",
            "groups": [{"name": "umwelt", "title": "Umwelt"}],
            "resources": [{"id": "r1", "url": "https://example.org/a.csv", "size": 12}],
            "num_tags": 3
        }))
        .unwrap();

        assert_eq!(record.license_id(), Some("cc-by"));
        assert_eq!(record.group_names().collect::<Vec<_>>(), vec!["umwelt"]);
        assert_eq!(record.resources.len(), 1);
        assert_eq!(record.maintainer(), None);
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let record = DatasetRecord {
            author: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(record.author(), None);
    }

    #[test]
    fn test_extras_fallback() {
        let record = DatasetRecord {
            spatial_text: None,
            extras: vec![Extra {
                key: "spatial_text".to_string(),
                value: Some("Rostock".to_string()),
            }],
            ..Default::default()
        };
        assert_eq!(record.spatial_text(), Some("Rostock"));
    }

    #[test]
    fn test_direct_field_wins_over_extra() {
        let record = DatasetRecord {
            maintainer: Some("Stadt".to_string()),
            extras: vec![Extra {
                key: "maintainer".to_string(),
                value: Some("Other".to_string()),
            }],
            ..Default::default()
        };
        assert_eq!(record.maintainer(), Some("Stadt"));
    }

    #[test]
    fn test_resource_uri_derived() {
        let resource = ResourceRecord {
            id: Some("r1".to_string()),
            package_id: Some("d1".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resource_uri(&resource, None, Some("https://www.opendata-hro.de/")),
            Some("https://www.opendata-hro.de/dataset/d1/resource/r1".to_string())
        );
    }

    #[test]
    fn test_resource_uri_explicit() {
        let resource = ResourceRecord {
            id: Some("r1".to_string()),
            uri: Some("https://example.org/dist/1".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resource_uri(&resource, None, None),
            Some("https://example.org/dist/1".to_string())
        );
    }

    #[test]
    fn test_resource_uri_none_string_ignored() {
        let resource = ResourceRecord {
            id: Some("r1".to_string()),
            uri: Some("None".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resource_uri(&resource, Some("d1"), Some("https://example.org")),
            Some("https://example.org/dataset/d1/resource/r1".to_string())
        );
        assert_eq!(resource_uri(&resource, Some("d1"), None), None);
    }

    #[test]
    fn test_dataset_uri() {
        let dataset = DatasetRecord {
            id: Some("d1".to_string()),
            ..Default::default()
        };
        assert_eq!(
            dataset_uri(&dataset, Some("https://example.org/")),
            Some("https://example.org/dataset/d1".to_string())
        );
        assert_eq!(dataset_uri(&dataset, None), None);
    }

    #[test]
    fn test_is_file() {
        let mut resource = ResourceRecord::default();
        assert!(!resource.is_file());
        resource.resource_type = Some("api".to_string());
        assert!(!resource.is_file());
        resource.resource_type = Some("file".to_string());
        assert!(resource.is_file());
    }
}
