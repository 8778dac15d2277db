//! Reference tables translating portal codes into authority IRIs
//!
//! All seven tables are loaded once, up front, and never change
//! afterwards. Every lookup returns `Option`: a missing key means "leave
//! the baseline profile alone", never an error.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::error::ProfileError;
use crate::loader::TableProvider;

/// The reference tables the profile needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Algorithms,
    Categories,
    Formats,
    Geocodings,
    HvdCategories,
    Languages,
    Licenses,
}

impl TableKind {
    pub const ALL: [TableKind; 7] = [
        TableKind::Algorithms,
        TableKind::Categories,
        TableKind::Formats,
        TableKind::Geocodings,
        TableKind::HvdCategories,
        TableKind::Languages,
        TableKind::Licenses,
    ];

    /// File name of the table inside a mappings directory or archive
    pub fn file_name(self) -> &'static str {
        match self {
            TableKind::Algorithms => "algorithms.json",
            TableKind::Categories => "categories.json",
            TableKind::Formats => "formats.json",
            TableKind::Geocodings => "geocodings.json",
            TableKind::HvdCategories => "hvd-categories.json",
            TableKind::Languages => "languages.json",
            TableKind::Licenses => "licenses.json",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TableKind::Algorithms => "algorithms",
            TableKind::Categories => "categories",
            TableKind::Formats => "formats",
            TableKind::Geocodings => "geocodings",
            TableKind::HvdCategories => "hvd-categories",
            TableKind::Languages => "languages",
            TableKind::Licenses => "licenses",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormatEntry {
    pub uri: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodingEntry {
    #[serde(rename = "politicalGeocodingLevelURI")]
    pub level_uri: Option<String>,
    #[serde(rename = "politicalGeocodingURI")]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LicenseEntry {
    #[serde(rename = "dcatde-id")]
    pub dcatde_id: String,
}

/// Immutable bundle of all reference tables
#[derive(Debug, Clone, Default)]
pub struct MappingTables {
    algorithms: HashMap<String, String>,
    categories: HashMap<String, Vec<String>>,
    formats: HashMap<String, FormatEntry>,
    geocodings: HashMap<String, GeocodingEntry>,
    hvd_categories: HashMap<String, String>,
    languages: HashMap<String, String>,
    licenses: HashMap<String, LicenseEntry>,
}

impl MappingTables {
    /// Fetch and parse every table from a provider
    ///
    /// Any missing or malformed table aborts loading.
    pub fn load(provider: &dyn TableProvider) -> Result<Self, ProfileError> {
        let categories: HashMap<String, Option<Vec<String>>> =
            parse(provider, TableKind::Categories)?;
        let hvd_categories: HashMap<String, Option<String>> =
            parse(provider, TableKind::HvdCategories)?;

        let tables = MappingTables {
            algorithms: parse(provider, TableKind::Algorithms)?,
            categories: categories
                .into_iter()
                .filter_map(|(group, themes)| themes.map(|t| (group, t)))
                .collect(),
            formats: parse(provider, TableKind::Formats)?,
            geocodings: parse(provider, TableKind::Geocodings)?,
            hvd_categories: hvd_categories
                .into_iter()
                .filter_map(|(group, uri)| uri.map(|u| (group, u)))
                .collect(),
            languages: parse(provider, TableKind::Languages)?,
            licenses: parse(provider, TableKind::Licenses)?,
        };

        tracing::debug!(
            "Loaded mapping tables: {} categories, {} formats, {} licenses, {} languages",
            tables.categories.len(),
            tables.formats.len(),
            tables.licenses.len(),
            tables.languages.len()
        );

        Ok(tables)
    }

    /// Algorithm IRI for a checksum algorithm code (e.g. `sha256`)
    pub fn algorithm(&self, code: &str) -> Option<&str> {
        self.algorithms.get(code).map(String::as_str)
    }

    /// Data theme fragments for a portal group; `None` when unmapped or empty
    pub fn themes(&self, group: &str) -> Option<&[String]> {
        self.categories
            .get(group)
            .map(Vec::as_slice)
            .filter(|themes| !themes.is_empty())
    }

    /// Format IRI for a raw format string
    pub fn format_uri(&self, format: &str) -> Option<&str> {
        self.formats.get(format).map(|entry| entry.uri.as_str())
    }

    pub fn geocoding(&self, text: &str) -> Option<&GeocodingEntry> {
        self.geocodings.get(text)
    }

    /// High-value category IRI for a portal group; an empty mapping counts as none
    pub fn hvd_category(&self, group: &str) -> Option<&str> {
        self.hvd_categories
            .get(group)
            .map(String::as_str)
            .filter(|uri| !uri.is_empty())
    }

    /// Language authority fragment for a locale code
    pub fn language(&self, locale: &str) -> Option<&str> {
        self.languages.get(locale).map(String::as_str)
    }

    /// DCAT-AP.de license id for a portal license id
    pub fn license(&self, license_id: &str) -> Option<&str> {
        self.licenses
            .get(license_id)
            .map(|entry| entry.dcatde_id.as_str())
    }
}

fn parse<T: DeserializeOwned>(
    provider: &dyn TableProvider,
    kind: TableKind,
) -> Result<T, ProfileError> {
    let content = provider.fetch(kind)?;
    serde_json::from_str(&content).map_err(|source| ProfileError::MalformedTable {
        table: kind.name(),
        source,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::loader::TableSource;
    use serde_json::json;

    /// Small but complete set of tables shared by the engine tests
    pub(crate) fn sample_source() -> TableSource {
        TableSource::in_memory([
            (
                TableKind::Algorithms,
                json!({"sha256": "http://spdx.org/rdf/terms#checksumAlgorithm_sha256"}),
            ),
            (
                TableKind::Categories,
                json!({
                    "umwelt": ["ENVI"],
                    "verkehr": ["TRAN", "REGI"],
                    "sonstiges": null,
                    "leer": []
                }),
            ),
            (
                TableKind::Formats,
                json!({
                    "CSV": {"uri": "http://publications.europa.eu/resource/authority/file-type/CSV"},
                    "GeoJSON": {"uri": "http://publications.europa.eu/resource/authority/file-type/GEOJSON"}
                }),
            ),
            (
                TableKind::Geocodings,
                json!({
                    "Rostock": {
                        "politicalGeocodingLevelURI": "http://dcat-ap.de/def/politicalGeocoding/Level/municipality",
                        "politicalGeocodingURI": "http://dcat-ap.de/def/politicalGeocoding/municipalityKey/130030000000"
                    },
                    "Warnemünde": {
                        "politicalGeocodingLevelURI": "http://dcat-ap.de/def/politicalGeocoding/Level/municipality"
                    }
                }),
            ),
            (
                TableKind::HvdCategories,
                json!({
                    "umwelt": "http://data.europa.eu/bna/c_dd313021",
                    "verkehr": "http://data.europa.eu/bna/c_b79e35eb",
                    "sonstiges": "",
                    "kultur": null,
                    "baustellen": "kein gültiger bezeichner"
                }),
            ),
            (TableKind::Languages, json!({"de": "DEU", "en": "ENG"})),
            (
                TableKind::Licenses,
                json!({
                    "cc-by": {"dcatde-id": "cc-by-de/4.0", "title": "CC BY 4.0"},
                    "cc-zero": {"dcatde-id": "cc-zero"}
                }),
            ),
        ])
    }

    pub(crate) fn sample_tables() -> MappingTables {
        MappingTables::load(&sample_source()).unwrap()
    }

    #[test]
    fn test_lookups() {
        let tables = sample_tables();
        assert_eq!(tables.language("de"), Some("DEU"));
        assert_eq!(tables.license("cc-by"), Some("cc-by-de/4.0"));
        assert_eq!(tables.themes("verkehr").map(|t| t.len()), Some(2));
        assert_eq!(
            tables.format_uri("CSV"),
            Some("http://publications.europa.eu/resource/authority/file-type/CSV")
        );
        assert!(tables.algorithm("sha256").is_some());
        assert!(tables.geocoding("Rostock").is_some());
    }

    #[test]
    fn test_missing_keys_are_none() {
        let tables = sample_tables();
        assert_eq!(tables.language("fr"), None);
        assert_eq!(tables.license("proprietary"), None);
        assert_eq!(tables.format_uri("XLSX"), None);
        assert_eq!(tables.algorithm("md5"), None);
        assert!(tables.geocoding("Berlin").is_none());
    }

    #[test]
    fn test_empty_mappings_are_none() {
        let tables = sample_tables();
        assert_eq!(tables.hvd_category("sonstiges"), None);
        assert_eq!(tables.hvd_category("kultur"), None);
        assert_eq!(tables.themes("sonstiges"), None);
        assert_eq!(tables.themes("leer"), None);
    }

    #[test]
    fn test_partial_geocoding_entry() {
        let tables = sample_tables();
        let entry = tables.geocoding("Warnemünde").unwrap();
        assert!(entry.level_uri.is_some());
        assert!(entry.uri.is_none());
    }

    #[test]
    fn test_malformed_table_is_fatal() {
        let source = TableSource::in_memory(
            TableKind::ALL
                .into_iter()
                .map(|kind| (kind, json!({})))
                .chain([(TableKind::Licenses, json!({"cc-by": {"title": "no id"}}))]),
        );
        let err = MappingTables::load(&source).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::MalformedTable { table: "licenses", .. }
        ));
    }

    #[test]
    fn test_missing_table_is_fatal() {
        let source = TableSource::in_memory([(TableKind::Languages, json!({"de": "DEU"}))]);
        assert!(matches!(
            MappingTables::load(&source),
            Err(ProfileError::TableLoad { .. })
        ));
    }

    #[test]
    fn test_file_names() {
        assert_eq!(TableKind::HvdCategories.file_name(), "hvd-categories.json");
        assert_eq!(TableKind::ALL.len(), 7);
    }
}
