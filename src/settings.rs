//! Host settings consumed by the profile

use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;
use url::Url;

use crate::error::ProfileError;
use crate::record::non_empty;

/// Prefix of environment variables overriding settings, e.g. `DCATDE_CONTRIBUTOR_ID`
pub const ENV_PREFIX: &str = "DCATDE";

/// Locale assumed when the host does not configure one
pub const DEFAULT_LOCALE: &str = "en";

/// Settings the profile reads from the host configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileSettings {
    /// Portal default locale, resolved through the language table
    #[serde(default = "default_locale")]
    pub locale_default: String,
    /// DCAT-AP.de contributor id of the publishing portal
    #[serde(default)]
    pub contributor_id: Option<String>,
    /// Catalog base URI used to derive dataset and resource URIs
    #[serde(default)]
    pub base_uri: Option<String>,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            locale_default: default_locale(),
            contributor_id: None,
            base_uri: None,
        }
    }
}

impl ProfileSettings {
    /// Load settings from an optional file plus `DCATDE_*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self, ProfileError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let settings: ProfileSettings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        tracing::debug!("{settings:#?}");
        Ok(settings)
    }

    /// Reject a base URI that is not an absolute URL
    pub fn validate(&self) -> Result<(), ProfileError> {
        if let Some(uri) = self.base_uri() {
            Url::parse(uri).map_err(|source| ProfileError::InvalidBaseUri {
                uri: uri.to_string(),
                source,
            })?;
        }
        Ok(())
    }

    pub fn contributor_id(&self) -> Option<&str> {
        non_empty(&self.contributor_id)
    }

    pub fn base_uri(&self) -> Option<&str> {
        non_empty(&self.base_uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "dcatde-settings-{}-{}",
            std::process::id(),
            name
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let settings = ProfileSettings::default();
        assert_eq!(settings.locale_default, "en");
        assert_eq!(settings.contributor_id(), None);
        assert_eq!(settings.base_uri(), None);
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_file(
            "ok.toml",
            "locale_default = \"de\"\ncontributor_id = \"HRO\"\nbase_uri = \"https://www.opendata-hro.de\"\n",
        );
        let settings = ProfileSettings::load(Some(&path)).unwrap();
        assert_eq!(settings.locale_default, "de");
        assert_eq!(settings.contributor_id(), Some("HRO"));
        assert_eq!(settings.base_uri(), Some("https://www.opendata-hro.de"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_locale_defaults_when_missing_in_file() {
        let path = temp_file("partial.toml", "contributor_id = \"\"\n");
        let settings = ProfileSettings::load(Some(&path)).unwrap();
        assert_eq!(settings.locale_default, "en");
        assert_eq!(settings.contributor_id(), None);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_invalid_base_uri() {
        let settings = ProfileSettings {
            base_uri: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ProfileError::InvalidBaseUri { .. })
        ));
    }
}
