//! Loading of reference tables from their storage location
//!
//! Tables ship as seven JSON files. They can be read from a directory,
//! from a zip archive, fetched from a base URL, or handed over in memory
//! by the host.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::Value;
use zip::ZipArchive;

use crate::error::ProfileError;
use crate::tables::TableKind;

/// Trait for fetching the raw JSON text of a reference table
pub trait TableProvider {
    /// Return the JSON document for `kind`
    fn fetch(&self, kind: TableKind) -> Result<String, ProfileError>;
}

/// Location from which to load the reference tables
#[derive(Debug, Clone)]
pub enum TableSource {
    /// Local directory containing the table files
    Directory(PathBuf),
    /// Zip archive with the table files at its root or in one top-level directory
    ZipFile(PathBuf),
    /// Base URL; `<base>/<file name>` is fetched for each table
    Url(String),
    /// Tables supplied by the host, keyed by kind
    InMemory(HashMap<TableKind, String>),
}

impl TableSource {
    /// Pick a source from a command-line style location string
    pub fn from_location(location: &str) -> Self {
        if is_url(location) {
            TableSource::Url(location.to_string())
        } else if location.to_ascii_lowercase().ends_with(".zip") {
            TableSource::ZipFile(PathBuf::from(location))
        } else {
            TableSource::Directory(PathBuf::from(location))
        }
    }

    /// Build an in-memory source from JSON values
    pub fn in_memory(tables: impl IntoIterator<Item = (TableKind, Value)>) -> Self {
        TableSource::InMemory(
            tables
                .into_iter()
                .map(|(kind, value)| (kind, value.to_string()))
                .collect(),
        )
    }

    /// Human-readable location for error messages
    pub fn location(&self) -> String {
        match self {
            TableSource::Directory(p) | TableSource::ZipFile(p) => p.display().to_string(),
            TableSource::Url(u) => u.clone(),
            TableSource::InMemory(_) => "memory".to_string(),
        }
    }
}

impl TableProvider for TableSource {
    fn fetch(&self, kind: TableKind) -> Result<String, ProfileError> {
        match self {
            TableSource::Directory(dir) => read_from_directory(dir, kind),
            TableSource::ZipFile(path) => read_from_zip(path, kind),
            TableSource::Url(base) => fetch_url(&table_url(base, kind), kind),
            TableSource::InMemory(tables) => {
                tables
                    .get(&kind)
                    .cloned()
                    .ok_or_else(|| ProfileError::TableLoad {
                        table: kind.name(),
                        location: self.location(),
                        reason: "Table not provided".to_string(),
                    })
            }
        }
    }
}

/// Check if a location string is a URL
fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

fn table_url(base: &str, kind: TableKind) -> String {
    format!("{}/{}", base.trim_end_matches('/'), kind.file_name())
}

fn read_from_directory(dir: &Path, kind: TableKind) -> Result<String, ProfileError> {
    let path = dir.join(kind.file_name());
    std::fs::read_to_string(&path).map_err(|e| ProfileError::TableLoad {
        table: kind.name(),
        location: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn read_from_zip(path: &Path, kind: TableKind) -> Result<String, ProfileError> {
    let load_error = |reason: String| ProfileError::TableLoad {
        table: kind.name(),
        location: path.display().to_string(),
        reason,
    };

    let file = File::open(path).map_err(|e| load_error(format!("Failed to open zip file: {}", e)))?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| load_error(format!("Failed to read zip archive: {}", e)))?;

    let entry_name = find_table_in_zip(&mut archive, kind.file_name())
        .ok_or_else(|| load_error(format!("No {} found in archive", kind.file_name())))?;

    let mut entry = archive
        .by_name(&entry_name)
        .map_err(|e| load_error(format!("Failed to extract {}: {}", entry_name, e)))?;

    let mut content = String::new();
    entry
        .read_to_string(&mut content)
        .map_err(|e| load_error(format!("Failed to read {}: {}", entry_name, e)))?;

    Ok(content)
}

/// Locate a table file at the archive root, or directly inside a single
/// top-level directory (archives created by zipping a `mappings/` folder)
fn find_table_in_zip<R: Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
    file_name: &str,
) -> Option<String> {
    let entries: Vec<String> = archive.file_names().map(String::from).collect();

    if let Some(entry) = entries.iter().find(|e| e.as_str() == file_name) {
        return Some(entry.clone());
    }

    let top_level_dirs: std::collections::HashSet<&str> = entries
        .iter()
        .filter_map(|e| e.split('/').next())
        .filter(|s| !s.is_empty())
        .collect();

    if top_level_dirs.len() == 1 {
        let prefix = top_level_dirs.into_iter().next()?;
        let expected = format!("{}/{}", prefix, file_name);
        return entries.into_iter().find(|e| *e == expected);
    }

    None
}

/// Simple URL fetch
fn fetch_url(url: &str, kind: TableKind) -> Result<String, ProfileError> {
    let load_error = |reason: String| ProfileError::TableLoad {
        table: kind.name(),
        location: url.to_string(),
        reason,
    };

    reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .map_err(|e| load_error(format!("HTTP request failed: {}", e)))?
        .text()
        .map_err(|e| load_error(format!("Failed to read response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dcatde-profile-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_from_location() {
        assert!(matches!(
            TableSource::from_location("https://example.org/mappings/"),
            TableSource::Url(_)
        ));
        assert!(matches!(
            TableSource::from_location("/srv/mappings.ZIP"),
            TableSource::ZipFile(_)
        ));
        assert!(matches!(
            TableSource::from_location("./mappings"),
            TableSource::Directory(_)
        ));
    }

    #[test]
    fn test_table_url() {
        assert_eq!(
            table_url("https://example.org/mappings/", TableKind::Licenses),
            "https://example.org/mappings/licenses.json"
        );
    }

    #[test]
    fn test_in_memory_fetch() {
        let source = TableSource::in_memory([(TableKind::Languages, json!({"de": "DEU"}))]);
        let content = source.fetch(TableKind::Languages).unwrap();
        assert!(content.contains("DEU"));
        assert!(source.fetch(TableKind::Formats).is_err());
    }

    #[test]
    fn test_directory_fetch() {
        let dir = temp_path("dir");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("languages.json"), r#"{"de": "DEU"}"#).unwrap();

        let source = TableSource::Directory(dir.clone());
        assert_eq!(source.fetch(TableKind::Languages).unwrap(), r#"{"de": "DEU"}"#);

        let err = source.fetch(TableKind::Licenses).unwrap_err();
        assert!(matches!(err, ProfileError::TableLoad { table: "licenses", .. }));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_zip_fetch_with_top_level_directory() {
        let path = temp_path("tables.zip");
        {
            let file = File::create(&path).unwrap();
            let mut writer = ZipWriter::new(file);
            writer
                .start_file("mappings/languages.json", SimpleFileOptions::default())
                .unwrap();
            writer.write_all(br#"{"en": "ENG"}"#).unwrap();
            writer.finish().unwrap();
        }

        let source = TableSource::ZipFile(path.clone());
        assert_eq!(source.fetch(TableKind::Languages).unwrap(), r#"{"en": "ENG"}"#);
        assert!(source.fetch(TableKind::Algorithms).is_err());

        std::fs::remove_file(&path).unwrap();
    }
}
