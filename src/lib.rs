//! DCAT-AP.de Profile Library
//!
//! This library adapts DCAT-AP catalog graphs to the German DCAT-AP.de
//! application profile. It runs after a baseline DCAT-AP serialization has
//! produced the RDF for a catalog or dataset and rewrites or adds triples
//! so the result validates against DCAT-AP.de.
//!
//! # Overview
//!
//! For each dataset the profile:
//!
//! 1. Adds the fixed legislation, access-rights, status and conformance IRIs
//! 2. Maps portal groups to themes and high-value data categories
//! 3. Normalises contacts, maintainers, creators and spatial data
//! 4. Turns free-form temporal coverage into typed date-times
//! 5. Enriches every distribution that matches one of the dataset's resources
//!
//! Lookups go through [`MappingTables`], loaded once from a directory, a zip
//! archive or a URL. A key without a mapping is skipped, never an error.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use dcatde_profile::{DcatDeProfile, MappingTables, ProfileSettings, TableSource};
//!
//! let tables = MappingTables::load(&TableSource::from_location("./mappings"))?;
//! let settings = ProfileSettings::load(None)?;
//!
//! let mut profile = DcatDeProfile::new(graph, Arc::new(tables), settings);
//! let stats = profile.enrich_dataset(&dataset, &dataset_ref);
//! let graph = profile.into_graph();
//! ```

pub mod date;
pub mod distribution;
pub mod error;
pub mod graph;
pub mod loader;
pub mod profile;
pub mod record;
pub mod settings;
pub mod tables;
pub mod vocab;

// Re-export main types for convenience
pub use crate::date::normalize_date;
pub use crate::distribution::{normalize_media_type, MediaType};
pub use crate::error::ProfileError;
pub use crate::graph::{ProfileGraph, Replacement};
pub use crate::loader::{TableProvider, TableSource};
pub use crate::profile::{
    attribution_text, fix_geometry_types, DcatDeProfile, DistributionAdditions, EnrichStats,
};
pub use crate::record::{dataset_uri, resource_uri, DatasetRecord, ResourceRecord};
pub use crate::settings::ProfileSettings;
pub use crate::tables::{MappingTables, TableKind};
pub use crate::vocab::NAMESPACES;
