//! DCAT-AP.de profile engine
//!
//! Runs after the baseline DCAT-AP profile has written its triples and
//! adjusts them to the DCAT-AP.de dialect: literal values become
//! authority IRIs, portal groups become themes and high-value
//! categories, contact data is normalised, and dataset-level license and
//! attribution are pushed down into every distribution.
//!
//! The host calls [`DcatDeProfile::enrich_catalog`] once per catalog and
//! [`DcatDeProfile::enrich_dataset`] once per dataset; distributions are
//! handled as part of the dataset call.

use std::borrow::Cow;
use std::sync::Arc;

use oxrdf::vocab::{rdf, xsd};
use oxrdf::{BlankNode, Literal, NamedNode, NamedNodeRef, Subject, Term, Triple};
use serde_json::Value;

use crate::date::normalize_date;
use crate::graph::{iri, node_of, ProfileGraph, Replacement};
use crate::record::{resource_uri, DatasetRecord};
use crate::settings::ProfileSettings;
use crate::tables::MappingTables;
use crate::vocab::{
    dcat, dcatap, dcatde, dct, foaf, locn, reference, skos, vcard, DCATDE_CONTRIBUTORS_NS,
    MDR_LANGUAGE_NS, MDR_THEME_NS,
};

/// Dataset-level values handed down to each of the dataset's distributions
///
/// Built fresh for every dataset call and dropped once its distributions
/// are done.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributionAdditions {
    /// DCAT-AP.de license id resolved from the dataset license
    pub license_id: Option<String>,
    /// Attribution text from the dataset's terms of use
    pub attribution_text: Option<String>,
}

/// Statistics from enriching one dataset
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnrichStats {
    /// Resources listed in the dataset record
    pub resources: usize,
    /// Distribution nodes that were matched and enriched
    pub distributions_enriched: usize,
}

/// The DCAT-AP.de profile bound to one graph
pub struct DcatDeProfile<G: ProfileGraph> {
    pub(crate) graph: G,
    pub(crate) tables: Arc<MappingTables>,
    pub(crate) settings: ProfileSettings,
}

impl<G: ProfileGraph> DcatDeProfile<G> {
    /// Bind the profile to a graph
    ///
    /// Tables are shared read-only, so one loaded set can back many
    /// profiles working on different graphs.
    pub fn new(graph: G, tables: Arc<MappingTables>, settings: ProfileSettings) -> Self {
        Self {
            graph,
            tables,
            settings,
        }
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn into_graph(self) -> G {
        self.graph
    }

    pub fn settings(&self) -> &ProfileSettings {
        &self.settings
    }

    /// Replace the catalog's literal language with the authority IRI
    pub fn enrich_catalog(&mut self, _catalog: &Value, catalog_ref: &Subject) {
        self.replace_language(catalog_ref);
    }

    /// Records are never rebuilt from RDF; the dataset passes through as-is
    pub fn parse_dataset(&self, dataset: DatasetRecord) -> DatasetRecord {
        dataset
    }

    /// Add the DCAT-AP.de triples for one dataset and its distributions
    pub fn enrich_dataset(
        &mut self,
        dataset: &DatasetRecord,
        dataset_ref: &Subject,
    ) -> EnrichStats {
        if let Subject::NamedNode(node) = dataset_ref {
            self.add(dataset_ref, dcat::LANDING_PAGE, node.clone());
        }

        self.add(
            dataset_ref,
            dcatap::APPLICABLE_LEGISLATION,
            reference::APPLICABLE_LEGISLATION.into_owned(),
        );

        let hvd_category = self.resolve_hvd_category(dataset);
        if let Some(category) = &hvd_category {
            self.add(dataset_ref, dcatap::HVD_CATEGORY, category.clone());
        }

        self.normalize_contact_emails(dataset_ref);
        self.add_themes(dataset, dataset_ref);

        if let Some(contributor) = self.settings.contributor_id() {
            if let Some(node) = iri(&format!("{}{}", DCATDE_CONTRIBUTORS_NS, contributor)) {
                self.add(dataset_ref, dcatde::CONTRIBUTOR_ID, node);
            }
        }

        if let Some(geometry) = dataset.spatial() {
            self.normalize_geometry(dataset_ref, geometry);
        }
        if let Some(text) = dataset.spatial_text() {
            self.add_geocoding(dataset_ref, text);
        }

        self.add_organization(
            dataset_ref,
            dcatde::MAINTAINER,
            dataset.maintainer(),
            dataset.maintainer_email(),
        );

        self.add(
            dataset_ref,
            dct::ACCESS_RIGHTS,
            reference::ACCESS_RIGHTS_PUBLIC.into_owned(),
        );
        self.add(
            dataset_ref,
            dct::CONFORMS_TO,
            reference::DCATDE_PROFILE.into_owned(),
        );

        self.add_organization(
            dataset_ref,
            dct::CREATOR,
            dataset.author(),
            dataset.author_email(),
        );

        if let Some(language) = self.language_uri() {
            self.add(dataset_ref, dct::LANGUAGE, language);
        }

        self.add_temporal(
            dataset_ref,
            dataset.temporal_coverage_from(),
            dataset.temporal_coverage_to(),
        );

        let additions = self.distribution_additions(dataset);
        let stats =
            self.enrich_distributions(dataset, dataset_ref, &additions, hvd_category.as_ref());

        tracing::info!(
            "Enriched dataset {}: {} of {} resources matched a distribution",
            dataset_ref,
            stats.distributions_enriched,
            stats.resources
        );

        stats
    }

    /// Add a date literal, normalised when it parses and verbatim otherwise
    pub fn add_date_triple(&mut self, subject: &Subject, predicate: NamedNodeRef<'_>, raw: &str) {
        if raw.is_empty() {
            return;
        }
        let literal = match normalize_date(raw) {
            Some(iso) => Literal::new_typed_literal(iso, xsd::DATE_TIME),
            None => {
                tracing::warn!("Could not parse date '{}', keeping it as plain text", raw);
                Literal::new_simple_literal(raw)
            }
        };
        self.add(subject, predicate, literal);
    }

    pub(crate) fn add(
        &mut self,
        subject: &Subject,
        predicate: NamedNodeRef<'_>,
        object: impl Into<Term>,
    ) -> bool {
        self.graph
            .add(Triple::new(subject.clone(), predicate, object))
    }

    /// Language authority IRI of the portal default locale
    pub(crate) fn language_uri(&self) -> Option<NamedNode> {
        let locale = &self.settings.locale_default;
        match self.tables.language(locale) {
            Some(code) => iri(&format!("{}{}", MDR_LANGUAGE_NS, code)),
            None => {
                tracing::debug!("No language mapping for locale '{}'", locale);
                None
            }
        }
    }

    /// Swap the plain locale literal for the language authority IRI
    pub(crate) fn replace_language(&mut self, subject: &Subject) {
        let Some(language) = self.language_uri() else {
            return;
        };
        let literal = Literal::new_simple_literal(self.settings.locale_default.as_str());
        self.graph.replace(
            Replacement::new()
                .remove(Triple::new(subject.clone(), dct::LANGUAGE, literal))
                .insert(Triple::new(subject.clone(), dct::LANGUAGE, language)),
        );
    }

    /// First group with a usable high-value category mapping wins
    fn resolve_hvd_category(&self, dataset: &DatasetRecord) -> Option<NamedNode> {
        dataset
            .group_names()
            .find_map(|group| self.tables.hvd_category(group).and_then(iri))
    }

    fn normalize_contact_emails(&mut self, dataset_ref: &Subject) {
        let contact_points: Vec<Subject> = self
            .graph
            .objects(dataset_ref, dcat::CONTACT_POINT)
            .iter()
            .filter_map(node_of)
            .collect();

        for contact_point in contact_points {
            for email in self.graph.objects(&contact_point, vcard::HAS_EMAIL) {
                let Term::Literal(literal) = email else {
                    continue;
                };
                let address = literal.value();
                let mailto = if address.starts_with("mailto:") {
                    address.to_string()
                } else {
                    format!("mailto:{}", address)
                };
                let Some(node) = iri(&mailto) else {
                    continue;
                };
                self.graph.replace(
                    Replacement::new()
                        .remove(Triple::new(contact_point.clone(), vcard::HAS_EMAIL, literal))
                        .insert(Triple::new(contact_point.clone(), vcard::HAS_EMAIL, node)),
                );
            }
        }
    }

    fn add_themes(&mut self, dataset: &DatasetRecord, dataset_ref: &Subject) {
        let tables = Arc::clone(&self.tables);
        for group in dataset.group_names() {
            let Some(themes) = tables.themes(group) else {
                tracing::debug!("No theme mapping for group '{}'", group);
                continue;
            };
            for theme in themes {
                if let Some(node) = iri(&format!("{}{}", MDR_THEME_NS, theme)) {
                    self.add(dataset_ref, dcat::THEME, node);
                }
            }
        }
    }

    fn spatial_nodes(&self, dataset_ref: &Subject) -> Vec<Subject> {
        self.graph
            .objects(dataset_ref, dct::SPATIAL)
            .iter()
            .filter_map(node_of)
            .collect()
    }

    fn normalize_geometry(&mut self, dataset_ref: &Subject, geometry: &str) {
        let corrected = fix_geometry_types(geometry);
        for spatial in self.spatial_nodes(dataset_ref) {
            self.graph.replace(
                Replacement::new()
                    .remove(Triple::new(
                        spatial.clone(),
                        locn::GEOMETRY,
                        Literal::new_typed_literal(geometry, reference::GEOJSON),
                    ))
                    .insert(Triple::new(
                        spatial,
                        locn::GEOMETRY,
                        Literal::new_typed_literal(&*corrected, reference::GEOJSON),
                    )),
            );
        }
    }

    fn add_geocoding(&mut self, dataset_ref: &Subject, text: &str) {
        for spatial in self.spatial_nodes(dataset_ref) {
            self.graph.remove(&Triple::new(
                spatial,
                skos::PREF_LABEL,
                Literal::new_simple_literal(text),
            ));
        }
        self.add(
            dataset_ref,
            dcatde::GEOCODING_DESCRIPTION,
            Literal::new_simple_literal(text),
        );

        let tables = Arc::clone(&self.tables);
        let Some(entry) = tables.geocoding(text) else {
            tracing::debug!("No geocoding mapping for '{}'", text);
            return;
        };
        if let Some(level) = entry.level_uri.as_deref().and_then(iri) {
            self.add(dataset_ref, dcatde::POLITICAL_GEOCODING_LEVEL_URI, level);
        }
        if let Some(uri) = entry.uri.as_deref().and_then(iri) {
            self.add(dataset_ref, dcatde::POLITICAL_GEOCODING_URI, uri);
        }
    }

    /// Attach an anonymous organization with whichever of name and email exist
    fn add_organization(
        &mut self,
        dataset_ref: &Subject,
        predicate: NamedNodeRef<'_>,
        name: Option<&str>,
        email: Option<&str>,
    ) {
        if name.is_none() && email.is_none() {
            return;
        }
        let node = BlankNode::default();
        let organization = Subject::from(node.clone());
        self.add(&organization, rdf::TYPE, foaf::ORGANIZATION.into_owned());
        self.add(dataset_ref, predicate, node);
        if let Some(name) = name {
            self.add(&organization, foaf::NAME, Literal::new_simple_literal(name));
        }
        if let Some(email) = email {
            self.add(&organization, foaf::MBOX, Literal::new_simple_literal(email));
        }
    }

    fn add_temporal(&mut self, dataset_ref: &Subject, start: Option<&str>, end: Option<&str>) {
        if start.is_none() && end.is_none() {
            return;
        }
        let node = BlankNode::default();
        let period = Subject::from(node.clone());
        self.add(&period, rdf::TYPE, dct::PERIOD_OF_TIME.into_owned());
        if let Some(start) = start {
            self.add_date_triple(&period, dcat::START_DATE, start);
        }
        if let Some(end) = end {
            self.add_date_triple(&period, dcat::END_DATE, end);
        }
        self.add(dataset_ref, dct::TEMPORAL, node);
    }

    /// Stage license and attribution for the dataset's distributions
    pub fn distribution_additions(&self, dataset: &DatasetRecord) -> DistributionAdditions {
        let license_id = dataset.license_id().and_then(|id| {
            let mapped = self.tables.license(id);
            if mapped.is_none() {
                tracing::debug!("No license mapping for '{}'", id);
            }
            mapped.map(String::from)
        });

        DistributionAdditions {
            license_id,
            attribution_text: dataset.terms_of_use().and_then(attribution_text),
        }
    }

    fn enrich_distributions(
        &mut self,
        dataset: &DatasetRecord,
        dataset_ref: &Subject,
        additions: &DistributionAdditions,
        hvd_category: Option<&NamedNode>,
    ) -> EnrichStats {
        let mut stats = EnrichStats {
            resources: dataset.resources.len(),
            ..Default::default()
        };
        let distributions = self.graph.objects(dataset_ref, dcat::DISTRIBUTION);
        let dataset_id = dataset.id.as_deref();

        for resource in &dataset.resources {
            let Some(uri) = resource_uri(resource, dataset_id, self.settings.base_uri()) else {
                tracing::debug!("Resource {:?} has no canonical URI, skipping", resource.id);
                continue;
            };

            let matching: Vec<Subject> = distributions
                .iter()
                .filter(|term| matches!(term, Term::NamedNode(node) if node.as_str() == uri))
                .filter_map(node_of)
                .collect();

            if matching.is_empty() {
                tracing::debug!("No distribution node for resource URI {}", uri);
            }

            for distribution in matching {
                self.enrich_distribution(&distribution, resource, additions, hvd_category);
                stats.distributions_enriched += 1;
            }
        }

        stats
    }
}

/// Attribution text from a terms-of-use JSON document
///
/// A malformed document counts as no terms at all.
pub fn attribution_text(terms_of_use: &str) -> Option<String> {
    let terms: Value = match serde_json::from_str(terms_of_use) {
        Ok(terms) => terms,
        Err(e) => {
            tracing::warn!("Ignoring malformed terms of use: {}", e);
            return None;
        }
    };
    terms
        .get("attribution_text")
        .and_then(Value::as_str)
        .map(String::from)
}

/// Fix the capitalisation of GeoJSON geometry types
///
/// `multipolygon` takes precedence; `polygon` is only rewritten when no
/// `multipolygon` occurs in the value.
pub fn fix_geometry_types(geometry: &str) -> Cow<'_, str> {
    if geometry.contains("multipolygon") {
        Cow::Owned(geometry.replace("multipolygon", "MultiPolygon"))
    } else if geometry.contains("polygon") {
        Cow::Owned(geometry.replace("polygon", "Polygon"))
    } else {
        Cow::Borrowed(geometry)
    }
}
