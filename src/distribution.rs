//! Distribution-level enrichment
//!
//! Called for each distribution node that matches one of the dataset's
//! resources. Dataset-level license, attribution and high-value category
//! come in from the dataset call and are not re-resolved here.

use oxrdf::vocab::{rdf, xsd};
use oxrdf::{Literal, NamedNode, Subject, Term, Triple};

use crate::graph::{iri, node_of, ProfileGraph, Replacement};
use crate::profile::{DcatDeProfile, DistributionAdditions};
use crate::record::ResourceRecord;
use crate::vocab::{
    adms, dcat, dcatap, dcatde, dct, reference, spdx, DCATDE_LICENSES_NS, IANA_MEDIA_TYPES,
};

/// Marker identifying hashes stored with an embedded `sha256:` prefix
const SHA256: &str = "sha256";

/// Length of the embedded algorithm prefix, `sha256:`
const SHA256_PREFIX_LEN: usize = 7;

/// Media type after normalisation, and whether it was zip-compressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    pub essence: String,
    pub zipped: bool,
}

/// Normalise a raw media type string
///
/// RSS feeds are published as plain XML; `+zip` suffixes are split off
/// into a separate compression format.
pub fn normalize_media_type(raw: &str) -> MediaType {
    if raw.contains("rss+xml") {
        MediaType {
            essence: "application/xml".to_string(),
            zipped: false,
        }
    } else if raw.contains("+zip") {
        MediaType {
            essence: raw.replace("+zip", ""),
            zipped: true,
        }
    } else {
        MediaType {
            essence: raw.to_string(),
            zipped: false,
        }
    }
}

/// Hash with its `sha256:` prefix removed
fn strip_algorithm_prefix(hash: &str) -> &str {
    hash.char_indices()
        .nth(SHA256_PREFIX_LEN)
        .map_or("", |(i, _)| &hash[i..])
}

impl<G: ProfileGraph> DcatDeProfile<G> {
    /// Add the DCAT-AP.de triples for one distribution
    pub fn enrich_distribution(
        &mut self,
        distribution_ref: &Subject,
        resource: &ResourceRecord,
        additions: &DistributionAdditions,
        hvd_category: Option<&NamedNode>,
    ) {
        self.add(
            distribution_ref,
            dcatap::APPLICABLE_LEGISLATION,
            reference::APPLICABLE_LEGISLATION.into_owned(),
        );

        if let Some(category) = hvd_category {
            self.add(distribution_ref, dcatap::HVD_CATEGORY, category.clone());
        }

        self.add(
            distribution_ref,
            adms::STATUS,
            reference::STATUS_COMPLETED.into_owned(),
        );

        if resource.is_file() {
            if let Some(url) = resource.url().and_then(iri) {
                self.add(distribution_ref, dcat::DOWNLOAD_URL, url);
            }
        }

        self.normalize_media_types(distribution_ref);

        if let Some(text) = &additions.attribution_text {
            self.add(
                distribution_ref,
                dcatde::LICENSE_ATTRIBUTION_BY_TEXT,
                Literal::new_simple_literal(text.as_str()),
            );
        }

        self.add(
            distribution_ref,
            dcatap::AVAILABILITY,
            reference::AVAILABILITY_STABLE.into_owned(),
        );
        self.add(
            distribution_ref,
            dct::CONFORMS_TO,
            reference::DCATDE_PROFILE.into_owned(),
        );

        if let Some(description) = resource.description() {
            self.add(
                distribution_ref,
                dct::DESCRIPTION,
                Literal::new_simple_literal(description),
            );
        }

        self.map_formats(distribution_ref);

        if let Some(created) = resource.created() {
            self.add(
                distribution_ref,
                dct::ISSUED,
                Literal::new_typed_literal(created, xsd::DATE_TIME),
            );
        }

        self.replace_language(distribution_ref);

        if let Some(license_id) = &additions.license_id {
            if let Some(license) = iri(&format!("{}{}", DCATDE_LICENSES_NS, license_id)) {
                self.add(distribution_ref, dct::LICENSE, license.clone());
                self.add(distribution_ref, dct::RIGHTS, license);
            }
        }

        if let Some(modified) = resource.last_modified() {
            self.add(
                distribution_ref,
                dct::MODIFIED,
                Literal::new_typed_literal(modified, xsd::DATE_TIME),
            );
        }

        if let Some(hash) = resource.hash() {
            self.normalize_checksums(distribution_ref, hash);
        }
    }

    fn normalize_media_types(&mut self, distribution_ref: &Subject) {
        for term in self.graph.objects(distribution_ref, dcat::MEDIA_TYPE) {
            let Term::Literal(literal) = term else {
                continue;
            };
            let media_type = normalize_media_type(literal.value());

            let mut edit = Replacement::new().remove(Triple::new(
                distribution_ref.clone(),
                dcat::MEDIA_TYPE,
                literal,
            ));
            if media_type.zipped {
                edit = edit.insert(Triple::new(
                    distribution_ref.clone(),
                    dcat::COMPRESS_FORMAT,
                    reference::ZIP.into_owned(),
                ));
            }
            if let Some(uri) = iri(&format!("{}{}", IANA_MEDIA_TYPES, media_type.essence)) {
                edit = edit.insert(Triple::new(distribution_ref.clone(), dcat::MEDIA_TYPE, uri));
            }
            self.graph.replace(edit);
        }
    }

    /// Replace format literals with the mapped format IRIs
    ///
    /// A format without a mapping is removed and not replaced.
    fn map_formats(&mut self, distribution_ref: &Subject) {
        for term in self.graph.objects(distribution_ref, dct::FORMAT) {
            let Term::Literal(literal) = term else {
                continue;
            };
            let mapped = self.tables.format_uri(literal.value()).and_then(iri);
            if mapped.is_none() {
                tracing::debug!(
                    "Dropping unmapped format '{}' from {}",
                    literal.value(),
                    distribution_ref
                );
            }

            let mut edit = Replacement::new().remove(Triple::new(
                distribution_ref.clone(),
                dct::FORMAT,
                literal,
            ));
            if let Some(uri) = mapped {
                edit = edit.insert(Triple::new(distribution_ref.clone(), dct::FORMAT, uri));
            }
            self.graph.replace(edit);
        }
    }

    fn normalize_checksums(&mut self, distribution_ref: &Subject, hash: &str) {
        let algorithm = if hash.contains(SHA256) {
            self.tables.algorithm(SHA256).and_then(iri)
        } else {
            None
        };

        let checksums: Vec<Subject> = self
            .graph
            .objects(distribution_ref, spdx::CHECKSUM)
            .iter()
            .filter_map(node_of)
            .collect();

        for checksum in checksums {
            let values = self.graph.objects(&checksum, spdx::CHECKSUM_VALUE);
            for _ in values {
                self.add(&checksum, rdf::TYPE, spdx::CHECKSUM_CLASS.into_owned());
                let Some(algorithm) = &algorithm else {
                    continue;
                };
                self.graph.replace(
                    Replacement::new()
                        .remove(Triple::new(
                            checksum.clone(),
                            spdx::CHECKSUM_VALUE,
                            Literal::new_typed_literal(hash, xsd::HEX_BINARY),
                        ))
                        .insert(Triple::new(
                            checksum.clone(),
                            spdx::CHECKSUM_VALUE,
                            Literal::new_typed_literal(
                                strip_algorithm_prefix(hash),
                                xsd::HEX_BINARY,
                            ),
                        ))
                        .insert(Triple::new(
                            checksum.clone(),
                            spdx::ALGORITHM,
                            algorithm.clone(),
                        )),
                );
            }
        }
    }
}
