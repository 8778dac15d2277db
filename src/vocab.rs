//! Vocabulary definitions for the DCAT-AP.de profile
//!
//! Namespaces, predicates and the fixed reference IRIs the profile
//! writes into every dataset and distribution.

/// Prefix bindings used by the profile, for serializers that support them
pub const NAMESPACES: &[(&str, &str)] = &[
    ("adms", ADMS_NS),
    ("dcat", DCAT_NS),
    ("dct", DCT_NS),
    ("foaf", FOAF_NS),
    ("gsp", "http://www.opengis.net/ont/geosparql#"),
    ("locn", LOCN_NS),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("skos", SKOS_NS),
    ("spdx", SPDX_NS),
    ("time", "http://www.w3.org/2006/time"),
    ("vcard", VCARD_NS),
    ("dcatap", DCATAP_NS),
    ("dcatde", DCATDE_NS),
    ("dcatde-lic", DCATDE_LICENSES_NS),
    ("mdrlang", MDR_LANGUAGE_NS),
    ("mdrtheme", MDR_THEME_NS),
];

pub const ADMS_NS: &str = "http://www.w3.org/ns/adms#";
pub const DCAT_NS: &str = "http://www.w3.org/ns/dcat#";
pub const DCT_NS: &str = "http://purl.org/dc/terms/";
pub const FOAF_NS: &str = "http://xmlns.com/foaf/0.1/";
pub const LOCN_NS: &str = "http://www.w3.org/ns/locn#";
pub const SKOS_NS: &str = "http://www.w3.org/2004/02/skos/core#";
pub const SPDX_NS: &str = "http://spdx.org/rdf/terms#";
pub const VCARD_NS: &str = "http://www.w3.org/2006/vcard/ns#";

pub const DCATAP_NS: &str = "http://data.europa.eu/r5r/";

/// DCAT-AP.de namespace, also the target of `dct:conformsTo`
pub const DCATDE_NS: &str = "http://dcat-ap.de/def/dcatde/";

/// DCAT-AP.de license vocabulary; license ids are appended
pub const DCATDE_LICENSES_NS: &str = "http://dcat-ap.de/def/licenses/";

/// DCAT-AP.de contributor ids are appended to this prefix
pub const DCATDE_CONTRIBUTORS_NS: &str = "http://dcat-ap.de/def/contributors/";

/// EU publications office language authority
pub const MDR_LANGUAGE_NS: &str = "http://publications.europa.eu/resource/authority/language/";

/// EU publications office data theme authority
pub const MDR_THEME_NS: &str = "http://publications.europa.eu/resource/authority/data-theme/";

/// IANA media type registry; media types are appended
pub const IANA_MEDIA_TYPES: &str = "https://www.iana.org/assignments/media-types/";

/// Datatype of GeoJSON geometry literals
pub const GEOJSON_DATATYPE: &str = "https://www.iana.org/assignments/media-types/application/vnd.geo+json";

/// Compression format recorded for `+zip` media types
pub const ZIP_MEDIA_TYPE: &str = "https://www.iana.org/assignments/media-types/application/zip";

/// Fixed reference IRIs
pub mod reference {
    use oxrdf::NamedNodeRef;

    /// Commission Implementing Regulation (EU) 2023/138 (high-value datasets)
    pub const APPLICABLE_LEGISLATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://data.europa.eu/eli/reg_impl/2023/138/oj");

    pub const ACCESS_RIGHTS_PUBLIC: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://publications.europa.eu/resource/authority/access-right/PUBLIC",
    );

    pub const STATUS_COMPLETED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/adms/status/Completed");

    pub const AVAILABILITY_STABLE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://publications.europa.eu/resource/authority/planned-availability/STABLE",
    );

    pub const DCATDE_PROFILE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked(super::DCATDE_NS);

    pub const GEOJSON: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(super::GEOJSON_DATATYPE);

    pub const ZIP: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(super::ZIP_MEDIA_TYPE);
}

pub mod adms {
    use oxrdf::NamedNodeRef;

    pub const STATUS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/adms#status");
}

pub mod dcat {
    use oxrdf::NamedNodeRef;

    pub const COMPRESS_FORMAT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#compressFormat");

    pub const CONTACT_POINT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#contactPoint");

    pub const DISTRIBUTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#distribution");

    pub const DOWNLOAD_URL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#downloadURL");

    pub const END_DATE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#endDate");

    pub const LANDING_PAGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#landingPage");

    pub const MEDIA_TYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#mediaType");

    pub const START_DATE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#startDate");

    pub const THEME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#theme");
}

pub mod dcatap {
    use oxrdf::NamedNodeRef;

    pub const APPLICABLE_LEGISLATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://data.europa.eu/r5r/applicableLegislation");

    pub const AVAILABILITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://data.europa.eu/r5r/availability");

    pub const HVD_CATEGORY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://data.europa.eu/r5r/hvdCategory");
}

pub mod dcatde {
    use oxrdf::NamedNodeRef;

    pub const CONTRIBUTOR_ID: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://dcat-ap.de/def/dcatde/contributorID");

    pub const GEOCODING_DESCRIPTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://dcat-ap.de/def/dcatde/geocodingDescription");

    pub const LICENSE_ATTRIBUTION_BY_TEXT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://dcat-ap.de/def/dcatde/licenseAttributionByText");

    pub const MAINTAINER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://dcat-ap.de/def/dcatde/maintainer");

    pub const POLITICAL_GEOCODING_LEVEL_URI: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://dcat-ap.de/def/dcatde/politicalGeocodingLevelURI");

    pub const POLITICAL_GEOCODING_URI: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://dcat-ap.de/def/dcatde/politicalGeocodingURI");
}

pub mod dct {
    use oxrdf::NamedNodeRef;

    pub const ACCESS_RIGHTS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/accessRights");

    pub const CONFORMS_TO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/conformsTo");

    pub const CREATOR: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/creator");

    pub const DESCRIPTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/description");

    pub const FORMAT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/format");

    pub const ISSUED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/issued");

    pub const LANGUAGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/language");

    pub const LICENSE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/license");

    pub const MODIFIED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/modified");

    pub const PERIOD_OF_TIME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/PeriodOfTime");

    pub const RIGHTS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/rights");

    pub const SPATIAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/spatial");

    pub const TEMPORAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/temporal");
}

pub mod foaf {
    use oxrdf::NamedNodeRef;

    pub const MBOX: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/mbox");

    pub const NAME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/name");

    pub const ORGANIZATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/Organization");
}

pub mod locn {
    use oxrdf::NamedNodeRef;

    pub const GEOMETRY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/locn#geometry");
}

pub mod skos {
    use oxrdf::NamedNodeRef;

    pub const PREF_LABEL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#prefLabel");
}

pub mod spdx {
    use oxrdf::NamedNodeRef;

    pub const ALGORITHM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://spdx.org/rdf/terms#algorithm");

    pub const CHECKSUM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://spdx.org/rdf/terms#checksum");

    pub const CHECKSUM_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://spdx.org/rdf/terms#Checksum");

    pub const CHECKSUM_VALUE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://spdx.org/rdf/terms#checksumValue");
}

pub mod vcard {
    use oxrdf::NamedNodeRef;

    pub const HAS_EMAIL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/vcard/ns#hasEmail");
}
