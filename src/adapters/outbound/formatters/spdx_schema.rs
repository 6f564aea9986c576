use crate::sbom_generation::domain::{CreationInfo, PackageRecord, Relationship, SpdxDocument};
use serde::Serialize;

// Field order below is the emitted key order.

#[derive(Debug, Serialize)]
pub(super) struct Document<'a> {
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    #[serde(rename = "spdxVersion")]
    spdx_version: &'a str,
    #[serde(rename = "creationInfo")]
    creation_info: Creation<'a>,
    name: &'a str,
    #[serde(rename = "dataLicense")]
    data_license: &'a str,
    #[serde(rename = "documentNamespace")]
    document_namespace: &'a str,
    #[serde(rename = "documentDescribes")]
    document_describes: Vec<&'a str>,
    packages: Vec<Package<'a>>,
    relationships: Vec<RelationshipEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct Creation<'a> {
    created: String,
    creators: &'a [String],
    #[serde(rename = "licenseListVersion")]
    license_list_version: &'a str,
}

#[derive(Debug, Serialize)]
struct Package<'a> {
    #[serde(rename = "SPDXID")]
    spdx_id: &'a str,
    name: &'a str,
    #[serde(rename = "downloadLocation")]
    download_location: &'a str,
    homepage: &'a str,
    #[serde(rename = "licenseConcluded")]
    license_concluded: &'a str,
    #[serde(rename = "licenseDeclared")]
    license_declared: &'a str,
    description: &'a str,
    #[serde(rename = "versionInfo")]
    version_info: &'a str,
}

#[derive(Debug, Serialize)]
struct RelationshipEntry<'a> {
    #[serde(rename = "spdxElementId")]
    spdx_element_id: &'a str,
    #[serde(rename = "relationshipType")]
    relationship_type: &'static str,
    #[serde(rename = "relatedSpdxElement")]
    related_spdx_element: &'a str,
}

impl<'a> Document<'a> {
    pub(super) fn from_document(document: &'a SpdxDocument) -> Self {
        Self {
            spdx_id: document.spdx_id().as_str().to_string(),
            spdx_version: document.spdx_version(),
            creation_info: Creation::from_info(document.creation_info()),
            name: document.name(),
            data_license: document.data_license(),
            document_namespace: document.document_namespace(),
            document_describes: document
                .document_describes()
                .iter()
                .map(|id| id.as_str())
                .collect(),
            packages: document.packages().iter().map(Package::from_record).collect(),
            relationships: document
                .relationships()
                .iter()
                .map(RelationshipEntry::from_relationship)
                .collect(),
        }
    }
}

impl<'a> Creation<'a> {
    fn from_info(info: &'a CreationInfo) -> Self {
        Self {
            created: info.created(),
            creators: info.creators(),
            license_list_version: info.license_list_version(),
        }
    }
}

impl<'a> Package<'a> {
    fn from_record(record: &'a PackageRecord) -> Self {
        Self {
            spdx_id: record.spdx_id().as_str(),
            name: record.name(),
            download_location: record.download_location(),
            homepage: record.homepage(),
            license_concluded: record.license_concluded(),
            license_declared: record.license_declared(),
            description: record.description(),
            version_info: record.version_info(),
        }
    }
}

impl<'a> RelationshipEntry<'a> {
    fn from_relationship(relationship: &'a Relationship) -> Self {
        Self {
            spdx_element_id: relationship.element().as_str(),
            relationship_type: relationship.relationship_type().as_str(),
            related_spdx_element: relationship.related_element().as_str(),
        }
    }
}

#[cfg(test)]
pub(super) mod fixtures {
    use crate::sbom_generation::domain::{
        CreationInfo, ManifestFields, PackageId, PackageRecord, SpdxDocument,
    };
    use chrono::{TimeZone, Utc};

    pub fn sample_document() -> SpdxDocument {
        let created_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap()
            + chrono::Duration::microseconds(123_456);
        let creation_info = CreationInfo::new(
            created_at,
            vec![
                "Tool: vcpkg-spdx-0.3.0".to_string(),
                "Organization: ACME".to_string(),
            ],
        );

        let foo = PackageId::new("foo".to_string()).unwrap();
        let root = PackageRecord::from_fields(
            &foo,
            &ManifestFields::new(
                Some("MIT".to_string()),
                Some("https://example.com/foo".to_string()),
                Some("1.0".to_string()),
                None,
            ),
        );
        let mut document = SpdxDocument::new(
            "foo".to_string(),
            "http://spdx.org/spdxdocs/foo-1709296245.123456".to_string(),
            creation_info,
            root,
        );

        let bar = PackageId::new("bar".to_string()).unwrap();
        document.add_dependency(PackageRecord::from_fields(
            &bar,
            &ManifestFields::new(
                Some("BSD-3-Clause".to_string()),
                None,
                Some("2.3.4".to_string()),
                Some("Bar library".to_string()),
            ),
        ));
        document
    }
}
