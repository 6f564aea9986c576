use super::{ManifestFields, PackageId, SpdxId, NOASSERTION};
use chrono::{DateTime, Utc};

/// SPDX specification version emitted in `spdxVersion`
pub const SPDX_VERSION: &str = "SPDX-2.2";

/// License of the SPDX document itself
pub const DATA_LICENSE: &str = "CC0-1.0";

/// SPDX license list version the declared licenses refer to
pub const LICENSE_LIST_VERSION: &str = "3.9";

/// Base URI under which document namespaces are minted
pub const NAMESPACE_BASE: &str = "http://spdx.org/spdxdocs/";

/// CreationInfo value object: when and by whom the document was created
#[derive(Debug, Clone, PartialEq)]
pub struct CreationInfo {
    created_at: DateTime<Utc>,
    creators: Vec<String>,
    license_list_version: String,
}

impl CreationInfo {
    pub fn new(created_at: DateTime<Utc>, creators: Vec<String>) -> Self {
        Self {
            created_at,
            creators,
            license_list_version: LICENSE_LIST_VERSION.to_string(),
        }
    }

    /// `created` timestamp, UTC with millisecond precision (`2024-01-01T12:00:00.000Z`)
    pub fn created(&self) -> String {
        self.created_at.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }

    /// Unix timestamp with microseconds, used to make the namespace unique
    pub fn namespace_timestamp(&self) -> String {
        format!(
            "{}.{:06}",
            self.created_at.timestamp(),
            self.created_at.timestamp_subsec_micros()
        )
    }

    pub fn creators(&self) -> &[String] {
        &self.creators
    }

    pub fn license_list_version(&self) -> &str {
        &self.license_list_version
    }
}

/// One entry of the document's `packages` list
///
/// Every field is already normalized: missing values hold `NOASSERTION`.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    spdx_id: SpdxId,
    name: String,
    download_location: String,
    homepage: String,
    license_concluded: String,
    license_declared: String,
    description: String,
    version_info: String,
}

impl PackageRecord {
    pub fn from_fields(id: &PackageId, fields: &ManifestFields) -> Self {
        let or_noassertion = |value: Option<&str>| value.unwrap_or(NOASSERTION).to_string();

        Self {
            spdx_id: id.spdx_id(),
            name: id.as_str().to_string(),
            download_location: or_noassertion(fields.homepage()),
            homepage: or_noassertion(fields.homepage()),
            license_concluded: NOASSERTION.to_string(),
            license_declared: or_noassertion(fields.license()),
            description: or_noassertion(fields.description()),
            version_info: or_noassertion(fields.version()),
        }
    }

    /// Replaces the element id, keeping the package name
    pub fn with_spdx_id(mut self, spdx_id: SpdxId) -> Self {
        self.spdx_id = spdx_id;
        self
    }

    pub fn spdx_id(&self) -> &SpdxId {
        &self.spdx_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn download_location(&self) -> &str {
        &self.download_location
    }

    pub fn homepage(&self) -> &str {
        &self.homepage
    }

    pub fn license_concluded(&self) -> &str {
        &self.license_concluded
    }

    pub fn license_declared(&self) -> &str {
        &self.license_declared
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn version_info(&self) -> &str {
        &self.version_info
    }
}

/// Relationship types this tool emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipType {
    DependsOn,
}

impl RelationshipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::DependsOn => "DEPENDS_ON",
        }
    }
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the document's `relationships` list
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    element: SpdxId,
    relationship_type: RelationshipType,
    related_element: SpdxId,
}

impl Relationship {
    pub fn depends_on(element: SpdxId, related_element: SpdxId) -> Self {
        Self {
            element,
            relationship_type: RelationshipType::DependsOn,
            related_element,
        }
    }

    pub fn element(&self) -> &SpdxId {
        &self.element
    }

    pub fn relationship_type(&self) -> RelationshipType {
        self.relationship_type
    }

    pub fn related_element(&self) -> &SpdxId {
        &self.related_element
    }
}

/// SpdxDocument aggregate: the fully assembled, format-agnostic document
///
/// `packages` always starts with the root package record.
#[derive(Debug, Clone, PartialEq)]
pub struct SpdxDocument {
    name: String,
    document_namespace: String,
    creation_info: CreationInfo,
    document_describes: Vec<SpdxId>,
    packages: Vec<PackageRecord>,
    relationships: Vec<Relationship>,
}

impl SpdxDocument {
    pub fn new(
        name: String,
        document_namespace: String,
        creation_info: CreationInfo,
        root_package: PackageRecord,
    ) -> Self {
        Self {
            name,
            document_namespace,
            creation_info,
            document_describes: vec![root_package.spdx_id().clone()],
            packages: vec![root_package],
            relationships: Vec::new(),
        }
    }

    /// Appends a dependency record together with its root DEPENDS_ON edge
    pub fn add_dependency(&mut self, package: PackageRecord) {
        let relationship =
            Relationship::depends_on(self.root_package().spdx_id().clone(), package.spdx_id().clone());
        self.packages.push(package);
        self.relationships.push(relationship);
    }

    pub fn spdx_id(&self) -> SpdxId {
        SpdxId::document()
    }

    pub fn spdx_version(&self) -> &'static str {
        SPDX_VERSION
    }

    pub fn data_license(&self) -> &'static str {
        DATA_LICENSE
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn document_namespace(&self) -> &str {
        &self.document_namespace
    }

    pub fn creation_info(&self) -> &CreationInfo {
        &self.creation_info
    }

    pub fn document_describes(&self) -> &[SpdxId] {
        &self.document_describes
    }

    pub fn root_package(&self) -> &PackageRecord {
        &self.packages[0]
    }

    pub fn packages(&self) -> &[PackageRecord] {
        &self.packages
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }
}
