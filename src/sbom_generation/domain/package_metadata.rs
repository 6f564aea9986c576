use super::PackageId;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Placeholder for any field whose value cannot be determined
pub const NOASSERTION: &str = "NOASSERTION";

/// ManifestFields value object: the four optional fields read from a manifest
///
/// Blank values (`""`, or a description list joining to nothing) are
/// stored as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManifestFields {
    license: Option<String>,
    homepage: Option<String>,
    version: Option<String>,
    description: Option<String>,
}

impl ManifestFields {
    pub fn new(
        license: Option<String>,
        homepage: Option<String>,
        version: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            license: non_blank(license),
            homepage: non_blank(homepage),
            version: non_blank(version),
            description: non_blank(description),
        }
    }

    /// All fields absent, as for a package found in no registry
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_absent(&self) -> bool {
        self == &Self::absent()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// PackageMetadata: resolved fields for one dependency identifier
#[derive(Debug, Clone, PartialEq)]
pub struct PackageMetadata {
    id: PackageId,
    fields: ManifestFields,
    source: Option<PathBuf>,
}

impl PackageMetadata {
    pub fn new(id: PackageId, fields: ManifestFields, source: Option<PathBuf>) -> Self {
        Self { id, fields, source }
    }

    pub fn id(&self) -> &PackageId {
        &self.id
    }

    pub fn fields(&self) -> &ManifestFields {
        &self.fields
    }

    /// Manifest path the fields were read from, `None` when no candidate existed
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Insertion-ordered mapping from identifier to resolved metadata
///
/// Inserting an identifier that is already present replaces the stored
/// metadata in place, so each identifier appears once and keeps the
/// position of its first occurrence.
#[derive(Debug, Clone, Default)]
pub struct ResolvedDependencies {
    entries: IndexMap<PackageId, PackageMetadata>,
}

impl ResolvedDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, metadata: PackageMetadata) {
        self.entries.insert(metadata.id().clone(), metadata);
    }

    pub fn get(&self, id: &PackageId) -> Option<&PackageMetadata> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PackageMetadata> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
