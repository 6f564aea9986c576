use super::{ManifestFields, PackageId, PortManifest};
use crate::sbom_generation::policies::VersionPriority;
use crate::shared::Result;

/// ProjectDescriptor: the root project as declared by its own vcpkg.json
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDescriptor {
    name: PackageId,
    fields: ManifestFields,
}

impl ProjectDescriptor {
    pub fn new(name: PackageId, fields: ManifestFields) -> Self {
        Self { name, fields }
    }

    /// Builds the descriptor from a parsed project manifest
    ///
    /// # Errors
    /// Returns an error if the manifest has no `name` or the name is not a
    /// valid package identifier
    pub fn from_manifest(manifest: &PortManifest) -> Result<Self> {
        let name = manifest
            .name
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Project name not found in manifest"))?;

        Ok(Self::new(
            PackageId::new(name)?,
            VersionPriority::create_manifest_fields(manifest),
        ))
    }

    pub fn name(&self) -> &PackageId {
        &self.name
    }

    pub fn fields(&self) -> &ManifestFields {
        &self.fields
    }
}
