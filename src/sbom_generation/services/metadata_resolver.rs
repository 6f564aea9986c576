use super::manifest_locator::{ManifestLocator, RegistryPaths};
use crate::ports::outbound::PortManifestReader;
use crate::sbom_generation::domain::{
    DependencyGraph, ManifestFields, PackageId, PackageMetadata, ResolvedDependencies,
};
use crate::shared::Result;

/// MetadataResolver service for turning graph nodes into package metadata
///
/// Lookups are purely local and never retried. A node found in no
/// registry resolves to all-absent fields.
pub struct MetadataResolver;

impl MetadataResolver {
    /// Resolves a single identifier
    ///
    /// # Errors
    /// Returns an error only when an existing manifest cannot be read or parsed
    pub fn resolve<R: PortManifestReader>(
        reader: &R,
        registries: &RegistryPaths,
        id: &PackageId,
    ) -> Result<PackageMetadata> {
        let metadata = match ManifestLocator::locate(reader, registries, id)? {
            Some(located) => PackageMetadata::new(id.clone(), located.fields, Some(located.path)),
            None => PackageMetadata::new(id.clone(), ManifestFields::absent(), None),
        };
        Ok(metadata)
    }

    /// Resolves every node of the graph, in graph order
    ///
    /// Each node is looked up once per occurrence; repeated identifiers land
    /// on the same entry of the returned mapping. `on_resolved` is called
    /// after each lookup with the 1-based position, the node count and the
    /// resolved metadata.
    pub fn resolve_all<R, F>(
        reader: &R,
        registries: &RegistryPaths,
        graph: &DependencyGraph,
        mut on_resolved: F,
    ) -> Result<ResolvedDependencies>
    where
        R: PortManifestReader,
        F: FnMut(usize, usize, &PackageMetadata),
    {
        let total = graph.node_count();
        let mut resolved = ResolvedDependencies::new();

        for (index, id) in graph.nodes().iter().enumerate() {
            let metadata = Self::resolve(reader, registries, id)?;
            on_resolved(index + 1, total, &metadata);
            resolved.insert(metadata);
        }

        Ok(resolved)
    }
}
