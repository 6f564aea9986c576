use crate::sbom_generation::domain::spdx_document::NAMESPACE_BASE;
use crate::sbom_generation::domain::{
    CreationInfo, PackageRecord, ProjectDescriptor, ResolvedDependencies, SpdxDocument, SpdxId,
};
use std::collections::HashSet;

/// DocumentAssembler service for building the SPDX document
///
/// This service contains pure business logic: no I/O and no serialization.
pub struct DocumentAssembler;

impl DocumentAssembler {
    /// Assembles the document for a project and its resolved dependencies
    ///
    /// The root package record comes first. Dependencies follow in mapping
    /// order, each with a DEPENDS_ON relationship from the root. A dependency
    /// whose SPDX id equals the root's is skipped entirely, so the root never
    /// appears twice nor depends on itself.
    ///
    /// Distinct identifiers can normalize to the same SPDX id (`foo_bar` and
    /// `foo-bar`). The first keeps the id and later ones get the first free
    /// `-2`, `-3`, ... suffix, so every package element id is unique.
    pub fn assemble(
        project: &ProjectDescriptor,
        dependencies: &ResolvedDependencies,
        creation_info: CreationInfo,
    ) -> SpdxDocument {
        let root = PackageRecord::from_fields(project.name(), project.fields());
        let root_spdx_id = root.spdx_id().clone();
        let name = project.name().as_str().to_string();
        let namespace = Self::document_namespace(&name, &creation_info);

        let mut document = SpdxDocument::new(name, namespace, creation_info, root);
        let mut taken: HashSet<SpdxId> = HashSet::from([root_spdx_id.clone()]);

        for metadata in dependencies.iter() {
            if metadata.id().spdx_id() == root_spdx_id {
                continue;
            }
            let record = PackageRecord::from_fields(metadata.id(), metadata.fields());
            let spdx_id = Self::unique_spdx_id(record.spdx_id(), &taken);
            taken.insert(spdx_id.clone());
            document.add_dependency(record.with_spdx_id(spdx_id));
        }

        document
    }

    fn unique_spdx_id(candidate: &SpdxId, taken: &HashSet<SpdxId>) -> SpdxId {
        if !taken.contains(candidate) {
            return candidate.clone();
        }
        (2..)
            .map(|n| candidate.with_suffix(n))
            .find(|id| !taken.contains(id))
            .unwrap_or_else(|| candidate.clone())
    }

    /// Namespace URI unique to this project and creation instant
    pub fn document_namespace(project_name: &str, creation_info: &CreationInfo) -> String {
        format!(
            "{}{}-{}",
            NAMESPACE_BASE,
            project_name,
            creation_info.namespace_timestamp()
        )
    }
}
