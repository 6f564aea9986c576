pub mod dependency_graph;
pub mod package;
pub mod package_metadata;
pub mod port_manifest;
pub mod project_descriptor;
pub mod spdx_document;

pub use dependency_graph::DependencyGraph;
pub use package::{PackageId, SpdxId};
pub use package_metadata::{ManifestFields, PackageMetadata, ResolvedDependencies, NOASSERTION};
pub use port_manifest::{Description, PortManifest};
pub use project_descriptor::ProjectDescriptor;
pub use spdx_document::{CreationInfo, PackageRecord, Relationship, RelationshipType, SpdxDocument};
