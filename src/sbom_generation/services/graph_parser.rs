use crate::sbom_generation::domain::{DependencyGraph, PackageId};
use crate::shared::Result;
use anyhow::Context;

/// XML namespace of Directed Graph Markup Language documents
pub const DGML_NAMESPACE: &str = "http://schemas.microsoft.com/vs/2009/dgml";

/// GraphParser service for reading `vcpkg depend-info --format=dgml` output
///
/// This service contains pure parsing logic. It has no I/O dependencies:
/// the document is read through the GraphDocumentReader port beforehand.
pub struct GraphParser;

impl GraphParser {
    /// Parses a DGML document into the ordered list of its nodes
    ///
    /// Every `Node` element of the DGML namespace contributes its `Id`
    /// attribute, at any depth and in document order. Duplicates are kept;
    /// links are ignored.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The document is not well-formed XML
    /// - A node has no `Id` attribute
    /// - A node id is not a valid package identifier
    pub fn parse(document: &str) -> Result<DependencyGraph> {
        let document = document.trim_start_matches('\u{feff}');
        let xml = roxmltree::Document::parse(document)
            .map_err(|e| anyhow::anyhow!("Malformed DGML document: {}", e))?;

        let nodes = xml
            .descendants()
            .filter(|node| {
                node.is_element()
                    && node.tag_name().name() == "Node"
                    && node.tag_name().namespace() == Some(DGML_NAMESPACE)
            })
            .map(|node| {
                let id = node.attribute("Id").ok_or_else(|| {
                    anyhow::anyhow!(
                        "Node element at byte offset {} has no Id attribute",
                        node.range().start
                    )
                })?;
                PackageId::new(id.to_string())
                    .with_context(|| format!("Invalid node id '{}' in DGML document", id))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DependencyGraph::new(nodes))
    }
}
