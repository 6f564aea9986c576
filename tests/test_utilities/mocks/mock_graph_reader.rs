use std::path::Path;
use vcpkg_spdx::prelude::*;

/// Mock GraphDocumentReader serving a fixed DGML document
pub struct MockGraphReader {
    content: String,
}

impl MockGraphReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }

    /// Builds a DGML document with one `Node` per identifier
    pub fn with_nodes(ids: &[&str]) -> Self {
        let nodes: String = ids
            .iter()
            .map(|id| format!("    <Node Id=\"{}\" />\n", id))
            .collect();
        Self::new(&format!(
            "<DirectedGraph xmlns=\"http://schemas.microsoft.com/vs/2009/dgml\">\n  <Nodes>\n{}  </Nodes>\n</DirectedGraph>\n",
            nodes
        ))
    }
}

impl GraphDocumentReader for MockGraphReader {
    fn read_graph_document(&self, _graph_path: &Path) -> Result<String> {
        Ok(self.content.clone())
    }
}
