use crate::shared::Result;
use std::path::Path;

/// GraphDocumentReader port for loading the dependency graph document
pub trait GraphDocumentReader {
    /// Reads the raw DGML document produced by `vcpkg depend-info`
    ///
    /// # Errors
    /// Returns an error if the document is absent or unreadable; the graph
    /// is mandatory input, so callers treat this as fatal
    fn read_graph_document(&self, graph_path: &Path) -> Result<String>;
}
