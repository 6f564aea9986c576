use crate::sbom_generation::domain::SpdxDocument;
use std::path::PathBuf;

/// SpdxResponse - Internal response DTO from the generation use case
///
/// Carries the format-agnostic document; adapters serialize it.
#[derive(Debug, Clone)]
pub struct SpdxResponse {
    /// The assembled document
    pub document: SpdxDocument,
    /// Graph document the dependencies were read from
    pub graph_path: PathBuf,
    /// Mermaid diagram written alongside, when requested
    pub mermaid_path: Option<PathBuf>,
}

impl SpdxResponse {
    pub fn new(document: SpdxDocument, graph_path: PathBuf, mermaid_path: Option<PathBuf>) -> Self {
        Self {
            document,
            graph_path,
            mermaid_path,
        }
    }

    /// Number of dependency packages (root excluded)
    pub fn dependency_count(&self) -> usize {
        self.document.relationships().len()
    }
}
