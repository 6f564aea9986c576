use crate::sbom_generation::domain::SpdxDocument;
use crate::shared::Result;

/// SpdxFormatter port for serializing the assembled document
///
/// This port abstracts the output encoding (SPDX YAML, SPDX JSON).
pub trait SpdxFormatter {
    /// Serializes the document
    ///
    /// # Returns
    /// The serialized document as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, document: &SpdxDocument) -> Result<String>;
}
