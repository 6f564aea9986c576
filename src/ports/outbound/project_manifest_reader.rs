use crate::sbom_generation::domain::PortManifest;
use crate::shared::Result;
use std::path::Path;

/// ProjectManifestReader port for reading the project's own manifest
///
/// This port abstracts the file system operations needed to read
/// the root project's vcpkg.json.
pub trait ProjectManifestReader {
    /// Reads and parses the project manifest
    ///
    /// # Arguments
    /// * `manifest_path` - Path to the project's vcpkg.json
    ///
    /// # Returns
    /// The parsed manifest fields
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest does not exist
    /// - The file cannot be read due to permissions or I/O errors
    /// - The file is not valid JSON
    fn read_project_manifest(&self, manifest_path: &Path) -> Result<PortManifest>;
}
