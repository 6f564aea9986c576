use crate::sbom_generation::domain::PortManifest;
use crate::shared::Result;
use std::path::Path;

/// PortManifestReader port for reading a port's manifest from a registry
///
/// A missing manifest is an expected outcome (the port lives in another
/// registry, or nowhere at all) and is reported as `Ok(None)`.
pub trait PortManifestReader {
    /// Reads the manifest at `manifest_path` if it exists
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed
    fn read_port_manifest(&self, manifest_path: &Path) -> Result<Option<PortManifest>>;
}
