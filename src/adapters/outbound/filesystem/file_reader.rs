use crate::ports::outbound::{GraphDocumentReader, PortManifestReader, ProjectManifestReader};
use crate::sbom_generation::domain::PortManifest;
use crate::shared::error::SpdxError;
use crate::shared::security::{read_checked_file, SymlinkPolicy};
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading manifests and graph documents
///
/// This adapter implements the ProjectManifestReader, PortManifestReader
/// and GraphDocumentReader ports on top of the local file system.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectManifestReader for FileSystemReader {
    fn read_project_manifest(&self, manifest_path: &Path) -> Result<PortManifest> {
        if !manifest_path.exists() {
            return Err(SpdxError::ProjectManifestNotFound {
                path: manifest_path.to_path_buf(),
                suggestion: format!(
                    "\"{}\" does not exist.\n   \
                     Please run in the root directory of a vcpkg manifest project, or specify the manifest with the --project-manifest option.",
                    manifest_path.display()
                ),
            }
            .into());
        }

        let content = read_checked_file(manifest_path, "project manifest", SymlinkPolicy::Reject)
            .map_err(|e| SpdxError::ProjectManifestParseError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            })?;

        serde_json::from_str(&content).map_err(|e| {
            SpdxError::ProjectManifestParseError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl PortManifestReader for FileSystemReader {
    fn read_port_manifest(&self, manifest_path: &Path) -> Result<Option<PortManifest>> {
        if !manifest_path.exists() {
            return Ok(None);
        }

        let content = read_checked_file(manifest_path, "port manifest", SymlinkPolicy::Follow)
            .map_err(|e| SpdxError::FileReadError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            })?;

        let manifest = serde_json::from_str(&content).map_err(|e| {
            SpdxError::PortManifestParseError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        Ok(Some(manifest))
    }
}

impl GraphDocumentReader for FileSystemReader {
    fn read_graph_document(&self, graph_path: &Path) -> Result<String> {
        if !graph_path.exists() {
            return Err(SpdxError::GraphParseError {
                path: graph_path.to_path_buf(),
                details: "Dependency graph document does not exist".to_string(),
            }
            .into());
        }

        read_checked_file(graph_path, "dependency graph", SymlinkPolicy::Reject).map_err(|e| {
            SpdxError::FileReadError {
                path: graph_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
