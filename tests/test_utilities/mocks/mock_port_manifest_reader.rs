use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use vcpkg_spdx::prelude::*;

/// Mock PortManifestReader backed by an in-memory path -> JSON map
///
/// Records every path it was asked for, in order.
#[derive(Default, Clone)]
pub struct MockPortManifestReader {
    manifests: HashMap<PathBuf, String>,
    pub requested: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockPortManifestReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.manifests.insert(path.into(), content.to_string());
        self
    }

    #[allow(dead_code)]
    pub fn requested_paths(&self) -> Vec<PathBuf> {
        self.requested.lock().unwrap().clone()
    }
}

impl PortManifestReader for MockPortManifestReader {
    fn read_port_manifest(&self, manifest_path: &Path) -> Result<Option<PortManifest>> {
        self.requested
            .lock()
            .unwrap()
            .push(manifest_path.to_path_buf());

        match self.manifests.get(manifest_path) {
            Some(content) => Ok(Some(serde_json::from_str(content)?)),
            None => Ok(None),
        }
    }
}
