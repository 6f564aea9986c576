use std::path::Path;
use vcpkg_spdx::prelude::*;

/// Mock ProjectManifestReader serving a fixed vcpkg.json
pub struct MockProjectManifestReader {
    content: String,
}

impl MockProjectManifestReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

impl ProjectManifestReader for MockProjectManifestReader {
    fn read_project_manifest(&self, _manifest_path: &Path) -> Result<PortManifest> {
        Ok(serde_json::from_str(&self.content)?)
    }
}
